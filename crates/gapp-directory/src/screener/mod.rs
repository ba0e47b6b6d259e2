//! Eligibility screener: a four-step wizard that turns a family's answers into
//! a GAPP fit estimate, next steps, and call scripts.

mod catalog;
mod domain;
mod policy;
mod results;
mod router;
mod wizard;

#[cfg(test)]
mod tests;

pub use catalog::{
    FitCopy, Indicator, IndicatorGroup, OptionEntry, ScreenerCatalog, ScriptTemplates, StepCopy,
};
pub use domain::{
    FitContent, FitLevel, HoursStatus, IndicatorCategory, InvalidStep, MedicaidStatus, NextStep,
    PainPoint, ScreenerResult, ScreenerState, ScreenerStep, ScriptSet,
};
pub use policy::{CareComplexity, FitCondition, FitPolicy, FitRule, FitSignals};
pub use results::county_phrase;
pub use router::{screener_router, TransitionRequest};
pub use wizard::{
    advance, apply_action, back, can_proceed_from_step, first_blocked_step, start_over,
    ScreenerAction, StepOutcome, Transition,
};

use tracing::debug;

/// Stateless evaluator pairing the screener copy with the fit rule table.
#[derive(Debug, Clone, Default)]
pub struct ScreenerEngine {
    catalog: ScreenerCatalog,
    policy: FitPolicy,
}

impl ScreenerEngine {
    pub fn new(catalog: ScreenerCatalog, policy: FitPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn standard() -> Self {
        Self::new(ScreenerCatalog::standard(), FitPolicy::standard())
    }

    pub fn catalog(&self) -> &ScreenerCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> &FitPolicy {
        &self.policy
    }

    pub fn evaluate(&self, state: &ScreenerState) -> ScreenerResult {
        let result = results::build_results(state, &self.catalog, &self.policy);
        debug!(
            fit_level = result.fit_level.label(),
            next_steps = result.next_steps.len(),
            hour_reduction = result.show_hour_reduction,
            "screener results generated"
        );
        result
    }
}

/// Results for `state` under the standard catalog and fit policy.
pub fn generate_results(state: &ScreenerState) -> ScreenerResult {
    ScreenerEngine::standard().evaluate(state)
}
