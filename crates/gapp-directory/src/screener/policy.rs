use serde::{Deserialize, Serialize};

use super::catalog::ScreenerCatalog;
use super::domain::{FitLevel, HoursStatus, MedicaidStatus, ScreenerState};

/// Care complexity signals derived from the indicator selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CareComplexity {
    /// Indicator groups with at least one selection.
    pub breadth: u8,
    /// Selected indicators flagged as heavy in the catalog.
    pub heavy: u8,
}

impl CareComplexity {
    pub fn assess(state: &ScreenerState, catalog: &ScreenerCatalog) -> Self {
        let heavy = state
            .selected_indicators()
            .filter(|(category, id)| {
                catalog
                    .indicator(*category, id)
                    .is_some_and(|indicator| indicator.heavy)
            })
            .count();

        Self {
            breadth: state.category_breadth(),
            heavy: u8::try_from(heavy).unwrap_or(u8::MAX),
        }
    }

    pub fn score(self) -> u8 {
        self.breadth.saturating_add(self.heavy)
    }
}

/// Inputs a fit rule can look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitSignals {
    pub complexity: CareComplexity,
    pub medicaid: Option<MedicaidStatus>,
    pub hours: Option<HoursStatus>,
}

impl FitSignals {
    pub fn from_state(state: &ScreenerState, catalog: &ScreenerCatalog) -> Self {
        Self {
            complexity: CareComplexity::assess(state, catalog),
            medicaid: state.medicaid_status,
            hours: state.hours_status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FitCondition {
    MedicaidIs(MedicaidStatus),
    HoursIn(Vec<HoursStatus>),
    ComplexityAtMost(u8),
    ComplexityAtLeast(u8),
    All(Vec<FitCondition>),
}

impl FitCondition {
    pub fn matches(&self, signals: &FitSignals) -> bool {
        match self {
            FitCondition::MedicaidIs(status) => signals.medicaid == Some(*status),
            FitCondition::HoursIn(statuses) => signals
                .hours
                .is_some_and(|hours| statuses.contains(&hours)),
            FitCondition::ComplexityAtMost(limit) => signals.complexity.score() <= *limit,
            FitCondition::ComplexityAtLeast(floor) => signals.complexity.score() >= *floor,
            FitCondition::All(conditions) => {
                conditions.iter().all(|condition| condition.matches(signals))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitRule {
    pub name: &'static str,
    pub condition: FitCondition,
    pub level: FitLevel,
}

/// Ordered rule table; the first matching rule decides, `fallback` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitPolicy {
    pub rules: Vec<FitRule>,
    pub fallback: FitLevel,
}

impl Default for FitPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl FitPolicy {
    pub fn standard() -> Self {
        Self {
            rules: vec![
                FitRule {
                    name: "no_medicaid",
                    condition: FitCondition::MedicaidIs(MedicaidStatus::NotEnrolled),
                    level: FitLevel::Weak,
                },
                FitRule {
                    name: "minimal_care_needs",
                    condition: FitCondition::ComplexityAtMost(1),
                    level: FitLevel::Weak,
                },
                FitRule {
                    name: "complex_needs_with_coverage",
                    condition: FitCondition::All(vec![
                        FitCondition::ComplexityAtLeast(3),
                        FitCondition::MedicaidIs(MedicaidStatus::Active),
                        FitCondition::HoursIn(vec![HoursStatus::Approved, HoursStatus::Reduced]),
                    ]),
                    level: FitLevel::Strong,
                },
            ],
            fallback: FitLevel::Moderate,
        }
    }

    pub fn decide(&self, signals: &FitSignals) -> FitLevel {
        self.matching_rule(signals)
            .map(|rule| rule.level)
            .unwrap_or(self.fallback)
    }

    pub fn matching_rule(&self, signals: &FitSignals) -> Option<&FitRule> {
        self.rules
            .iter()
            .find(|rule| rule.condition.matches(signals))
    }
}
