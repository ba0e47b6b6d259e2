use super::catalog::{ScreenerCatalog, StepCopy};
use super::domain::{
    FitContent, FitLevel, MedicaidStatus, NextStep, ScreenerResult, ScreenerState, ScriptSet,
};
use super::policy::{FitPolicy, FitSignals};

const MAX_NEXT_STEPS: usize = 4;
const SCRIPT_QUOTES: [char; 3] = ['"', '\u{201C}', '\u{201D}'];

/// Build the results bundle shown when the family reaches the final step.
pub fn build_results(
    state: &ScreenerState,
    catalog: &ScreenerCatalog,
    policy: &FitPolicy,
) -> ScreenerResult {
    let signals = FitSignals::from_state(state, catalog);
    let fit_level = policy.decide(&signals);
    let county = county_phrase(&state.county);
    let reduced = state
        .hours_status
        .is_some_and(|hours| hours.signals_reduction());

    let fit_copy = catalog.fit_copy(fit_level);

    ScreenerResult {
        fit_level,
        fit_content: FitContent {
            title: fit_copy.title.to_string(),
            snapshot: fit_copy.snapshot.to_string(),
        },
        next_steps: next_steps(state, catalog, fit_level, reduced, &county),
        scripts: ScriptSet {
            agency: render_script(catalog.scripts.agency, &county),
            pediatrician: render_script(catalog.scripts.pediatrician, &county),
            coordinator: reduced.then(|| render_script(catalog.scripts.coordinator, &county)),
        },
        show_hour_reduction: reduced,
    }
}

fn next_steps(
    state: &ScreenerState,
    catalog: &ScreenerCatalog,
    fit_level: FitLevel,
    reduced: bool,
    county: &str,
) -> Vec<NextStep> {
    let mut copy: Vec<StepCopy> = Vec::with_capacity(MAX_NEXT_STEPS + 2);
    if state.medicaid_status != Some(MedicaidStatus::Active) {
        copy.push(catalog.medicaid_step(state.medicaid_status));
    }
    if reduced {
        copy.push(catalog.hour_review_step());
    }
    copy.extend_from_slice(catalog.fit_steps(fit_level));

    copy.into_iter()
        .take(MAX_NEXT_STEPS)
        .zip(1u8..)
        .map(|(step, number)| NextStep {
            step: number,
            title: step.title.replace("{county}", county),
            description: step.description.replace("{county}", county),
        })
        .collect()
}

/// "Cobb County" for "Cobb" or "Cobb County"; "your county" when blank.
pub fn county_phrase(county: &str) -> String {
    let trimmed = county.trim();
    if trimmed.is_empty() {
        return "your county".to_string();
    }

    let base = trimmed
        .len()
        .checked_sub(" county".len())
        .filter(|split| {
            trimmed.is_char_boundary(*split)
                && trimmed[*split..].eq_ignore_ascii_case(" county")
        })
        .map_or(trimmed, |split| trimmed[..split].trim_end());
    format!("{base} County")
}

fn render_script(template: &str, county: &str) -> String {
    template
        .replace("{county}", county)
        .trim()
        .trim_matches(SCRIPT_QUOTES.as_slice())
        .trim()
        .to_string()
}
