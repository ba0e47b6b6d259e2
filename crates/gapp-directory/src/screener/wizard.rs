use serde::{Deserialize, Serialize};

use super::domain::{ScreenerResult, ScreenerState, ScreenerStep};
use super::ScreenerEngine;

/// Whether the answers collected so far allow leaving `step` forward.
pub fn can_proceed_from_step(state: &ScreenerState, step: ScreenerStep) -> bool {
    match step {
        ScreenerStep::CareNeeds => true,
        ScreenerStep::Coverage => {
            state.medicaid_status.is_some()
                && state.hours_status.is_some()
                && state.pain_point.is_some()
        }
        ScreenerStep::Location => !state.county.trim().is_empty(),
        ScreenerStep::Results => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenerAction {
    Next,
    Back,
    StartOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Moved(ScreenerStep),
    /// A guard at or before the current step failed; the state is unchanged.
    Blocked(ScreenerStep),
    /// Entered the results step.
    Completed(ScreenerResult),
    AtResults,
}

/// First step at or before `through` whose guard fails.
pub fn first_blocked_step(state: &ScreenerState, through: ScreenerStep) -> Option<ScreenerStep> {
    let mut step = Some(ScreenerStep::CareNeeds);
    while let Some(current) = step.filter(|current| *current <= through) {
        if !can_proceed_from_step(state, current) {
            return Some(current);
        }
        step = current.next();
    }
    None
}

/// Move forward one step. Every guard up to the current step must hold, not
/// only the current one.
pub fn advance(state: &mut ScreenerState, engine: &ScreenerEngine) -> StepOutcome {
    let Some(next) = state.step.next() else {
        return match first_blocked_step(state, ScreenerStep::Location) {
            Some(blocked) => StepOutcome::Blocked(blocked),
            None => StepOutcome::AtResults,
        };
    };
    if let Some(blocked) = first_blocked_step(state, state.step) {
        return StepOutcome::Blocked(blocked);
    }

    state.step = next;
    if next == ScreenerStep::Results {
        StepOutcome::Completed(engine.evaluate(state))
    } else {
        StepOutcome::Moved(next)
    }
}

/// Step back one position; stays on the first step.
pub fn back(state: &mut ScreenerState) -> ScreenerStep {
    if let Some(previous) = state.step.previous() {
        state.step = previous;
    }
    state.step
}

pub fn start_over(state: &mut ScreenerState) {
    *state = ScreenerState::default();
}

/// Snapshot returned after applying an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub state: ScreenerState,
    pub can_proceed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ScreenerResult>,
}

pub fn apply_action(
    mut state: ScreenerState,
    action: ScreenerAction,
    engine: &ScreenerEngine,
) -> Transition {
    let result = match action {
        ScreenerAction::Next => match advance(&mut state, engine) {
            StepOutcome::Completed(result) => Some(result),
            StepOutcome::AtResults => Some(engine.evaluate(&state)),
            StepOutcome::Moved(_) | StepOutcome::Blocked(_) => None,
        },
        ScreenerAction::Back => {
            back(&mut state);
            None
        }
        ScreenerAction::StartOver => {
            start_over(&mut state);
            None
        }
    };

    Transition {
        can_proceed: first_blocked_step(&state, state.step).is_none(),
        state,
        result,
    }
}
