use axum::response::Response;
use serde_json::Value;

use crate::screener::domain::{
    HoursStatus, IndicatorCategory, MedicaidStatus, PainPoint, ScreenerState, ScreenerStep,
};

/// A state with every answer filled in, parked on `step`.
pub(super) fn answered(
    medicaid: MedicaidStatus,
    hours: HoursStatus,
    county: &str,
    indicators: &[(IndicatorCategory, &str)],
) -> ScreenerState {
    let mut state = ScreenerState {
        step: ScreenerStep::Location,
        medicaid_status: Some(medicaid),
        hours_status: Some(hours),
        pain_point: Some(PainPoint::FindingAgency),
        county: county.to_string(),
        ..ScreenerState::default()
    };
    for (category, id) in indicators {
        state.indicators_mut(*category).insert((*id).to_string());
    }
    state
}

/// Every indicator selection used by the monotonicity checks, lightest first.
pub(super) const INDICATOR_LADDER: [(IndicatorCategory, &str); 6] = [
    (IndicatorCategory::Mobility, "non_ambulatory"),
    (IndicatorCategory::Feeding, "g_tube"),
    (IndicatorCategory::Airway, "trach"),
    (IndicatorCategory::Neuro, "rescue_medication"),
    (IndicatorCategory::Skilled, "central_line"),
    (IndicatorCategory::Airway, "ventilator"),
];

/// A light and a heavy care need for `category`; mobility has no heavy need.
pub(super) fn sample_needs(category: IndicatorCategory) -> (&'static str, &'static str) {
    match category {
        IndicatorCategory::Airway => ("oxygen", "trach"),
        IndicatorCategory::Feeding => ("g_tube", "tpn"),
        IndicatorCategory::Neuro => ("shunt", "rescue_medication"),
        IndicatorCategory::Mobility => ("non_ambulatory", "lift_transfers"),
        IndicatorCategory::Skilled => ("wound_care", "dialysis"),
    }
}

/// One need for each category whose bit is set in `mask`.
pub(super) fn needs_for_mask(mask: u8, heavy: bool) -> Vec<(IndicatorCategory, &'static str)> {
    IndicatorCategory::ALL
        .into_iter()
        .enumerate()
        .filter(|(bit, _)| mask & (1 << bit) != 0)
        .map(|(_, category)| {
            let (light, heavy_need) = sample_needs(category);
            (category, if heavy { heavy_need } else { light })
        })
        .collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
