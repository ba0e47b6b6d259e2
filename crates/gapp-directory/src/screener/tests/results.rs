use super::common::*;
use crate::screener::domain::{
    FitLevel, HoursStatus, IndicatorCategory, MedicaidStatus, PainPoint, ScreenerState,
};
use crate::screener::{generate_results, ScreenerEngine};

#[test]
fn every_answer_combination_yields_a_complete_result() {
    let engine = ScreenerEngine::standard();
    let category_sets = 1u8 << IndicatorCategory::ALL.len();
    for mask in 0..category_sets {
        for heavy in [false, true] {
            let needs = needs_for_mask(mask, heavy);
            for medicaid in MedicaidStatus::ALL {
                for hours in HoursStatus::ALL {
                    for pain_point in PainPoint::ALL {
                        let mut state = answered(medicaid, hours, "Bibb", &needs);
                        state.pain_point = Some(pain_point);
                        let result = engine.evaluate(&state);
                        let case = format!("{mask:05b}/{heavy}/{medicaid:?}/{hours:?}");

                        assert!(
                            (2..=4).contains(&result.next_steps.len()),
                            "{case} produced {} steps",
                            result.next_steps.len()
                        );
                        let numbers: Vec<u8> =
                            result.next_steps.iter().map(|step| step.step).collect();
                        let expected: Vec<u8> = (1..=result.next_steps.len() as u8).collect();
                        assert_eq!(numbers, expected, "{case}");
                        assert!(!result.scripts.agency.is_empty(), "{case}");
                        assert!(!result.scripts.pediatrician.is_empty(), "{case}");
                        assert!(!result.fit_content.title.is_empty(), "{case}");
                        if mask == 0 || medicaid == MedicaidStatus::NotEnrolled {
                            assert_eq!(result.fit_level, FitLevel::Weak, "{case}");
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn confirm_medicaid_step_leads_unless_active() {
    for medicaid in MedicaidStatus::ALL {
        let state = answered(medicaid, HoursStatus::Approved, "Hall", &INDICATOR_LADDER[..3]);
        let result = generate_results(&state);
        let leads = result.next_steps[0].title == "Confirm Medicaid is active";
        assert_eq!(leads, medicaid != MedicaidStatus::Active, "{medicaid:?}");
    }
}

#[test]
fn coordinator_script_only_when_hours_reduced() {
    for hours in HoursStatus::ALL {
        let state = answered(MedicaidStatus::Active, hours, "Clarke", &[]);
        let result = generate_results(&state);
        let reduced = hours == HoursStatus::Reduced;
        assert_eq!(result.scripts.coordinator.is_some(), reduced, "{hours:?}");
        assert_eq!(result.show_hour_reduction, reduced);

        let json = serde_json::to_value(&result).expect("serializes");
        assert_eq!(json["scripts"].get("coordinator").is_some(), reduced);
        assert_eq!(json["showHourReduction"], serde_json::json!(reduced));
    }
}

#[test]
fn fit_level_never_drops_as_needs_are_added() {
    let engine = ScreenerEngine::standard();
    for medicaid in MedicaidStatus::ALL {
        for hours in HoursStatus::ALL {
            let mut previous = FitLevel::Weak;
            for depth in 0..=INDICATOR_LADDER.len() {
                let state = answered(medicaid, hours, "Bibb", &INDICATOR_LADDER[..depth]);
                let level = engine.evaluate(&state).fit_level;
                assert!(
                    level >= previous,
                    "{medicaid:?}/{hours:?} fell from {previous:?} to {level:?} at depth {depth}"
                );
                previous = level;
            }
        }
    }
}

#[test]
fn complex_covered_family_is_strong_fit() {
    let state = answered(
        MedicaidStatus::Active,
        HoursStatus::Approved,
        "Fulton County",
        &[
            (IndicatorCategory::Airway, "trach"),
            (IndicatorCategory::Feeding, "g_tube"),
        ],
    );
    let result = generate_results(&state);
    assert_eq!(result.fit_level, FitLevel::Strong);
    assert_eq!(result.next_steps.len(), 3);
    assert_eq!(result.next_steps[0].title, "Contact GAPP agencies in Fulton County");
    assert!(result.scripts.agency.contains("Fulton County"));
    assert!(!result.scripts.agency.starts_with('"'));
    assert!(!result.scripts.agency.ends_with('"'));
}

#[test]
fn reduced_hours_add_review_step_and_cap_at_four() {
    let state = answered(
        MedicaidStatus::Pending,
        HoursStatus::Reduced,
        "",
        &INDICATOR_LADDER,
    );
    let result = generate_results(&state);
    assert_eq!(result.fit_level, FitLevel::Moderate);
    assert_eq!(result.next_steps.len(), 4);
    assert_eq!(result.next_steps[1].title, "Ask for a review of your reduced hours");
    assert!(result
        .scripts
        .coordinator
        .as_deref()
        .is_some_and(|script| script.contains("your county")));
}

#[test]
fn empty_state_still_produces_results() {
    let result = generate_results(&ScreenerState::default());
    assert_eq!(result.fit_level, FitLevel::Weak);
    assert!(result.next_steps.len() >= 2);
}
