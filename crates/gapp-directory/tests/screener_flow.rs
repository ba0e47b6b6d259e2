use gapp_directory::screener::{
    apply_action, can_proceed_from_step, generate_results, FitLevel, HoursStatus,
    IndicatorCategory, MedicaidStatus, PainPoint, ScreenerAction, ScreenerEngine, ScreenerState,
    ScreenerStep,
};

#[test]
fn family_walks_through_screener_to_results() {
    let engine = ScreenerEngine::standard();
    let mut state = ScreenerState::default();

    state.toggle_indicator(IndicatorCategory::Airway, "trach");
    state.toggle_indicator(IndicatorCategory::Feeding, "g_tube");
    state.toggle_indicator(IndicatorCategory::Neuro, "daily_seizures");
    let transition = apply_action(state, ScreenerAction::Next, &engine);
    assert_eq!(transition.state.step, ScreenerStep::Coverage);
    assert!(!transition.can_proceed);

    let mut state = transition.state;
    state.medicaid_status = Some(MedicaidStatus::Active);
    state.hours_status = Some(HoursStatus::Reduced);
    state.pain_point = Some(PainPoint::HoursCut);
    let transition = apply_action(state, ScreenerAction::Next, &engine);
    assert_eq!(transition.state.step, ScreenerStep::Location);
    assert!(!transition.can_proceed);

    let mut state = transition.state;
    state.county = "Gwinnett".to_string();
    assert!(can_proceed_from_step(&state, ScreenerStep::Location));
    let transition = apply_action(state, ScreenerAction::Next, &engine);

    let result = transition.result.expect("results on final step");
    assert_eq!(transition.state.step, ScreenerStep::Results);
    assert_eq!(result.fit_level, FitLevel::Strong);
    assert!(result.show_hour_reduction);
    assert_eq!(
        result.next_steps[0].title,
        "Ask for a review of your reduced hours"
    );
    assert!(result
        .scripts
        .coordinator
        .as_deref()
        .is_some_and(|script| script.contains("Gwinnett County")));

    let back = apply_action(transition.state, ScreenerAction::Back, &engine);
    assert_eq!(back.state.step, ScreenerStep::Location);
    assert_eq!(back.state.county, "Gwinnett");
    assert!(back.result.is_none());
}

#[test]
fn families_without_medicaid_get_coverage_guidance_first() {
    let state = ScreenerState {
        step: ScreenerStep::Results,
        medicaid_status: Some(MedicaidStatus::NotEnrolled),
        hours_status: Some(HoursStatus::NotApproved),
        pain_point: Some(PainPoint::UnderstandingEligibility),
        county: "Lowndes".to_string(),
        ..ScreenerState::default()
    };

    let result = generate_results(&state);
    assert_eq!(result.fit_level, FitLevel::Weak);
    assert_eq!(result.next_steps[0].title, "Confirm Medicaid is active");
    assert!(result.next_steps[0].description.contains("Katie Beckett"));
    assert!(result.scripts.coordinator.is_none());

    let json = serde_json::to_value(&result).expect("serializes");
    assert_eq!(json["fitLevel"], serde_json::json!("weak"));
    assert!(json["scripts"].get("coordinator").is_none());
}
