use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Wizard position. Step 4 shows results and has no forward transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ScreenerStep {
    #[default]
    CareNeeds = 1,
    Coverage = 2,
    Location = 3,
    Results = 4,
}

impl ScreenerStep {
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn next(self) -> Option<ScreenerStep> {
        match self {
            ScreenerStep::CareNeeds => Some(ScreenerStep::Coverage),
            ScreenerStep::Coverage => Some(ScreenerStep::Location),
            ScreenerStep::Location => Some(ScreenerStep::Results),
            ScreenerStep::Results => None,
        }
    }

    pub const fn previous(self) -> Option<ScreenerStep> {
        match self {
            ScreenerStep::CareNeeds => None,
            ScreenerStep::Coverage => Some(ScreenerStep::CareNeeds),
            ScreenerStep::Location => Some(ScreenerStep::Coverage),
            ScreenerStep::Results => Some(ScreenerStep::Location),
        }
    }
}

impl From<ScreenerStep> for u8 {
    fn from(step: ScreenerStep) -> Self {
        step.number()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("screener step must be between 1 and 4, got {0}")]
pub struct InvalidStep(pub u8);

impl TryFrom<u8> for ScreenerStep {
    type Error = InvalidStep;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ScreenerStep::CareNeeds),
            2 => Ok(ScreenerStep::Coverage),
            3 => Ok(ScreenerStep::Location),
            4 => Ok(ScreenerStep::Results),
            other => Err(InvalidStep(other)),
        }
    }
}

/// Care-complexity indicator groups shown on the first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCategory {
    Airway,
    Feeding,
    Neuro,
    Mobility,
    Skilled,
}

impl IndicatorCategory {
    pub const ALL: [IndicatorCategory; 5] = [
        IndicatorCategory::Airway,
        IndicatorCategory::Feeding,
        IndicatorCategory::Neuro,
        IndicatorCategory::Mobility,
        IndicatorCategory::Skilled,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicaidStatus {
    Active,
    Pending,
    #[serde(rename = "none")]
    NotEnrolled,
    Unsure,
}

impl MedicaidStatus {
    pub const ALL: [MedicaidStatus; 4] = [
        MedicaidStatus::Active,
        MedicaidStatus::Pending,
        MedicaidStatus::NotEnrolled,
        MedicaidStatus::Unsure,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursStatus {
    Approved,
    NotApproved,
    Unsure,
    Reduced,
}

impl HoursStatus {
    pub const ALL: [HoursStatus; 4] = [
        HoursStatus::Approved,
        HoursStatus::NotApproved,
        HoursStatus::Unsure,
        HoursStatus::Reduced,
    ];

    /// Families whose approved hours were cut get the coordinator script and extra advice.
    pub const fn signals_reduction(self) -> bool {
        matches!(self, HoursStatus::Reduced)
    }
}

/// The obstacle the family says is getting in the way right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PainPoint {
    FindingAgency,
    StaffingGaps,
    HoursCut,
    ApplicationHelp,
    UnderstandingEligibility,
    Other,
}

impl PainPoint {
    pub const ALL: [PainPoint; 6] = [
        PainPoint::FindingAgency,
        PainPoint::StaffingGaps,
        PainPoint::HoursCut,
        PainPoint::ApplicationHelp,
        PainPoint::UnderstandingEligibility,
        PainPoint::Other,
    ];
}

/// Answers accumulated across the screener steps.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerState {
    #[serde(default)]
    pub step: ScreenerStep,
    #[serde(default)]
    pub airway: BTreeSet<String>,
    #[serde(default)]
    pub feeding: BTreeSet<String>,
    #[serde(default)]
    pub neuro: BTreeSet<String>,
    #[serde(default)]
    pub mobility: BTreeSet<String>,
    #[serde(default)]
    pub skilled: BTreeSet<String>,
    #[serde(default)]
    pub medicaid_status: Option<MedicaidStatus>,
    #[serde(default)]
    pub hours_status: Option<HoursStatus>,
    #[serde(default)]
    pub pain_point: Option<PainPoint>,
    #[serde(default)]
    pub county: String,
    #[serde(default)]
    pub zip_code: Option<String>,
}

impl ScreenerState {
    pub fn indicators(&self, category: IndicatorCategory) -> &BTreeSet<String> {
        match category {
            IndicatorCategory::Airway => &self.airway,
            IndicatorCategory::Feeding => &self.feeding,
            IndicatorCategory::Neuro => &self.neuro,
            IndicatorCategory::Mobility => &self.mobility,
            IndicatorCategory::Skilled => &self.skilled,
        }
    }

    pub fn indicators_mut(&mut self, category: IndicatorCategory) -> &mut BTreeSet<String> {
        match category {
            IndicatorCategory::Airway => &mut self.airway,
            IndicatorCategory::Feeding => &mut self.feeding,
            IndicatorCategory::Neuro => &mut self.neuro,
            IndicatorCategory::Mobility => &mut self.mobility,
            IndicatorCategory::Skilled => &mut self.skilled,
        }
    }

    /// Select or deselect an indicator. Returns true when it ends up selected.
    pub fn toggle_indicator(&mut self, category: IndicatorCategory, id: &str) -> bool {
        let selected = self.indicators_mut(category);
        if selected.remove(id) {
            false
        } else {
            selected.insert(id.to_string());
            true
        }
    }

    /// Number of indicator groups with at least one selection.
    pub fn category_breadth(&self) -> u8 {
        IndicatorCategory::ALL
            .iter()
            .filter(|category| !self.indicators(**category).is_empty())
            .count() as u8
    }

    pub fn selected_indicators(&self) -> impl Iterator<Item = (IndicatorCategory, &str)> {
        IndicatorCategory::ALL.into_iter().flat_map(move |category| {
            self.indicators(category)
                .iter()
                .map(move |id| (category, id.as_str()))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitLevel {
    Weak,
    Moderate,
    Strong,
}

impl FitLevel {
    pub const fn label(self) -> &'static str {
        match self {
            FitLevel::Strong => "strong",
            FitLevel::Moderate => "moderate",
            FitLevel::Weak => "weak",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitContent {
    pub title: String,
    pub snapshot: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextStep {
    pub step: u8,
    pub title: String,
    pub description: String,
}

/// Plain-text call scripts. `coordinator` is absent unless hours were reduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSet {
    pub agency: String,
    pub pediatrician: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerResult {
    pub fit_level: FitLevel,
    pub fit_content: FitContent,
    pub next_steps: Vec<NextStep>,
    pub scripts: ScriptSet,
    pub show_hour_reduction: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_serializes_as_number() {
        let state = ScreenerState {
            step: ScreenerStep::Location,
            ..ScreenerState::default()
        };
        let json = serde_json::to_value(&state).expect("serializes");
        assert_eq!(json["step"], serde_json::json!(3));

        let parsed: ScreenerState =
            serde_json::from_value(serde_json::json!({ "step": 2, "medicaidStatus": "none" }))
                .expect("parses");
        assert_eq!(parsed.step, ScreenerStep::Coverage);
        assert_eq!(parsed.medicaid_status, Some(MedicaidStatus::NotEnrolled));

        assert!(serde_json::from_value::<ScreenerState>(serde_json::json!({ "step": 5 })).is_err());
    }

    #[test]
    fn toggling_indicators_updates_breadth() {
        let mut state = ScreenerState::default();
        assert_eq!(state.category_breadth(), 0);
        assert!(state.toggle_indicator(IndicatorCategory::Airway, "trach"));
        assert!(state.toggle_indicator(IndicatorCategory::Airway, "oxygen"));
        assert!(state.toggle_indicator(IndicatorCategory::Feeding, "g_tube"));
        assert_eq!(state.category_breadth(), 2);
        assert!(!state.toggle_indicator(IndicatorCategory::Feeding, "g_tube"));
        assert_eq!(state.category_breadth(), 1);
        assert_eq!(state.selected_indicators().count(), 2);
    }
}
