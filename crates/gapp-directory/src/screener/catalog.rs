//! Static copy and taxonomy tables backing the screener.

use serde::Serialize;

use super::domain::{FitLevel, HoursStatus, IndicatorCategory, MedicaidStatus, PainPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub id: &'static str,
    pub label: &'static str,
    /// High-acuity needs that weigh more heavily toward skilled nursing.
    pub heavy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndicatorGroup {
    pub category: IndicatorCategory,
    pub title: &'static str,
    pub indicators: &'static [Indicator],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionEntry<T> {
    pub value: T,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FitCopy {
    pub title: &'static str,
    pub snapshot: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepCopy {
    pub title: &'static str,
    pub description: &'static str,
}

/// Script templates. `{county}` is replaced with the family's county phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScriptTemplates {
    pub agency: &'static str,
    pub pediatrician: &'static str,
    pub coordinator: &'static str,
}

const fn indicator(id: &'static str, label: &'static str, heavy: bool) -> Indicator {
    Indicator { id, label, heavy }
}

static AIRWAY: [Indicator; 5] = [
    indicator("trach", "Tracheostomy", true),
    indicator("ventilator", "Ventilator (full or part time)", true),
    indicator("bipap_cpap", "BiPAP or CPAP", false),
    indicator("oxygen", "Supplemental oxygen", false),
    indicator("frequent_suctioning", "Frequent suctioning", false),
];

static FEEDING: [Indicator; 5] = [
    indicator("g_tube", "G-tube or GJ-tube", false),
    indicator("ng_tube", "NG or NJ tube", false),
    indicator("tpn", "TPN / IV nutrition", true),
    indicator("continuous_feeds", "Continuous pump feeds", false),
    indicator("aspiration_risk", "High aspiration risk", false),
];

static NEURO: [Indicator; 4] = [
    indicator("daily_seizures", "Daily seizures", false),
    indicator("rescue_medication", "Seizures needing rescue medication", true),
    indicator("vns", "VNS or other implanted device", false),
    indicator("shunt", "VP shunt", false),
];

static MOBILITY: [Indicator; 4] = [
    indicator("non_ambulatory", "Does not walk independently", false),
    indicator("repositioning", "Needs frequent repositioning", false),
    indicator("lift_transfers", "Lift or two-person transfers", false),
    indicator("contractures", "Contractures or spasticity care", false),
];

static SKILLED: [Indicator; 6] = [
    indicator("iv_medications", "IV medications", true),
    indicator("central_line", "Central line or port care", true),
    indicator("dialysis", "Home dialysis", true),
    indicator("catheterization", "Intermittent catheterization", false),
    indicator("wound_care", "Complex wound care", false),
    indicator("medication_schedule", "Multiple daily medications", false),
];

static INDICATOR_GROUPS: [IndicatorGroup; 5] = [
    IndicatorGroup {
        category: IndicatorCategory::Airway,
        title: "Breathing & airway",
        indicators: &AIRWAY,
    },
    IndicatorGroup {
        category: IndicatorCategory::Feeding,
        title: "Feeding & nutrition",
        indicators: &FEEDING,
    },
    IndicatorGroup {
        category: IndicatorCategory::Neuro,
        title: "Seizures & neurological",
        indicators: &NEURO,
    },
    IndicatorGroup {
        category: IndicatorCategory::Mobility,
        title: "Mobility & positioning",
        indicators: &MOBILITY,
    },
    IndicatorGroup {
        category: IndicatorCategory::Skilled,
        title: "Other skilled care",
        indicators: &SKILLED,
    },
];

static MEDICAID_OPTIONS: [OptionEntry<MedicaidStatus>; 4] = [
    OptionEntry {
        value: MedicaidStatus::Active,
        label: "Yes, my child has active Georgia Medicaid",
    },
    OptionEntry {
        value: MedicaidStatus::Pending,
        label: "We applied and are waiting",
    },
    OptionEntry {
        value: MedicaidStatus::NotEnrolled,
        label: "No, my child does not have Medicaid",
    },
    OptionEntry {
        value: MedicaidStatus::Unsure,
        label: "I'm not sure",
    },
];

static HOURS_OPTIONS: [OptionEntry<HoursStatus>; 4] = [
    OptionEntry {
        value: HoursStatus::Approved,
        label: "Yes, we have approved GAPP hours",
    },
    OptionEntry {
        value: HoursStatus::NotApproved,
        label: "No, we have not been approved yet",
    },
    OptionEntry {
        value: HoursStatus::Unsure,
        label: "I'm not sure",
    },
    OptionEntry {
        value: HoursStatus::Reduced,
        label: "Our hours were recently reduced",
    },
];

static PAIN_POINTS: [OptionEntry<PainPoint>; 6] = [
    OptionEntry {
        value: PainPoint::FindingAgency,
        label: "Finding an agency that serves our area",
    },
    OptionEntry {
        value: PainPoint::StaffingGaps,
        label: "Our agency can't staff our approved hours",
    },
    OptionEntry {
        value: PainPoint::HoursCut,
        label: "Our hours were cut",
    },
    OptionEntry {
        value: PainPoint::ApplicationHelp,
        label: "Getting the application and paperwork done",
    },
    OptionEntry {
        value: PainPoint::UnderstandingEligibility,
        label: "Understanding whether my child qualifies",
    },
    OptionEntry {
        value: PainPoint::Other,
        label: "Something else",
    },
];

/// Screener copy and taxonomy, loaded once and shared read-only.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenerCatalog {
    pub groups: &'static [IndicatorGroup],
    pub medicaid_options: &'static [OptionEntry<MedicaidStatus>],
    pub hours_options: &'static [OptionEntry<HoursStatus>],
    pub pain_points: &'static [OptionEntry<PainPoint>],
    #[serde(skip)]
    pub scripts: ScriptTemplates,
}

impl Default for ScreenerCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScreenerCatalog {
    pub fn standard() -> Self {
        Self {
            groups: &INDICATOR_GROUPS,
            medicaid_options: &MEDICAID_OPTIONS,
            hours_options: &HOURS_OPTIONS,
            pain_points: &PAIN_POINTS,
            scripts: ScriptTemplates {
                agency: "\"Hi, I'm calling about GAPP nursing services for my child in {county}. \
                         Are you accepting new patients, and do you have RN or LPN staff who can \
                         cover our area?\"",
                pediatrician: "\"We are applying for the Georgia Pediatric Program (GAPP). Could \
                               you help us with physician's orders and a letter of medical \
                               necessity describing our child's daily skilled care needs?\"",
                coordinator: "\"Our child's GAPP hours were recently reduced. Can you send us the \
                              written notice and explain how we request a reconsideration? We \
                              live in {county}.\"",
            },
        }
    }

    pub fn group(&self, category: IndicatorCategory) -> Option<&IndicatorGroup> {
        self.groups.iter().find(|group| group.category == category)
    }

    pub fn indicator(&self, category: IndicatorCategory, id: &str) -> Option<&Indicator> {
        self.group(category)?
            .indicators
            .iter()
            .find(|indicator| indicator.id == id)
    }

    pub fn fit_copy(&self, level: FitLevel) -> FitCopy {
        match level {
            FitLevel::Strong => FitCopy {
                title: "Your child may be a strong fit for GAPP",
                snapshot: "Your answers describe daily skilled care needs, active Medicaid, and \
                           an approved or established GAPP case. The next move is lining up an \
                           agency that can staff your hours.",
            },
            FitLevel::Moderate => FitCopy {
                title: "Your child may qualify for GAPP",
                snapshot: "Some of your answers point toward skilled nursing needs, but a few \
                           pieces such as Medicaid or approved hours still need to be confirmed.",
            },
            FitLevel::Weak => FitCopy {
                title: "GAPP may not be the best fit right now",
                snapshot: "Based on your answers, GAPP eligibility is less likely today. Your \
                           pediatrician can help confirm, and other Georgia programs may help in \
                           the meantime.",
            },
        }
    }

    pub fn medicaid_step(&self, status: Option<MedicaidStatus>) -> StepCopy {
        let description = match status {
            Some(MedicaidStatus::Pending) => {
                "Call DFCS to check on your pending application. GAPP services cannot start \
                 until Medicaid is active."
            }
            Some(MedicaidStatus::NotEnrolled) => {
                "GAPP requires Georgia Medicaid. Ask about Katie Beckett (TEFRA), which looks at \
                 your child's medical needs instead of household income."
            }
            _ => {
                "Check your child's Medicaid card or call the member services line to confirm \
                 coverage is active before contacting agencies."
            }
        };
        StepCopy {
            title: "Confirm Medicaid is active",
            description,
        }
    }

    pub fn hour_review_step(&self) -> StepCopy {
        StepCopy {
            title: "Ask for a review of your reduced hours",
            description: "Request the written reduction notice from your care coordinator and \
                          ask how to file a reconsideration before the deadline.",
        }
    }

    pub fn fit_steps(&self, level: FitLevel) -> &'static [StepCopy] {
        match level {
            FitLevel::Strong => &STRONG_STEPS,
            FitLevel::Moderate => &MODERATE_STEPS,
            FitLevel::Weak => &WEAK_STEPS,
        }
    }
}

static STRONG_STEPS: [StepCopy; 3] = [
    StepCopy {
        title: "Contact GAPP agencies in {county}",
        description: "Use the directory to call verified agencies serving {county} and ask \
                      about current openings.",
    },
    StepCopy {
        title: "Request orders from your pediatrician",
        description: "Agencies need physician's orders and a letter of medical necessity to \
                      submit your case.",
    },
    StepCopy {
        title: "Schedule the nursing assessment",
        description: "The agency's nurse will visit to document care needs for the hours \
                      request.",
    },
];

static MODERATE_STEPS: [StepCopy; 2] = [
    StepCopy {
        title: "Talk with your pediatrician about skilled nursing",
        description: "Share the care needs you selected and ask whether in-home nursing is \
                      medically necessary.",
    },
    StepCopy {
        title: "Call agencies serving {county}",
        description: "Agencies can explain the GAPP process and what documentation you will \
                      need.",
    },
];

static WEAK_STEPS: [StepCopy; 2] = [
    StepCopy {
        title: "Review care needs with your pediatrician",
        description: "Ask whether your child's needs could qualify now or in the future.",
    },
    StepCopy {
        title: "Explore other Georgia support programs",
        description: "Babies Can't Wait, Children's Medical Services, and waiver programs may \
                      help while you plan.",
    },
];
