use super::Criterion;

#[derive(Debug, Clone, Copy)]
pub struct CriterionDef {
    pub criterion: Criterion,
    pub key: &'static str,
    pub name: &'static str,
}

pub const RATING_HINT: &str = "Rate from 5 (Excellent) to 1 (Poor)";

const BUILTIN_CRITERIA: &[CriterionDef] = &[
    CriterionDef {
        criterion: Criterion::GeneralAppearance,
        key: "general_appearance",
        name: "General Appearance",
    },
    CriterionDef {
        criterion: Criterion::SpeakingManner,
        key: "speaking_manner",
        name: "Manner Of Speaking",
    },
    CriterionDef {
        criterion: Criterion::PhysicalCondition,
        key: "physical_condition",
        name: "Physical Condition",
    },
    CriterionDef {
        criterion: Criterion::MentalAlertness,
        key: "mental_alertness",
        name: "Mental Alertness",
    },
    CriterionDef {
        criterion: Criterion::SelfConfidence,
        key: "self_confidence",
        name: "Self Confidence",
    },
    CriterionDef {
        criterion: Criterion::AbilityToPresentIdeas,
        key: "ability_to_present_ideas",
        name: "Ability to Present Ideas",
    },
    CriterionDef {
        criterion: Criterion::CommunicationSkills,
        key: "communication_skills",
        name: "Communication Skills",
    },
    CriterionDef {
        criterion: Criterion::StudentPerformanceRating,
        key: "spr",
        name: "Student Performance Rating",
    },
];

/// Criteria in form display order.
pub fn builtin_criteria() -> &'static [CriterionDef] {
    BUILTIN_CRITERIA
}
