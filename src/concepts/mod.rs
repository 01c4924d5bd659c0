// src/concepts/mod.rs
//! Concept families: one module per clinical statement type, each exposing
//! the five tier functions plus aliases, and a `FinderFamily` entry for the
//! registry. Vocabularies live in the modules; the matching machinery is in
//! [`crate::engine`].

pub mod adherence_compliance;
pub mod eligibility_criteria;
pub mod follow_up_period;
pub mod funding_statement;
pub mod healthcare_setting;
pub mod outcome_definition;
pub mod random_sequence_generation;
pub mod trial_registration;
pub mod washout_period;

use crate::engine::registry::FinderFamily;

static REGISTRY: [&FinderFamily; 9] = [
    &adherence_compliance::ADHERENCE_COMPLIANCE_FINDERS,
    &eligibility_criteria::ELIGIBILITY_CRITERIA_FINDERS,
    &follow_up_period::FOLLOW_UP_PERIOD_FINDERS,
    &funding_statement::FUNDING_STATEMENT_FINDERS,
    &healthcare_setting::HEALTHCARE_SETTING_FINDERS,
    &outcome_definition::OUTCOME_DEFINITION_FINDERS,
    &random_sequence_generation::RANDOM_SEQUENCE_GENERATION_FINDERS,
    &trial_registration::TRIAL_REGISTRATION_FINDERS,
    &washout_period::WASHOUT_PERIOD_FINDERS,
];

/// Every concept family, in alphabetical order by concept name.
pub fn registry() -> &'static [&'static FinderFamily] {
    &REGISTRY
}

/// Look up a concept family by name.
pub fn family(concept: &str) -> Option<&'static FinderFamily> {
    registry().iter().copied().find(|f| f.concept == concept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_sorted_and_unique() {
        let names: Vec<&str> = registry().iter().map(|f| f.concept).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn test_family_lookup() {
        assert!(family("trial_registration").is_some());
        assert!(family("no_such_concept").is_none());
    }
}
