// src/concepts/outcome_definition.rs
//! Outcome / endpoint definition statements: v1 any outcome/endpoint cue; v2
//! cue + defining verb nearby; v3 inside an *Outcome definition / Primary
//! outcome* heading block; v4 v2 plus an explicit criterion token (within X
//! days, composite, readmission, death, ...); v5 "Primary outcome: ..." /
//! "Outcome was defined as ..." templates.

use once_cell::sync::Lazy;

use crate::engine::registry::FinderFamily;
use crate::engine::vocabulary::re;
use crate::engine::{ConceptVocabulary, Finding, Proximity, QualifierClass};

static VOCAB: Lazy<ConceptVocabulary> = Lazy::new(|| ConceptVocabulary {
    concept: "outcome_definition",
    cues: vec![re(r"(?i)\b(?:outcomes?|end[- ]?points?)\b")],
    extra_cues: vec![],
    qualifiers: QualifierClass::new(
        "defining_verb",
        vec![re(
            r"(?i)\b(?:defined|was|were|considered|designated|chosen|specified)\b",
        )],
    ),
    refinements: vec![QualifierClass::new(
        "criterion",
        vec![re(
            r"(?i)\b(?:within\s+\d+\s*(?:day|week|month|year)s?|\d+\s*(?:day|week|month|year)s?|readmission|hospitali[sz]ation|death|mi|stroke|composite|incidence|duration|rate)\b",
        )],
    )],
    heading: re(
        r"(?im)^(?:outcome\s+definitions?|endpoint\s+definitions?|primary\s+outcome|outcomes?)\s*[:\-]?\s*$",
    ),
    trap: Some(re(
        r"(?i)\b(?:secondary\s+analysis|positive\s+outcome|surrogate\s+outcome)\b",
    )),
    trap_radius: 30,
    template: re(
        r"(?i)(?:primary\s+)?(?:outcome|endpoint)\s*(?:was\s+defined\s+as|:)\s*[^.\n]{1,100}",
    ),
    proximity: Proximity::Tokens,
    window: 5,
    refine_window: 6,
    block_chars: 400,
    fold_hyphens: false,
});

pub fn find_outcome_definition_v1(text: &str) -> Vec<Finding> {
    VOCAB.v1(text)
}

pub fn find_outcome_definition_v2(text: &str) -> Vec<Finding> {
    VOCAB.v2(text)
}

pub fn find_outcome_definition_v2_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v2_with_window(text, window)
}

pub fn find_outcome_definition_v3(text: &str) -> Vec<Finding> {
    VOCAB.v3(text)
}

pub fn find_outcome_definition_v3_with_block_chars(text: &str, block_chars: usize) -> Vec<Finding> {
    VOCAB.v3_with_block_chars(text, block_chars)
}

pub fn find_outcome_definition_v4(text: &str) -> Vec<Finding> {
    VOCAB.v4(text)
}

pub fn find_outcome_definition_v4_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v4_with_window(text, window)
}

pub fn find_outcome_definition_v5(text: &str) -> Vec<Finding> {
    VOCAB.v5(text)
}

/// Semantic alias for v1.
pub fn find_outcome_definition_high_recall(text: &str) -> Vec<Finding> {
    find_outcome_definition_v1(text)
}

/// Semantic alias for v5.
pub fn find_outcome_definition_high_precision(text: &str) -> Vec<Finding> {
    find_outcome_definition_v5(text)
}

pub static OUTCOME_DEFINITION_FINDERS: FinderFamily = FinderFamily::new(
    "outcome_definition",
    find_outcome_definition_v1,
    find_outcome_definition_v2,
    find_outcome_definition_v3,
    find_outcome_definition_v4,
    find_outcome_definition_v5,
);

#[cfg(test)]
mod tests {
    use super::*;

    const HIT_DEFINED: &str = "The primary outcome was defined as death from any cause.";
    const HIT_COLON: &str = "Primary outcome: readmission within 30 days.";

    #[test]
    fn test_v5_defined_as_template() {
        let out = find_outcome_definition_v5(HIT_DEFINED);
        assert_eq!(out.len(), 1);
        assert!(out[0].snippet.starts_with("primary outcome was defined as"));
    }

    #[test]
    fn test_v5_colon_template() {
        assert_eq!(find_outcome_definition_v5(HIT_COLON).len(), 1);
    }

    #[test]
    fn test_v2_and_v4_ladder() {
        assert!(!find_outcome_definition_v2(HIT_DEFINED).is_empty());
        assert!(!find_outcome_definition_v4(HIT_DEFINED).is_empty());
        // Defining verb present but no criterion token: v2 only.
        let vague = "The outcome was considered clinically meaningful.";
        assert!(!find_outcome_definition_v2(vague).is_empty());
        assert!(find_outcome_definition_v4(vague).is_empty());
    }

    #[test]
    fn test_trap_positive_outcome() {
        assert!(find_outcome_definition_v1("A positive outcome was reported by most sites.").is_empty());
    }

    #[test]
    fn test_v3_primary_outcome_heading() {
        let text = "Primary outcome\nThe outcome was readmission within 30 days.\n\nDiscussion\nOutcomes varied widely.";
        let out = find_outcome_definition_v3(text);
        assert_eq!(out.len(), 1);
    }
}
