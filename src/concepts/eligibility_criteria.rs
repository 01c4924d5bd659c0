// src/concepts/eligibility_criteria.rs
//! Inclusion / exclusion eligibility criteria statements.
//!
//! Ladder: v1 any inclusion/exclusion/eligibility cue; v2 cue + condition
//! qualifier (age, sex, diagnosis) within ±4 tokens; v3 inside an
//! *Eligibility / Study population* heading block; v4 v2 plus both an
//! inclusion and an exclusion cue in the neighbourhood (two refinement
//! classes that must co-occur); v5 paired age/diagnosis + exclusion template.

use once_cell::sync::Lazy;

use crate::engine::registry::FinderFamily;
use crate::engine::vocabulary::re;
use crate::engine::{ConceptVocabulary, Finding, Proximity, QualifierClass};

const INCL_CUE: &str = r"(?i)\b(?:eligible\s+(?:patients|participants|subjects|individuals)\s+were|inclusion\s+criteria\s+(?:included|were|consisted\s+of)|eligible\s+if|criteria\s+for\s+enrollment|patients?\s+were\s+eligible|we\s+included|must\s+meet\s+all\s+of\s+the\s+following|required\s+to\s+have)\b";
const EXCL_CUE: &str = r"(?i)\b(?:we\s+excluded|exclusion\s+criteria|excluded\s+patients?|patients?\s+were\s+excluded|exclusion\s+included|were\s+not\s+eligible|must\s+not\s+have)\b";

static VOCAB: Lazy<ConceptVocabulary> = Lazy::new(|| ConceptVocabulary {
    concept: "eligibility_criteria",
    cues: vec![re(INCL_CUE), re(EXCL_CUE)],
    extra_cues: vec![re(
        r"(?i)\b(?:inclusion\s+criteria|exclusion\s+criteria|eligible|enrollment\s+criteria)\b",
    )],
    qualifiers: QualifierClass::new(
        "condition",
        vec![re(
            r"(?i)\b(?:age\s+\d{1,3}|\d{1,3}\s*(?:years?|yrs?)|male|female|men|women|adults?|children|diagnosed|history\s+of)\b",
        )],
    ),
    // Both classes must be present near the anchor: a lone exclusion list
    // without inclusion context (or vice versa) does not reach v4.
    refinements: vec![
        QualifierClass::new("inclusion_cue", vec![re(INCL_CUE)]),
        QualifierClass::new("exclusion_cue", vec![re(EXCL_CUE)]),
    ],
    heading: re(
        r"(?im)^(?:eligibility|inclusion\s+and\s+exclusion\s+criteria|study\s+population|participants?)\s*[:\-]?\s*$",
    ),
    trap: Some(re(
        r"(?i)\b(?:diagnostic\s+criteria|classification\s+criteria|performance\s+criteria)\b",
    )),
    trap_radius: 25,
    template: re(
        r"(?i)\b(?:adults?|children)\s+\d{1,3}(?:–|-|\s+to\s+)\d{1,3}\s+[^.\n]{0,80}(?:eligible|inclusion\s+criteria)[^.\n]{0,120}(?:exclusion\s+criteria|were\s+excluded)\b",
    ),
    proximity: Proximity::Tokens,
    window: 4,
    refine_window: 8,
    block_chars: 500,
    fold_hyphens: false,
});

pub fn find_eligibility_criteria_v1(text: &str) -> Vec<Finding> {
    VOCAB.v1(text)
}

pub fn find_eligibility_criteria_v2(text: &str) -> Vec<Finding> {
    VOCAB.v2(text)
}

pub fn find_eligibility_criteria_v2_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v2_with_window(text, window)
}

pub fn find_eligibility_criteria_v3(text: &str) -> Vec<Finding> {
    VOCAB.v3(text)
}

pub fn find_eligibility_criteria_v3_with_block_chars(text: &str, block_chars: usize) -> Vec<Finding> {
    VOCAB.v3_with_block_chars(text, block_chars)
}

pub fn find_eligibility_criteria_v4(text: &str) -> Vec<Finding> {
    VOCAB.v4(text)
}

pub fn find_eligibility_criteria_v4_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v4_with_window(text, window)
}

pub fn find_eligibility_criteria_v5(text: &str) -> Vec<Finding> {
    VOCAB.v5(text)
}

/// Semantic alias for v1.
pub fn find_eligibility_criteria_high_recall(text: &str) -> Vec<Finding> {
    find_eligibility_criteria_v1(text)
}

/// Semantic alias for v5.
pub fn find_eligibility_criteria_high_precision(text: &str) -> Vec<Finding> {
    find_eligibility_criteria_v5(text)
}

pub static ELIGIBILITY_CRITERIA_FINDERS: FinderFamily = FinderFamily::new(
    "eligibility_criteria",
    find_eligibility_criteria_v1,
    find_eligibility_criteria_v2,
    find_eligibility_criteria_v3,
    find_eligibility_criteria_v4,
    find_eligibility_criteria_v5,
);
