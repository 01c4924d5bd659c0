// src/concepts/washout_period.rs
//! Washout / run-in period statements: v1 any washout, run-in or drug-free
//! cue; v2 cue + explicit duration nearby; v3 inside a *Washout period /
//! Run-in* heading block; v4 v2 plus a "before baseline" anchor (prior to,
//! preceding, pre-index); v5 "a 12-month washout period" / "drug-free for
//! 6 months prior to baseline" templates.

use once_cell::sync::Lazy;

use crate::engine::registry::FinderFamily;
use crate::engine::vocabulary::re;
use crate::engine::{ConceptVocabulary, Finding, Proximity, QualifierClass};

static VOCAB: Lazy<ConceptVocabulary> = Lazy::new(|| ConceptVocabulary {
    concept: "washout_period",
    cues: vec![re(
        r"(?i)\b(?:washout(?:\s+period)?|run[- ]?in(?:\s+period)?|clearance\s+period|drug[- ]?free|treatment[- ]?free|no\s+therapy)\b",
    )],
    extra_cues: vec![],
    qualifiers: QualifierClass::new(
        "duration",
        vec![re(
            r"(?i)\b\d+[- ]?(?:day|week|month|year)s?\b|\b(?:drug|treatment)[- ]free\b",
        )],
    ),
    refinements: vec![QualifierClass::new(
        "before_anchor",
        vec![re(
            r"(?i)\b(?:before|prior\s+to|preceding|pre[- ]index|pre[- ]baseline)\b",
        )],
    )],
    heading: re(r"(?im)^(?:washout(?:\s+period)?|run[- ]?in(?:\s+period)?)\s*[:\-]?\s*$"),
    trap: Some(re(
        r"(?i)\b(?:stopped|discontinued)\b|\bdue\s+to\s+(?:side[- ]effects?|adverse\s+events?)\b",
    )),
    trap_radius: 30,
    template: re(
        r"(?i)\b\d+[- ](?:day|week|month|year)\s+washout(?:\s+period)?\b|\b(?:drug|treatment)[- ]free\s+(?:for\s+|period\s+of\s+)?\d+\s*(?:day|week|month|year)s?\s+(?:before|prior\s+to|preceding)\b",
    ),
    proximity: Proximity::Tokens,
    window: 4,
    refine_window: 6,
    block_chars: 400,
    fold_hyphens: false,
});

pub fn find_washout_period_v1(text: &str) -> Vec<Finding> {
    VOCAB.v1(text)
}

pub fn find_washout_period_v2(text: &str) -> Vec<Finding> {
    VOCAB.v2(text)
}

pub fn find_washout_period_v2_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v2_with_window(text, window)
}

pub fn find_washout_period_v3(text: &str) -> Vec<Finding> {
    VOCAB.v3(text)
}

pub fn find_washout_period_v3_with_block_chars(text: &str, block_chars: usize) -> Vec<Finding> {
    VOCAB.v3_with_block_chars(text, block_chars)
}

pub fn find_washout_period_v4(text: &str) -> Vec<Finding> {
    VOCAB.v4(text)
}

pub fn find_washout_period_v4_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v4_with_window(text, window)
}

pub fn find_washout_period_v5(text: &str) -> Vec<Finding> {
    VOCAB.v5(text)
}

/// Semantic alias for v1.
pub fn find_washout_period_high_recall(text: &str) -> Vec<Finding> {
    find_washout_period_v1(text)
}

/// Semantic alias for v5.
pub fn find_washout_period_high_precision(text: &str) -> Vec<Finding> {
    find_washout_period_v5(text)
}

pub static WASHOUT_PERIOD_FINDERS: FinderFamily = FinderFamily::new(
    "washout_period",
    find_washout_period_v1,
    find_washout_period_v2,
    find_washout_period_v3,
    find_washout_period_v4,
    find_washout_period_v5,
);

#[cfg(test)]
mod tests {
    use super::*;

    const HIT_12M: &str = "A 12-month washout period preceded cohort entry.";
    const HIT_DRUG_FREE: &str = "Patients were drug-free for 6 months prior to baseline.";

    #[test]
    fn test_v5_washout_template() {
        let out = find_washout_period_v5(HIT_12M);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].snippet, "12-month washout period");
    }

    #[test]
    fn test_v5_drug_free_template() {
        assert_eq!(find_washout_period_v5(HIT_DRUG_FREE).len(), 1);
    }

    #[test]
    fn test_v2_requires_duration() {
        assert!(!find_washout_period_v2(HIT_12M).is_empty());
        let miss = "A washout period separated the two treatment phases.";
        assert!(find_washout_period_v2(miss).is_empty());
    }

    #[test]
    fn test_v4_requires_before_anchor() {
        assert!(!find_washout_period_v4(HIT_DRUG_FREE).is_empty());
        let no_anchor = "A 2-week washout period separated the crossover phases.";
        assert!(!find_washout_period_v2(no_anchor).is_empty());
        assert!(find_washout_period_v4(no_anchor).is_empty());
    }

    #[test]
    fn test_trap_discontinued_therapy() {
        let text = "Therapy was discontinued during the washout due to side-effects.";
        assert!(find_washout_period_v1(text).is_empty());
    }

    #[test]
    fn test_miss_lab_wash_step() {
        let text = "Samples were washed out with buffer before analysis.";
        assert!(find_washout_period_v1(text).is_empty());
    }

    #[test]
    fn test_v3_run_in_heading() {
        let text = "Run-in period\nAll patients completed a 4-week run-in.\n\nResults\nNo washout effects were observed.";
        let out = find_washout_period_v3(text);
        assert_eq!(out.len(), 1);
    }
}
