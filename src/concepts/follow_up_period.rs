// src/concepts/follow_up_period.rs
//! Follow-up period definitions: v1 any follow-up/followed cue; v2 cue +
//! explicit numeric duration nearby; v3 inside a *Follow-up period /
//! Observation period* heading block; v4 v2 plus a summary qualifier
//! (median/mean/followed for); v5 "Median follow-up was 5 years" style
//! templates. Single-visit mentions ("follow-up visit") are trapped.

use once_cell::sync::Lazy;

use crate::engine::registry::FinderFamily;
use crate::engine::vocabulary::re;
use crate::engine::{ConceptVocabulary, Finding, Proximity, QualifierClass};

static VOCAB: Lazy<ConceptVocabulary> = Lazy::new(|| ConceptVocabulary {
    concept: "follow_up_period",
    cues: vec![re(r"(?i)\b(?:follow[- ]?up|followed)\b")],
    extra_cues: vec![],
    qualifiers: QualifierClass::new(
        "duration",
        vec![re(r"(?i)\b\d+(?:\.\d+)?\s*(?:day|week|month|year)s?\b")],
    ),
    refinements: vec![QualifierClass::new(
        "summary_qualifier",
        vec![re(r"(?i)\b(?:median|mean|average)\b|\bfollowed\s+for\b")],
    )],
    heading: re(
        r"(?im)^(?:follow[- ]?up(?:\s+period)?|observation\s+period|duration\s+of\s+follow[- ]?up)\s*[:\-]?\s*$",
    ),
    trap: Some(re(
        r"(?i)\b(?:follow[- ]?up\s+visits?|clinic\s+visits?|scheduled\s+follow[- ]?up)\b",
    )),
    trap_radius: 15,
    template: re(
        r"(?i)(?:median|mean|average)\s+follow[- ]?up\s+(?:was\s+|of\s+)?\d+(?:\.\d+)?\s*(?:day|week|month|year)s?|followed\s+for\s+\d+\s*(?:day|week|month|year)s?",
    ),
    proximity: Proximity::Tokens,
    window: 5,
    refine_window: 6,
    block_chars: 400,
    fold_hyphens: false,
});

pub fn find_follow_up_period_v1(text: &str) -> Vec<Finding> {
    VOCAB.v1(text)
}

pub fn find_follow_up_period_v2(text: &str) -> Vec<Finding> {
    VOCAB.v2(text)
}

pub fn find_follow_up_period_v2_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v2_with_window(text, window)
}

pub fn find_follow_up_period_v3(text: &str) -> Vec<Finding> {
    VOCAB.v3(text)
}

pub fn find_follow_up_period_v3_with_block_chars(text: &str, block_chars: usize) -> Vec<Finding> {
    VOCAB.v3_with_block_chars(text, block_chars)
}

pub fn find_follow_up_period_v4(text: &str) -> Vec<Finding> {
    VOCAB.v4(text)
}

pub fn find_follow_up_period_v4_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v4_with_window(text, window)
}

pub fn find_follow_up_period_v5(text: &str) -> Vec<Finding> {
    VOCAB.v5(text)
}

/// Semantic alias for v1.
pub fn find_follow_up_period_high_recall(text: &str) -> Vec<Finding> {
    find_follow_up_period_v1(text)
}

/// Semantic alias for v5.
pub fn find_follow_up_period_high_precision(text: &str) -> Vec<Finding> {
    find_follow_up_period_v5(text)
}

pub static FOLLOW_UP_PERIOD_FINDERS: FinderFamily = FinderFamily::new(
    "follow_up_period",
    find_follow_up_period_v1,
    find_follow_up_period_v2,
    find_follow_up_period_v3,
    find_follow_up_period_v4,
    find_follow_up_period_v5,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v5_median_follow_up() {
        let out = find_follow_up_period_v5("Median follow-up was 5 years in both arms.");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].snippet, "Median follow-up was 5 years");
    }

    #[test]
    fn test_v5_followed_for() {
        let out = find_follow_up_period_v5("Participants were followed for 24 months.");
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_v2_duration_near_cue() {
        assert!(!find_follow_up_period_v2("Patients were followed for 24 months.").is_empty());
        assert!(find_follow_up_period_v2("Follow-up procedures were standardized across sites.").is_empty());
    }

    #[test]
    fn test_v4_requires_summary_qualifier() {
        assert!(!find_follow_up_period_v4("Mean follow-up lasted 3.2 years overall.").is_empty());
        assert!(find_follow_up_period_v4("Follow-up lasted 2 years in some centers.").is_empty());
    }

    #[test]
    fn test_trap_follow_up_visit() {
        assert!(find_follow_up_period_v1("A follow-up visit was scheduled.").is_empty());
    }

    #[test]
    fn test_v3_observation_period_heading() {
        let text = "Observation period\nPatients were followed for 5 years.\n\nOutcomes\nDeath was followed by chart review.";
        let out = find_follow_up_period_v3(text);
        assert_eq!(out.len(), 1);
    }
}
