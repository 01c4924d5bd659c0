// src/concepts/adherence_compliance.rs
//! Treatment adherence / compliance metrics.
//!
//! Ladder:
//! - v1 – any adherence cue (adherence, compliance, medication possession
//!   ratio, MPR, proportion of days covered, PDC, pill count).
//! - v2 – v1 plus an analytic verb (defined, calculated, measured, ...)
//!   within ±4 tokens of the cue.
//! - v3 – only inside an *Adherence / Compliance* heading block.
//! - v4 – v2 plus an explicit numeric threshold or metric keyword
//!   (≥80 %, ≥0.8, MPR, PDC, pill count) near the cue.
//! - v5 – tight template: "Adherence was defined as PDC ≥ 0.8 over 12 months."
//!
//! Trap: behavioral/guideline mentions ("adherence to guidelines",
//! "encouraged adherence") are known false positives and are suppressed at
//! every cue-driven tier.

use once_cell::sync::Lazy;

use crate::engine::registry::FinderFamily;
use crate::engine::vocabulary::re;
use crate::engine::{ConceptVocabulary, Finding, Proximity, QualifierClass};

static VOCAB: Lazy<ConceptVocabulary> = Lazy::new(|| ConceptVocabulary {
    concept: "adherence_compliance",
    cues: vec![re(
        r"(?i)\b(?:adherence|compliance|medication\s+possession\s+ratio|mpr|proportion\s+of\s+days\s+covered|pdc|pill\s+counts?)\b",
    )],
    extra_cues: vec![],
    qualifiers: QualifierClass::new(
        "analytic_verb",
        vec![re(
            r"(?i)\b(?:defined|calculated|measured|assessed|evaluated|determined|computed)\b",
        )],
    ),
    refinements: vec![QualifierClass::new(
        "threshold_or_metric",
        vec![re(
            r"(?i)[≥>]\s*\d+(?:\.\d+)?\s*(?:%|percent)?|\b\d+(?:\.\d+)?\s*(?:%|percent)\b|\b(?:mpr|pdc|pill\s+counts?)\b",
        )],
    )],
    heading: re(r"(?im)^(?:adherence|compliance|medication\s+adherence)\s*[:\-]?\s*$"),
    trap: Some(re(
        r"(?i)\badherence\s+to\s+(?:guidelines|protocols?)\b|\bbaseline\s+adherence\b|\b(?:encouraged?|promoted?|improved?|support(?:ed)?)\s+adherence\b",
    )),
    trap_radius: 40,
    template: re(
        r"(?i)adherence\s+was\s+defined[^.\n]{0,60}(?:pdc|mpr)[^≥>]*[≥>]\s*0?\.?(?:7|8|80)",
    ),
    proximity: Proximity::Tokens,
    window: 4,
    refine_window: 6,
    block_chars: 400,
    fold_hyphens: false,
});

pub fn find_adherence_compliance_v1(text: &str) -> Vec<Finding> {
    VOCAB.v1(text)
}

pub fn find_adherence_compliance_v2(text: &str) -> Vec<Finding> {
    VOCAB.v2(text)
}

pub fn find_adherence_compliance_v2_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v2_with_window(text, window)
}

pub fn find_adherence_compliance_v3(text: &str) -> Vec<Finding> {
    VOCAB.v3(text)
}

pub fn find_adherence_compliance_v3_with_block_chars(text: &str, block_chars: usize) -> Vec<Finding> {
    VOCAB.v3_with_block_chars(text, block_chars)
}

pub fn find_adherence_compliance_v4(text: &str) -> Vec<Finding> {
    VOCAB.v4(text)
}

pub fn find_adherence_compliance_v4_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v4_with_window(text, window)
}

pub fn find_adherence_compliance_v5(text: &str) -> Vec<Finding> {
    VOCAB.v5(text)
}

/// Semantic alias for v1.
pub fn find_adherence_compliance_high_recall(text: &str) -> Vec<Finding> {
    find_adherence_compliance_v1(text)
}

/// Semantic alias for v5.
pub fn find_adherence_compliance_high_precision(text: &str) -> Vec<Finding> {
    find_adherence_compliance_v5(text)
}

pub static ADHERENCE_COMPLIANCE_FINDERS: FinderFamily = FinderFamily::new(
    "adherence_compliance",
    find_adherence_compliance_v1,
    find_adherence_compliance_v2,
    find_adherence_compliance_v3,
    find_adherence_compliance_v4,
    find_adherence_compliance_v5,
);

#[cfg(test)]
mod tests {
    use super::*;

    const HIT_PDC: &str = "Adherence was defined as PDC ≥ 0.8 over 12 months.";
    const HIT_MPR: &str = "We calculated medication possession ratio (MPR) for each patient.";
    const MISS_GUIDELINES: &str = "Adherence to guidelines was encouraged.";
    const MISS_NO_METRIC: &str = "We encouraged adherence through counseling sessions.";

    #[test]
    fn test_v5_canonical_template() {
        let out = find_adherence_compliance_v5(HIT_PDC);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].snippet, "Adherence was defined as PDC ≥ 0.8");
    }

    #[test]
    fn test_v2_and_v4_on_pdc_definition() {
        assert!(!find_adherence_compliance_v2(HIT_PDC).is_empty());
        assert!(!find_adherence_compliance_v4(HIT_PDC).is_empty());
    }

    #[test]
    fn test_v2_mpr_calculation() {
        let out = find_adherence_compliance_v2(HIT_MPR);
        assert!(!out.is_empty());
        assert!(out.iter().any(|f| f.snippet.eq_ignore_ascii_case("medication possession ratio")));
    }

    #[test]
    fn test_trap_guideline_adherence() {
        assert!(find_adherence_compliance_v1(MISS_GUIDELINES).is_empty());
    }

    #[test]
    fn test_trap_encouraged_adherence() {
        assert!(find_adherence_compliance_v1(MISS_NO_METRIC).is_empty());
    }

    #[test]
    fn test_v3_heading_block() {
        let text = "Adherence\nCompliance was assessed via pill counts.\n\nResults\nCompliance improved over time.";
        let out = find_adherence_compliance_v3(text);
        // Only the cues inside the Adherence block are retained.
        assert!(!out.is_empty());
        assert!(out.iter().all(|f| f.start_word < 8));
    }

    #[test]
    fn test_ladder_is_monotone() {
        let v1 = find_adherence_compliance_v1(HIT_PDC);
        let v2 = find_adherence_compliance_v2(HIT_PDC);
        let v4 = find_adherence_compliance_v4(HIT_PDC);
        assert!(v2.len() <= v1.len());
        assert!(v4.iter().all(|f| v2.contains(f)));
    }
}
