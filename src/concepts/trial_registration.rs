// src/concepts/trial_registration.rs
//! Prospective trial registration statements.
//!
//! Ladder:
//! - v1 – any registration cue or registry identifier (trial registration,
//!   registered at/in/with, NCT########, ISRCTN, EudraCT, ChiCTR,
//!   ClinicalTrials.gov).
//! - v2 – registration cue plus a registration verb within ±6 tokens.
//! - v3 – only inside a *Trial Registration / Registration* heading block.
//! - v4 – v2 plus a well-formed registry identifier near the cue. Bare
//!   registry names (ClinicalTrials.gov without an NCT number) do not count.
//! - v5 – tight template: "This trial was prospectively registered at
//!   ClinicalTrials.gov (NCT01234567)."
//!
//! Registry names and identifiers are extra high-recall patterns: v1 and v3
//! report them, but the co-occurrence tiers anchor on registration phrasing
//! only, so a stray identifier cannot by itself satisfy v2/v4.

use once_cell::sync::Lazy;

use crate::engine::registry::FinderFamily;
use crate::engine::vocabulary::re;
use crate::engine::{ConceptVocabulary, Finding, Proximity, QualifierClass};

/// Well-formed registry identifiers (the strict set required by v4).
const REGISTRY_ID: &str =
    r"(?i)\b(?:NCT\d{8}|ISRCTN\d{6,8}|EudraCT\s*\d{4}-\d{6}-\d{2}|ChiCTR-\w+|ACTRN\d{14})\b";

static VOCAB: Lazy<ConceptVocabulary> = Lazy::new(|| ConceptVocabulary {
    concept: "trial_registration",
    cues: vec![re(
        r"(?i)\b(?:trial\s+registration|study\s+(?:was\s+)?registered|registered\s+(?:at|in|with|on)|recorded\s+as|registration\s+was\s+recorded|prospectively\s+registered)\b",
    )],
    extra_cues: vec![
        re(REGISTRY_ID),
        re(r"(?i)\b(?:ClinicalTrials\.gov|ISRCTN|EudraCT|ChiCTR|ANZCTR)\b"),
    ],
    qualifiers: QualifierClass::new(
        "registration_verb",
        vec![re(r"(?i)\b(?:registered|recorded|submitted)\b")],
    ),
    refinements: vec![QualifierClass::new("registry_id", vec![re(REGISTRY_ID)])],
    heading: re(r"(?im)^(?:trial\s+registration|registration)\s*[:\-]?\s*$"),
    trap: Some(re(
        r"(?i)\bIRB\b|\bethics\s+(?:committee|approval)\b|\bethical\s+approval\b|\bregistry\s+of\s+deeds\b",
    )),
    trap_radius: 40,
    template: re(
        r"(?i)(?:this\s+)?trial\s+was\s+prospectively\s+registered[^\n]{0,60}?(?:NCT\d{8}|ISRCTN\d{6,8}|EudraCT\s*\d{4}-\d{6}-\d{2}|ChiCTR-\w+)",
    ),
    proximity: Proximity::Tokens,
    window: 6,
    refine_window: 6,
    block_chars: 400,
    fold_hyphens: false,
});

pub fn find_trial_registration_v1(text: &str) -> Vec<Finding> {
    VOCAB.v1(text)
}

pub fn find_trial_registration_v2(text: &str) -> Vec<Finding> {
    VOCAB.v2(text)
}

pub fn find_trial_registration_v2_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v2_with_window(text, window)
}

pub fn find_trial_registration_v3(text: &str) -> Vec<Finding> {
    VOCAB.v3(text)
}

pub fn find_trial_registration_v3_with_block_chars(text: &str, block_chars: usize) -> Vec<Finding> {
    VOCAB.v3_with_block_chars(text, block_chars)
}

pub fn find_trial_registration_v4(text: &str) -> Vec<Finding> {
    VOCAB.v4(text)
}

pub fn find_trial_registration_v4_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v4_with_window(text, window)
}

pub fn find_trial_registration_v5(text: &str) -> Vec<Finding> {
    VOCAB.v5(text)
}

/// Semantic alias for v1.
pub fn find_trial_registration_high_recall(text: &str) -> Vec<Finding> {
    find_trial_registration_v1(text)
}

/// Semantic alias for v5.
pub fn find_trial_registration_high_precision(text: &str) -> Vec<Finding> {
    find_trial_registration_v5(text)
}

pub static TRIAL_REGISTRATION_FINDERS: FinderFamily = FinderFamily::new(
    "trial_registration",
    find_trial_registration_v1,
    find_trial_registration_v2,
    find_trial_registration_v3,
    find_trial_registration_v4,
    find_trial_registration_v5,
);

#[cfg(test)]
mod tests {
    use super::*;

    const HIT_NCT: &str =
        "This trial was prospectively registered at ClinicalTrials.gov (NCT04567890).";
    const HIT_VERB_ID: &str = "The study was registered at ClinicalTrials.gov under NCT01234567.";
    const MISS_IRB: &str = "Protocol was filed with the IRB.";
    const MISS_OBSERV: &str = "Our observational study was recorded in a local registry.";

    #[test]
    fn test_v4_with_identifier_single_finding() {
        let out = find_trial_registration_v4(HIT_VERB_ID);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].snippet, "study was registered");
    }

    #[test]
    fn test_v4_without_identifier_empty_v1_nonempty() {
        let text = "The study was registered at ClinicalTrials.gov.";
        assert!(find_trial_registration_v4(text).is_empty());
        assert!(!find_trial_registration_v1(text).is_empty());
    }

    #[test]
    fn test_v5_prospective_registration_template() {
        let out = find_trial_registration_v5(HIT_NCT);
        assert_eq!(out.len(), 1);
        assert!(out[0].snippet.ends_with("NCT04567890"));
    }

    #[test]
    fn test_v1_reports_bare_identifier() {
        let out = find_trial_registration_v1("Trial registration: ISRCTN12345678.");
        assert!(out.iter().any(|f| f.snippet == "ISRCTN12345678"));
    }

    #[test]
    fn test_misses() {
        assert!(find_trial_registration_v1(MISS_IRB).is_empty());
        assert!(find_trial_registration_v1(MISS_OBSERV).is_empty());
    }

    #[test]
    fn test_v3_requires_registration_heading() {
        let text = "Trial registration\nThe study was registered as NCT01234567.\n\nMethods\nNCT09999999 is unrelated here.";
        let out = find_trial_registration_v3(text);
        assert!(!out.is_empty());
        assert!(out.iter().all(|f| f.snippet != "NCT09999999"));
    }
}
