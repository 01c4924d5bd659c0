// src/concepts/healthcare_setting.rs
//! Health-care setting statements.
//!
//! Ladder: v1 any facility/setting term (inpatient, outpatient, ICU, clinic,
//! ...); v2 facility term + context word (setting, care, unit, hospital)
//! within ±3 tokens; v3 inside a *Setting / Study setting* heading block
//! (headings here may carry trailing text on the same line); v4 v2 plus a
//! level qualifier (primary, tertiary, academic, community, urban, ...); v5
//! "Conducted in five primary-care clinics" style templates.
//!
//! This family folds typographic hyphens before matching: journals often
//! typeset "tertiary‑care" with U+2011, which would otherwise silently miss
//! every hyphenated pattern. Word indices in the findings address the
//! folded text (byte-identical to the input for plain ASCII).

use once_cell::sync::Lazy;

use crate::engine::registry::FinderFamily;
use crate::engine::vocabulary::re;
use crate::engine::{ConceptVocabulary, Finding, Proximity, QualifierClass};

static VOCAB: Lazy<ConceptVocabulary> = Lazy::new(|| ConceptVocabulary {
    concept: "healthcare_setting",
    cues: vec![re(
        r"(?i)\b(?:inpatient|outpatient|ambulatory|(?:primary|secondary|tertiary)[\s-]+care|emergency\s+department|ed|er|icu|intensive\s+care(?:\s+unit)?|clinics?|hospitals?(?:[\s-]based)?|wards?|community\s+pharmacy|settings)\b",
    )],
    extra_cues: vec![],
    qualifiers: QualifierClass::new(
        "context_word",
        vec![re(
            r"(?i)\b(?:settings?|clinic|care|unit|hospital|environment|data|patients?|ward|healthcare|inpatient|outpatient|facility|medical|hospitali[sz]ation|treatment|caregiver)\b",
        )],
    ),
    refinements: vec![QualifierClass::new(
        "level_qualifier",
        vec![re(
            r"(?i)\b(?:primary|secondary|tertiary|academic|community|teaching|urban|rural|outpatient|ambulatory|regional|suburban|specialist|private|public|emergency)\b",
        )],
    )],
    // Trailing text after the heading word is allowed ("Setting: five sites").
    heading: re(
        r"(?im)^(?:setting|healthcare\s+setting|study\s+setting|study\s+design|research\s+setting|care\s+setting|clinical\s+setting|service\s+setting)\b\s*[:\-.]?\s*",
    ),
    trap: Some(re(r"(?i)real[\s-]?world\s+setting|setting\s+of\s+care")),
    trap_radius: 0, // trap is tested against the matched text only
    template: re(
        r"(?i)(?:(?:conducted|performed|carried\s+out)\s+in|admitted\s+to|data\s+(?:were\s+extracted\s+)?from|recruited\s+(?:from|in|at))\s+[^.\n]{0,80}(?:inpatient|outpatient|(?:primary|secondary|tertiary)[\s-]+care|icu|clinics?|hospitals?|emergency\s+department)\b",
    ),
    proximity: Proximity::Tokens,
    window: 3,
    refine_window: 4,
    block_chars: 250,
    fold_hyphens: true,
});

pub fn find_healthcare_setting_v1(text: &str) -> Vec<Finding> {
    VOCAB.v1(text)
}

pub fn find_healthcare_setting_v2(text: &str) -> Vec<Finding> {
    VOCAB.v2(text)
}

pub fn find_healthcare_setting_v2_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v2_with_window(text, window)
}

pub fn find_healthcare_setting_v3(text: &str) -> Vec<Finding> {
    VOCAB.v3(text)
}

pub fn find_healthcare_setting_v3_with_block_chars(text: &str, block_chars: usize) -> Vec<Finding> {
    VOCAB.v3_with_block_chars(text, block_chars)
}

pub fn find_healthcare_setting_v4(text: &str) -> Vec<Finding> {
    VOCAB.v4(text)
}

pub fn find_healthcare_setting_v4_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v4_with_window(text, window)
}

pub fn find_healthcare_setting_v5(text: &str) -> Vec<Finding> {
    VOCAB.v5(text)
}

/// Semantic alias for v1.
pub fn find_healthcare_setting_high_recall(text: &str) -> Vec<Finding> {
    find_healthcare_setting_v1(text)
}

/// Semantic alias for v5.
pub fn find_healthcare_setting_high_precision(text: &str) -> Vec<Finding> {
    find_healthcare_setting_v5(text)
}

pub static HEALTHCARE_SETTING_FINDERS: FinderFamily = FinderFamily::new(
    "healthcare_setting",
    find_healthcare_setting_v1,
    find_healthcare_setting_v2,
    find_healthcare_setting_v3,
    find_healthcare_setting_v4,
    find_healthcare_setting_v5,
);
