// src/concepts/funding_statement.rs
//! Study funding statements: v1 any funding cue, organisation name or grant
//! identifier; v2 + funding verb nearby; v3 inside a *Funding / Financial
//! support* heading block; v4 + explicit grant/organisation identifier; v5
//! "Supported by NIH grant R01-HL123456." style templates.

use once_cell::sync::Lazy;

use crate::engine::registry::FinderFamily;
use crate::engine::vocabulary::re;
use crate::engine::{ConceptVocabulary, Finding, Proximity, QualifierClass};

const ORG: &str = r"(?i)\b(?:NIH|National\s+Institutes\s+of\s+Health|NSF|Wellcome\s+Trust|Gates\s+Foundation|Pfizer|Novartis|Merck|Roche)\b";
const GRANT_ID: &str = r"(?i)\b(?:R\d{2}-?[A-Z]{0,2}-?\d{6}|grant\s+(?:number\s+)?[A-Z0-9][A-Z0-9\-/]{3,})\b";

static VOCAB: Lazy<ConceptVocabulary> = Lazy::new(|| ConceptVocabulary {
    concept: "funding_statement",
    cues: vec![
        re(r"(?i)\b(?:funded|funding|supported|financially\s+supported|sponsored|funding\s+source|grants?(?:\s+number)?)\b"),
        re(ORG),
        re(GRANT_ID),
    ],
    extra_cues: vec![],
    qualifiers: QualifierClass::new(
        "funding_verb",
        vec![re(r"(?i)\b(?:funded|supported|sponsored|provided|awarded)\b")],
    ),
    refinements: vec![QualifierClass::new(
        "grant_or_org",
        vec![re(GRANT_ID), re(ORG)],
    )],
    heading: re(
        r"(?im)^(?:funding|financial\s+support|sources?\s+of\s+funding|acknowledg(?:e)?ments?)\s*[:\-]?\s*$",
    ),
    trap: Some(re(
        r"(?i)\bno\s+personal\s+fees\b|\bconflicts?\s+of\s+interest\b|\bemployed\s+by\b",
    )),
    trap_radius: 40,
    template: re(r"(?i)supported\s+by\s+[A-Za-z]{2,}[^\n]{0,80}?grant\s+[\w\-/]+"),
    proximity: Proximity::Tokens,
    window: 4,
    refine_window: 6,
    block_chars: 400,
    fold_hyphens: false,
});

pub fn find_funding_statement_v1(text: &str) -> Vec<Finding> {
    VOCAB.v1(text)
}

pub fn find_funding_statement_v2(text: &str) -> Vec<Finding> {
    VOCAB.v2(text)
}

pub fn find_funding_statement_v2_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v2_with_window(text, window)
}

pub fn find_funding_statement_v3(text: &str) -> Vec<Finding> {
    VOCAB.v3(text)
}

pub fn find_funding_statement_v3_with_block_chars(text: &str, block_chars: usize) -> Vec<Finding> {
    VOCAB.v3_with_block_chars(text, block_chars)
}

pub fn find_funding_statement_v4(text: &str) -> Vec<Finding> {
    VOCAB.v4(text)
}

pub fn find_funding_statement_v4_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v4_with_window(text, window)
}

pub fn find_funding_statement_v5(text: &str) -> Vec<Finding> {
    VOCAB.v5(text)
}

/// Semantic alias for v1.
pub fn find_funding_statement_high_recall(text: &str) -> Vec<Finding> {
    find_funding_statement_v1(text)
}

/// Semantic alias for v5.
pub fn find_funding_statement_high_precision(text: &str) -> Vec<Finding> {
    find_funding_statement_v5(text)
}

pub static FUNDING_STATEMENT_FINDERS: FinderFamily = FinderFamily::new(
    "funding_statement",
    find_funding_statement_v1,
    find_funding_statement_v2,
    find_funding_statement_v3,
    find_funding_statement_v4,
    find_funding_statement_v5,
);
