// src/concepts/random_sequence_generation.rs
//! Random sequence generation statements (how the allocation sequence was
//! produced): v1 any generation method cue (computer-generated, random number
//! table, coin toss, permuted blocks, ...); v2 cue + randomisation keyword
//! within 80 characters; v3 inside a *Randomisation / Sequence generation*
//! heading block; v4 v2 plus a method modifier (blocks, permuted,
//! stratified); v5 "The allocation sequence was computer-generated using
//! block randomisation" templates.
//!
//! This family measures proximity in characters rather than tokens: method
//! phrases are long ("sealed opaque envelopes"), so a token window anchored
//! at the phrase start behaves erratically.

use once_cell::sync::Lazy;

use crate::engine::registry::FinderFamily;
use crate::engine::vocabulary::re;
use crate::engine::{ConceptVocabulary, Finding, Proximity, QualifierClass};

static VOCAB: Lazy<ConceptVocabulary> = Lazy::new(|| ConceptVocabulary {
    concept: "random_sequence_generation",
    cues: vec![re(
        r"(?i)\b(?:computer[- ]?generated|computeri[sz]ed|random\s+number\s+table|coin\s+toss|shuffled\s+(?:sealed\s+)?opaque\s+envelopes?|sealed\s+opaque\s+envelopes?|permuted\s+blocks?|block\s+randomi[sz]ation|stratified\s+randomi[sz]ation)\b",
    )],
    extra_cues: vec![],
    qualifiers: QualifierClass::new(
        "randomisation_keyword",
        vec![re(
            r"(?i)\b(?:randomi[sz]ation|randomi[sz]ed|allocation|sequence|list)\b",
        )],
    ),
    refinements: vec![QualifierClass::new(
        "method_modifier",
        vec![re(r"(?i)\b(?:blocks?|permuted|stratified)\b")],
    )],
    heading: re(
        r"(?im)^(?:randomi[sz]ation|sequence\s+generation|allocation\s+sequence)\s*[:\-]?\s*$",
    ),
    trap: Some(re(
        r"(?i)\brandom(?:ly)?\s+(?:assigned|selected)\b|\brandom\s+sampling\b|\brandom[- ]effects?\b",
    )),
    trap_radius: 25,
    template: re(
        r"(?i)allocation\s+sequence[^\n]{0,120}?computer[- ]?generated[^\n]{0,120}?block\s+randomi[sz]ation",
    ),
    proximity: Proximity::Chars,
    window: 80,
    refine_window: 80,
    block_chars: 400,
    fold_hyphens: false,
});

pub fn find_random_sequence_generation_v1(text: &str) -> Vec<Finding> {
    VOCAB.v1(text)
}

pub fn find_random_sequence_generation_v2(text: &str) -> Vec<Finding> {
    VOCAB.v2(text)
}

pub fn find_random_sequence_generation_v2_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v2_with_window(text, window)
}

pub fn find_random_sequence_generation_v3(text: &str) -> Vec<Finding> {
    VOCAB.v3(text)
}

pub fn find_random_sequence_generation_v3_with_block_chars(
    text: &str,
    block_chars: usize,
) -> Vec<Finding> {
    VOCAB.v3_with_block_chars(text, block_chars)
}

pub fn find_random_sequence_generation_v4(text: &str) -> Vec<Finding> {
    VOCAB.v4(text)
}

pub fn find_random_sequence_generation_v4_with_window(text: &str, window: usize) -> Vec<Finding> {
    VOCAB.v4_with_window(text, window)
}

pub fn find_random_sequence_generation_v5(text: &str) -> Vec<Finding> {
    VOCAB.v5(text)
}

/// Semantic alias for v1.
pub fn find_random_sequence_generation_high_recall(text: &str) -> Vec<Finding> {
    find_random_sequence_generation_v1(text)
}

/// Semantic alias for v5.
pub fn find_random_sequence_generation_high_precision(text: &str) -> Vec<Finding> {
    find_random_sequence_generation_v5(text)
}

pub static RANDOM_SEQUENCE_GENERATION_FINDERS: FinderFamily = FinderFamily::new(
    "random_sequence_generation",
    find_random_sequence_generation_v1,
    find_random_sequence_generation_v2,
    find_random_sequence_generation_v3,
    find_random_sequence_generation_v4,
    find_random_sequence_generation_v5,
);

#[cfg(test)]
mod tests {
    use super::*;

    const HIT_BLOCK: &str =
        "The allocation sequence was computer-generated using block randomisation.";

    #[test]
    fn test_full_ladder_on_block_sentence() {
        assert!(!find_random_sequence_generation_v1(HIT_BLOCK).is_empty());
        assert!(!find_random_sequence_generation_v2(HIT_BLOCK).is_empty());
        assert!(!find_random_sequence_generation_v4(HIT_BLOCK).is_empty());
        assert_eq!(find_random_sequence_generation_v5(HIT_BLOCK).len(), 1);
    }

    #[test]
    fn test_v2_requires_randomisation_keyword_nearby() {
        let hit = "Participants were allocated using a random number table for the sequence.";
        assert!(!find_random_sequence_generation_v2(hit).is_empty());
        let miss = "Numbers were drawn from a random number table to seed the simulation.";
        assert!(find_random_sequence_generation_v2(miss).is_empty());
    }

    #[test]
    fn test_v4_requires_method_modifier() {
        let plain = "The randomisation sequence was computer-generated centrally.";
        assert!(!find_random_sequence_generation_v2(plain).is_empty());
        assert!(find_random_sequence_generation_v4(plain).is_empty());
        assert!(!find_random_sequence_generation_v4(HIT_BLOCK).is_empty());
    }

    #[test]
    fn test_v3_randomisation_heading() {
        let text = "Randomisation\nThe allocation sequence was computer-generated.\n\nMethods\nA coin toss decided tie-breaks in the sensitivity analysis.";
        let out = find_random_sequence_generation_v3(text);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].snippet, "computer-generated");
    }

    #[test]
    fn test_trap_randomly_assigned() {
        let text = "Patients were randomly assigned via a computer-generated list.";
        assert!(find_random_sequence_generation_v1(text).is_empty());
    }

    #[test]
    fn test_miss_random_effects_model() {
        let text = "A random-effects model pooled the estimates.";
        assert!(find_random_sequence_generation_v1(text).is_empty());
    }
}
