// src/engine/mod.rs
//! The generic five-tier concept matcher.
//!
//! A concept is described declaratively by a [`vocabulary::ConceptVocabulary`]
//! (cue patterns, qualifier classes, heading pattern, trap pattern, tight
//! template, default windows). The tier implementations in [`tiers`] are
//! shared by every concept family; per-concept modules only supply the
//! vocabulary and thin wrapper functions.

pub mod registry;
pub mod tiers;
pub mod vocabulary;

use serde::Serialize;

// Re-export the vocabulary building blocks for concept modules.
pub use vocabulary::{ConceptVocabulary, Proximity, QualifierClass};

/// One accepted match: a closed word-index span plus the matched snippet.
///
/// Invariants: `start_word <= end_word`, and both address valid positions in
/// the whitespace tokenization of the text the finder was called with.
///
/// `snippet` is the exact substring matched by the triggering regex. The
/// covering token range may extend beyond the match boundaries (e.g. when a
/// match ends just before adjacent punctuation), so reconstructing text from
/// the word indices will not always equal `snippet`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Finding {
    pub start_word: usize,
    pub end_word: usize,
    pub snippet: String,
}

impl Finding {
    pub fn new(start_word: usize, end_word: usize, snippet: impl Into<String>) -> Self {
        let snippet = snippet.into();
        debug_assert!(start_word <= end_word);
        debug_assert!(!snippet.is_empty());
        Self {
            start_word,
            end_word,
            snippet,
        }
    }
}
