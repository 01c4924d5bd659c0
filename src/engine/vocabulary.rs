// src/engine/vocabulary.rs
//! Declarative per-concept configuration.
//!
//! A `ConceptVocabulary` is compiled once at first use (concept modules hold
//! them in `once_cell::sync::Lazy` statics) and never mutated afterwards, so
//! sharing one by reference across threads is safe.

use regex::Regex;

/// Compiles a vocabulary pattern, panicking on error.
///
/// Vocabulary patterns are string literals fixed at build time; a compile
/// failure is a defect in the vocabulary itself.
pub fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("Failed to compile vocabulary pattern {pattern:?}: {e}"))
}

/// Distance unit used by the windowed co-occurrence tiers (v2/v4).
///
/// Most families measure proximity in token indices. A few use raw character
/// distance between match offsets instead, because their cue phrases span
/// several tokens and token alignment is unreliable there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    Tokens,
    Chars,
}

/// A named set of qualifier patterns (verbs, durations, thresholds,
/// identifiers, modifiers). Tier 2 requires one class near the cue; tier 4
/// requires every refinement class to have at least one member in window.
#[derive(Debug)]
pub struct QualifierClass {
    pub name: &'static str,
    pub patterns: Vec<Regex>,
}

impl QualifierClass {
    pub fn new(name: &'static str, patterns: Vec<Regex>) -> Self {
        Self { name, patterns }
    }
}

/// Frozen regex configuration for one concept family.
///
/// This is configuration data, not algorithmic state: the tier implementations
/// in [`super::tiers`] are identical for every concept.
#[derive(Debug)]
pub struct ConceptVocabulary {
    /// Concept identifier, e.g. `"adherence_compliance"`.
    pub concept: &'static str,
    /// Broad cue patterns. Anchors for every tier.
    pub cues: Vec<Regex>,
    /// Additional high-recall patterns scanned by v1/v3 but not used as
    /// anchors for the co-occurrence tiers (e.g. bare registry names).
    pub extra_cues: Vec<Regex>,
    /// Tier-2 qualifier class required within `window` of a cue.
    pub qualifiers: QualifierClass,
    /// Tier-4 refinement classes; all must co-occur within `refine_window`.
    pub refinements: Vec<QualifierClass>,
    /// Line-anchored heading pattern opening a tier-3 block.
    pub heading: Regex,
    /// Local-context false-positive guard. `None` disables trap filtering.
    pub trap: Option<Regex>,
    /// Radius in bytes of the context window inspected by the trap filter.
    /// Zero means the trap is tested against the matched text only.
    pub trap_radius: usize,
    /// Tier-5 tight template.
    pub template: Regex,
    /// Distance unit for v2/v4.
    pub proximity: Proximity,
    /// Default v2 window (tokens or chars, per `proximity`).
    pub window: usize,
    /// Default v4 window.
    pub refine_window: usize,
    /// Default tier-3 block length in bytes.
    pub block_chars: usize,
    /// Apply NFC normalization and U+2011 → `-` folding before matching.
    pub fold_hyphens: bool,
}
