// src/engine/tiers.rs
//! Tier implementations (v1..v5), shared by every concept family.
//!
//! Control flow per call: normalize (if the family asks for it) → tokenize →
//! scan cue patterns → per candidate, trap filter / window co-occurrence /
//! heading scoping as the tier requires → map surviving char spans to word
//! indices → sort by document position and drop exact duplicates.
//!
//! Tiers form a ladder: v4 is computed from v2's accepted output, so
//! v4 ⊆ v2 ⊆ v1 whenever the vocabulary's qualifier classes are genuinely
//! narrower than its cues. v3 and v5 are independent sieves.

use std::borrow::Cow;

use regex::Regex;

use super::vocabulary::{ConceptVocabulary, Proximity};
use super::Finding;
use crate::tokens::{char_span_to_word_span, token_spans, TokenSpan};
use crate::utils::normalize;

/// Transient regex match candidate, consumed immediately to derive a Finding.
#[derive(Debug, Clone)]
struct Candidate {
    start: usize,
    end: usize,
    snippet: String,
}

/// Moves `i` left to the nearest UTF-8 char boundary.
fn snap_left(text: &str, mut i: usize) -> usize {
    while i > 0 && !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Moves `i` right to the nearest UTF-8 char boundary (or end of text).
fn snap_right(text: &str, mut i: usize) -> usize {
    let len = text.len();
    if i >= len {
        return len;
    }
    while i < len && !text.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// Gap in tokens/chars between two closed ranges; 0 when they overlap.
fn range_gap(a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> usize {
    if b_start > a_end {
        b_start - a_end
    } else if a_start > b_end {
        a_start - b_end
    } else {
        0
    }
}

/// Byte offsets of all matches of a pattern set, in scan order.
fn match_offsets(patterns: &[Regex], text: &str) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for patt in patterns {
        for m in patt.find_iter(text) {
            out.push((m.start(), m.end()));
        }
    }
    out
}

impl ConceptVocabulary {
    /// Tier 1 – high recall: every cue match that survives the trap filter.
    pub fn v1(&self, text: &str) -> Vec<Finding> {
        let text = self.prepare(text);
        let spans = token_spans(&text);
        let mut cands = self.scan_with_trap(&self.cues, &text);
        cands.extend(self.scan_with_trap(&self.extra_cues, &text));
        self.finalize(&spans, cands)
    }

    /// Tier 2 – cue plus a qualifier within the family's default window.
    pub fn v2(&self, text: &str) -> Vec<Finding> {
        self.v2_with_window(text, self.window)
    }

    /// Tier 2 with an explicit window (tokens or chars, per the family's
    /// proximity unit).
    pub fn v2_with_window(&self, text: &str, window: usize) -> Vec<Finding> {
        let text = self.prepare(text);
        let spans = token_spans(&text);
        let cands = self.scan_with_trap(&self.cues, &text);
        let quals = match_offsets(&self.qualifiers.patterns, &text);
        tracing::debug!(
            concept = self.concept,
            candidates = cands.len(),
            qualifiers = quals.len(),
            "v2 co-occurrence scan"
        );
        let kept = cands
            .into_iter()
            .filter(|c| self.any_in_window(c.start, c.end, &quals, &spans, window))
            .collect();
        self.finalize(&spans, kept)
    }

    /// Tier 3 – cue matches inside a heading block.
    pub fn v3(&self, text: &str) -> Vec<Finding> {
        self.v3_with_block_chars(text, self.block_chars)
    }

    /// Tier 3 with an explicit maximum block length.
    pub fn v3_with_block_chars(&self, text: &str, block_chars: usize) -> Vec<Finding> {
        let text = self.prepare(text);
        let spans = token_spans(&text);
        let blocks = self.heading_blocks(&text, block_chars);
        if blocks.is_empty() {
            // No recognized heading: this tier stays silent regardless of cue
            // density elsewhere.
            return Vec::new();
        }
        let inside = |p: usize| blocks.iter().any(|&(s, e)| s <= p && p < e);
        let mut cands = Vec::new();
        for patt in self.cues.iter().chain(self.extra_cues.iter()) {
            for m in patt.find_iter(&text) {
                if inside(m.start()) {
                    cands.push(Candidate {
                        start: m.start(),
                        end: m.end(),
                        snippet: m.as_str().to_string(),
                    });
                }
            }
        }
        self.finalize(&spans, cands)
    }

    /// Tier 4 – tier 2's output further filtered: every refinement class must
    /// have at least one member within the window of the anchor span.
    pub fn v4(&self, text: &str) -> Vec<Finding> {
        self.v4_with_window(text, self.refine_window)
    }

    /// Tier 4 with an explicit window (also passed down to the tier-2 stage).
    pub fn v4_with_window(&self, text: &str, window: usize) -> Vec<Finding> {
        let text = self.prepare(text);
        let spans = token_spans(&text);
        let base = self.v2_with_window(&text, window);
        if base.is_empty() {
            return base;
        }
        let class_offsets: Vec<Vec<(usize, usize)>> = self
            .refinements
            .iter()
            .map(|class| match_offsets(&class.patterns, &text))
            .collect();
        base.into_iter()
            .filter(|f| {
                // Anchor char span reconstructed from the covering tokens.
                let a_start = spans[f.start_word].start;
                let a_end = spans[f.end_word].end;
                let ok = class_offsets
                    .iter()
                    .all(|offs| self.any_in_window(a_start, a_end, offs, &spans, window));
                if !ok {
                    tracing::trace!(
                        concept = self.concept,
                        snippet = %f.snippet,
                        "v4: refinement class missing in window"
                    );
                }
                ok
            })
            .collect()
    }

    /// Tier 5 – tight template, still trap-filtered.
    pub fn v5(&self, text: &str) -> Vec<Finding> {
        let text = self.prepare(text);
        let spans = token_spans(&text);
        let cands = self.scan_with_trap(std::slice::from_ref(&self.template), &text);
        self.finalize(&spans, cands)
    }

    // --- Internals ---

    /// Applies NFC normalization and hyphen folding when the family needs it.
    /// Word indices in the returned findings then address the normalized text.
    fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.fold_hyphens {
            normalize::fold_typographic_hyphens(text)
        } else {
            Cow::Borrowed(text)
        }
    }

    /// True if the trap pattern matches anywhere in the ±`trap_radius` byte
    /// context window around `[start, end)`.
    fn trapped(&self, text: &str, start: usize, end: usize) -> bool {
        let Some(trap) = &self.trap else {
            return false;
        };
        let lo = snap_left(text, start.saturating_sub(self.trap_radius));
        let hi = snap_right(text, end.saturating_add(self.trap_radius).min(text.len()));
        trap.is_match(&text[lo..hi])
    }

    /// Scans a pattern set and returns trap-filtered candidates.
    fn scan_with_trap(&self, patterns: &[Regex], text: &str) -> Vec<Candidate> {
        let mut out = Vec::new();
        for patt in patterns {
            for m in patt.find_iter(text) {
                if self.trapped(text, m.start(), m.end()) {
                    tracing::trace!(
                        concept = self.concept,
                        snippet = m.as_str(),
                        "trap suppressed candidate"
                    );
                    continue;
                }
                out.push(Candidate {
                    start: m.start(),
                    end: m.end(),
                    snippet: m.as_str().to_string(),
                });
            }
        }
        out
    }

    /// Windowed co-occurrence test for one anchor char span against a set of
    /// qualifier match offsets, in the family's distance unit. The boundary is
    /// inclusive: a qualifier exactly `window` away counts as in-window.
    fn any_in_window(
        &self,
        a_start: usize,
        a_end: usize,
        qualifier_offsets: &[(usize, usize)],
        spans: &[TokenSpan],
        window: usize,
    ) -> bool {
        match self.proximity {
            Proximity::Chars => qualifier_offsets
                .iter()
                .any(|&(qs, qe)| range_gap(a_start, a_end, qs, qe) <= window),
            Proximity::Tokens => {
                let (a_ws, a_we) = char_span_to_word_span(a_start, a_end, spans);
                qualifier_offsets.iter().any(|&(qs, qe)| {
                    let (q_ws, q_we) = char_span_to_word_span(qs, qe, spans);
                    range_gap(a_ws, a_we, q_ws, q_we) <= window
                })
            }
        }
    }

    /// Heading blocks: from each heading match's end to the earlier of the
    /// next blank-line boundary or `block_chars` bytes.
    fn heading_blocks(&self, text: &str, block_chars: usize) -> Vec<(usize, usize)> {
        let mut blocks = Vec::new();
        for h in self.heading.find_iter(text) {
            let s = h.end();
            let e = match text[s..].find("\n\n") {
                Some(off) if off <= block_chars => s + off,
                _ => snap_right(text, (s + block_chars).min(text.len())),
            };
            tracing::trace!(concept = self.concept, start = s, end = e, "heading block");
            blocks.push((s, e));
        }
        blocks
    }

    /// Maps candidates to findings, sorted by document position, exact
    /// duplicates removed.
    fn finalize(&self, spans: &[TokenSpan], cands: Vec<Candidate>) -> Vec<Finding> {
        let mut out: Vec<Finding> = cands
            .into_iter()
            .map(|c| {
                let (w_s, w_e) = char_span_to_word_span(c.start, c.end, spans);
                Finding::new(w_s, w_e, c.snippet)
            })
            .collect();
        out.sort();
        out.dedup();
        out
    }
}
