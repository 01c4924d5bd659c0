// src/tokens.rs
//! Whitespace tokenization and char-offset → word-index span mapping.
//!
//! Every finder call recomputes the token spans for its input text; nothing
//! is cached across calls. A "token" here is a maximal run of non-whitespace
//! bytes, so token indices are stable across all finders operating on the
//! same text.

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+").expect("Failed to compile TOKEN_RE"));

/// Byte range of a single whitespace-delimited token within the source text.
///
/// `start` is inclusive, `end` exclusive. Spans are non-empty, non-overlapping
/// and in document order; the index of a span in the `token_spans` output is
/// the token's word index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    /// True if this token overlaps the half-open byte range `[start, end)`.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && self.end > start
    }
}

/// Splits `text` into whitespace-delimited token spans, in document order.
///
/// Empty text (or all-whitespace text) yields an empty vector.
pub fn token_spans(text: &str) -> Vec<TokenSpan> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| TokenSpan {
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

/// Converts a character span `[start, end)` into the minimal closed token
/// range `(w_start, w_end)` covering it.
///
/// # Panics
///
/// Panics if no token overlaps the span (e.g. a span lying entirely inside
/// whitespace). Callers only ever pass spans produced by regex matches
/// against the same text these `spans` were derived from, so a miss is a
/// programming error, not a recoverable condition.
pub fn char_span_to_word_span(start: usize, end: usize, spans: &[TokenSpan]) -> (usize, usize) {
    let w_start = spans
        .iter()
        .position(|t| t.overlaps(start, end))
        .unwrap_or_else(|| {
            panic!(
                "char span {}..{} is not covered by any token ({} tokens)",
                start,
                end,
                spans.len()
            )
        });
    // Safe: at least w_start overlaps.
    let w_end = spans
        .iter()
        .rposition(|t| t.overlaps(start, end))
        .expect("rposition must succeed when position did");
    (w_start, w_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_spans_basic() {
        let spans = token_spans("Adherence was defined.");
        assert_eq!(spans.len(), 3);
        assert_eq!((spans[0].start, spans[0].end), (0, 9));
        assert_eq!((spans[2].start, spans[2].end), (14, 22));
    }

    #[test]
    fn test_token_spans_empty_and_whitespace() {
        assert!(token_spans("").is_empty());
        assert!(token_spans("   \n\t  ").is_empty());
    }

    #[test]
    fn test_spans_reconstruct_non_whitespace_content() {
        let text = "  a  bb\tccc\n";
        let joined: String = token_spans(text)
            .iter()
            .map(|t| &text[t.start..t.end])
            .collect();
        assert_eq!(joined, "abbccc");
    }

    #[test]
    fn test_char_span_to_word_span_single_token() {
        let text = "one two three";
        let spans = token_spans(text);
        assert_eq!(char_span_to_word_span(4, 7, &spans), (1, 1));
    }

    #[test]
    fn test_char_span_to_word_span_multi_token() {
        let text = "pill count was assessed";
        let spans = token_spans(text);
        // "pill count" crosses two tokens
        assert_eq!(char_span_to_word_span(0, 10, &spans), (0, 1));
    }

    #[test]
    fn test_char_span_partially_in_whitespace() {
        let text = "one two";
        let spans = token_spans(text);
        // Span starting inside the separating space still maps to "two".
        assert_eq!(char_span_to_word_span(3, 7, &spans), (1, 1));
    }

    #[test]
    #[should_panic(expected = "not covered by any token")]
    fn test_char_span_inside_whitespace_panics() {
        let text = "one    two";
        let spans = token_spans(text);
        char_span_to_word_span(4, 6, &spans);
    }
}
