// src/lib.rs
//! # trialtext
//!
//! Tiered regex "finders" for clinical/epidemiological statement types
//! (eligibility criteria, trial registration, outcome definitions, follow-up
//! period, funding, ...) in free-text research article sections.
//!
//! Each concept exposes a family of five independent finders forming a
//! precision/recall ladder:
//!
//! - **v1** – high recall: any cue match, minus trap-filtered false positives.
//! - **v2** – v1 plus a qualifier (verb, duration, context word) within a
//!   proximity window of the cue.
//! - **v3** – cue matches restricted to a heading block (e.g. under a
//!   `Funding` or `Randomisation` heading).
//! - **v4** – v2 plus one or more refinement classes (thresholds, registry
//!   identifiers, modifiers) near the cue.
//! - **v5** – a single tight template regex encoding canonical phrasing.
//!
//! All finders are pure functions of the input text. They return [`Finding`]
//! values: a closed word-index span into the whitespace tokenization of the
//! input, plus the exact substring matched by the triggering regex. Note the
//! intentional asymmetry: the snippet is the regex match, not the text of the
//! covering token range.
//!
//! The shared machinery lives in [`engine`]; concept vocabularies are
//! configuration data in [`concepts`], one module per statement type.
//!
//! ## Example
//!
//! ```rust
//! use trialtext::concepts::adherence_compliance::find_adherence_compliance_v5;
//!
//! let text = "Adherence was defined as PDC ≥ 0.8 over 12 months.";
//! let findings = find_adherence_compliance_v5(text);
//! assert_eq!(findings.len(), 1);
//! assert!(findings[0].snippet.starts_with("Adherence was defined"));
//! ```

pub mod concepts;
pub mod engine;
pub mod tokens;
pub mod utils;

pub use engine::registry::{FinderFamily, FinderFn};
pub use engine::Finding;
pub use tokens::{token_spans, TokenSpan};
