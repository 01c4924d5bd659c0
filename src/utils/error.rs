// src/utils/error.rs
use thiserror::Error;

/// Errors surfaced by the CLI harness. The finder library itself has no
/// fallible paths: absence of a match is an empty result, and a span-mapper
/// contract violation is a panic, not an error value.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
