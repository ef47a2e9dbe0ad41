//! Error types for inkscore.
//!
//! The core has a deliberately small error taxonomy. Numeric edge cases in the
//! metrics (empty reference, empty candidate, length mismatches) are defined
//! policy, not errors: every branch is enumerated in the scoring functions and
//! none of them can raise a division-by-zero condition. The correction
//! pipeline and the ranker are total over well-formed text. What remains is
//! invalid construction input, which fails fast instead of being silently
//! coerced.
use thiserror::Error;

/// Result type alias using `InkscoreError`.
pub type Result<T> = std::result::Result<T, InkscoreError>;

/// Error type for all inkscore operations.
#[derive(Debug, Error)]
pub enum InkscoreError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl InkscoreError {
    /// Create an `InvalidInput` error with the given message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
