//! Accuracy metrics for recognized text.
//!
//! Turns a (reference, candidate) pair into quantitative error rates and
//! accuracy percentages:
//!
//! - **CER / WER**: edit-distance-based mismatch ratios (character-level over
//!   raw text, word-level over normalized tokens)
//! - **Character accuracy**: `(1 - CER) * 100`, floored at zero
//! - **Word accuracy**: positional comparison of normalized tokens
//! - **Detailed record**: all of the above plus raw lengths and word counts
//!
//! Everything in this module is pure and reentrant; callers may score from
//! any number of threads without synchronization.

pub mod distance;
pub mod normalize;
pub mod score;

pub use distance::{char_distance, levenshtein};
pub use normalize::{normalize_text, normalized_words};
pub use score::{character_accuracy, character_error_rate, detailed_metrics, word_accuracy, word_error_rate};
