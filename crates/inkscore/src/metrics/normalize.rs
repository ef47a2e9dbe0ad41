//! Text normalization ahead of word-level comparison.
//!
//! Normalization runs only before word tokenization. Character-level metrics
//! compare the raw strings, so CER stays case- and whitespace-sensitive while
//! WER and positional word accuracy are not. The asymmetry is intentional:
//! a recognizer that gets every letter right but the casing wrong should score
//! perfect word accuracy and imperfect character accuracy.

/// Canonicalize text for word-level comparison: lowercase with the
/// locale-independent Unicode mapping, collapse every whitespace run to a
/// single ASCII space, and trim the ends.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized whitespace-separated tokens of `text`.
pub fn normalized_words(text: &str) -> Vec<String> {
    text.to_lowercase().split_whitespace().map(str::to_string).collect()
}
