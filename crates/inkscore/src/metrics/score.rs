//! Accuracy scoring for (reference, candidate) text pairs.
//!
//! All scoring functions are total: every empty-input branch is enumerated
//! explicitly, so none of them can divide by zero. Both error rates are
//! clamped into [0.0, 1.0] even when the candidate is far longer than the
//! reference.

use super::distance::{char_distance, levenshtein};
use super::normalize::normalized_words;
use crate::types::MetricsRecord;

/// Character Error Rate in [0.0, 1.0].
///
/// Ratio of character-level edit distance to reference length, computed over
/// the raw strings (case- and whitespace-sensitive). An empty reference
/// scores 0.0 against an empty candidate and 1.0 against anything else.
pub fn character_error_rate(reference: &str, candidate: &str) -> f64 {
    let reference_len = reference.chars().count();
    if reference_len == 0 {
        return if candidate.is_empty() { 0.0 } else { 1.0 };
    }

    let distance = char_distance(reference, candidate);
    (distance as f64 / reference_len as f64).min(1.0)
}

/// Word Error Rate in [0.0, 1.0].
///
/// Ratio of word-level edit distance to reference word count, computed over
/// normalized tokens (lowercased, whitespace-collapsed). Empty token lists
/// follow the same rule as [`character_error_rate`].
pub fn word_error_rate(reference: &str, candidate: &str) -> f64 {
    let reference_words = normalized_words(reference);
    let candidate_words = normalized_words(candidate);

    if reference_words.is_empty() {
        return if candidate_words.is_empty() { 0.0 } else { 1.0 };
    }

    let distance = levenshtein(&reference_words, &candidate_words);
    (distance as f64 / reference_words.len() as f64).min(1.0)
}

/// Character-level accuracy as a percentage in [0.0, 100.0].
pub fn character_accuracy(reference: &str, candidate: &str) -> f64 {
    if reference.is_empty() {
        return if candidate.is_empty() { 100.0 } else { 0.0 };
    }

    let cer = character_error_rate(reference, candidate);
    ((1.0 - cer) * 100.0).max(0.0)
}

/// Word-level accuracy as a percentage in [0.0, 100.0].
///
/// Positional comparison, not edit-distance based: counts indices where the
/// i-th normalized reference word equals the i-th normalized candidate word.
/// The zip truncates to the shorter sequence, so trailing unmatched words on
/// either side count as wrong. This deliberately differs from
/// [`word_error_rate`], which aligns by edit distance.
pub fn word_accuracy(reference: &str, candidate: &str) -> f64 {
    let reference_words = normalized_words(reference);
    let candidate_words = normalized_words(candidate);

    if reference_words.is_empty() {
        return if candidate_words.is_empty() { 100.0 } else { 0.0 };
    }

    let correct = reference_words
        .iter()
        .zip(candidate_words.iter())
        .filter(|(r, c)| r == c)
        .count();

    (correct as f64 / reference_words.len() as f64) * 100.0
}

/// Compute the complete metrics record for a (reference, candidate) pair.
///
/// Percentage fields are rounded to two decimal places (half away from zero);
/// the distance field is the raw character-level edit distance. Lengths count
/// Unicode scalar values and word counts split the raw texts on whitespace
/// without normalization.
pub fn detailed_metrics(reference: &str, candidate: &str) -> MetricsRecord {
    MetricsRecord {
        character_error_rate: round_two(character_error_rate(reference, candidate) * 100.0),
        word_error_rate: round_two(word_error_rate(reference, candidate) * 100.0),
        character_accuracy: round_two(character_accuracy(reference, candidate)),
        word_accuracy: round_two(word_accuracy(reference, candidate)),
        levenshtein_distance: char_distance(reference, candidate),
        reference_length: reference.chars().count(),
        candidate_length: candidate.chars().count(),
        reference_word_count: reference.split_whitespace().count(),
        candidate_word_count: candidate.split_whitespace().count(),
    }
}

#[inline]
fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cer_empty_reference() {
        assert_eq!(character_error_rate("", ""), 0.0);
        assert_eq!(character_error_rate("", "anything"), 1.0);
    }

    #[test]
    fn test_cer_identical() {
        assert_eq!(character_error_rate("Hello World", "Hello World"), 0.0);
    }

    #[test]
    fn test_cer_clamped_for_long_candidate() {
        let cer = character_error_rate("ab", "ab".repeat(50).as_str());
        assert_eq!(cer, 1.0);
    }

    #[test]
    fn test_cer_single_deletion() {
        let cer = character_error_rate("Hello World", "Helo World");
        assert!((cer - 1.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_wer_empty_reference() {
        assert_eq!(word_error_rate("", ""), 0.0);
        assert_eq!(word_error_rate("   ", ""), 0.0);
        assert_eq!(word_error_rate("", "word"), 1.0);
    }

    #[test]
    fn test_wer_case_insensitive() {
        assert_eq!(word_error_rate("Hello World", "hello world"), 0.0);
    }

    #[test]
    fn test_wer_clamped() {
        let candidate = "extra ".repeat(20);
        assert_eq!(word_error_rate("one", &candidate), 1.0);
    }

    #[test]
    fn test_wer_substitution() {
        let wer = word_error_rate("the quick brown fox", "the quick brown dog");
        assert!((wer - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_character_accuracy_identity() {
        assert_eq!(character_accuracy("some text", "some text"), 100.0);
        assert_eq!(character_accuracy("", ""), 100.0);
        assert_eq!(character_accuracy("", "x"), 0.0);
    }

    #[test]
    fn test_character_accuracy_floor() {
        assert_eq!(character_accuracy("a", "completely different"), 0.0);
    }

    #[test]
    fn test_word_accuracy_positional() {
        // "brown" shifts every later word off position; edit distance would
        // count a single insertion instead.
        let accuracy = word_accuracy("the quick fox jumps", "the quick brown fox jumps");
        assert!((accuracy - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_word_accuracy_truncating_zip() {
        // Trailing reference words with no candidate counterpart are wrong.
        let accuracy = word_accuracy("one two three four", "one two");
        assert!((accuracy - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_word_accuracy_case_insensitive() {
        assert_eq!(word_accuracy("Hello World", "hello world"), 100.0);
    }

    #[test]
    fn test_word_accuracy_empty_reference() {
        assert_eq!(word_accuracy("", ""), 100.0);
        assert_eq!(word_accuracy("", "stray"), 0.0);
    }

    #[test]
    fn test_case_only_difference_asymmetry() {
        // Case differences hit the character metrics but not the word metrics.
        assert!(character_accuracy("Hello World", "hello world") < 100.0);
        assert_eq!(word_accuracy("Hello World", "hello world"), 100.0);
        assert_eq!(word_error_rate("Hello World", "hello world"), 0.0);
    }

    #[test]
    fn test_detailed_metrics_identical() {
        let record = detailed_metrics("Hello World", "Hello World");
        assert_eq!(record.levenshtein_distance, 0);
        assert_eq!(record.character_accuracy, 100.0);
        assert_eq!(record.word_accuracy, 100.0);
        assert_eq!(record.character_error_rate, 0.0);
        assert_eq!(record.word_error_rate, 0.0);
        assert_eq!(record.reference_length, 11);
        assert_eq!(record.candidate_length, 11);
        assert_eq!(record.reference_word_count, 2);
        assert_eq!(record.candidate_word_count, 2);
    }

    #[test]
    fn test_detailed_metrics_single_edit() {
        let record = detailed_metrics("Hello World", "Helo World");
        assert_eq!(record.levenshtein_distance, 1);
        assert_eq!(record.character_error_rate, 9.09);
        assert_eq!(record.character_accuracy, 90.91);
        assert_eq!(record.candidate_length, 10);
    }

    #[test]
    fn test_detailed_metrics_rounding() {
        // 1/3 error rate rounds to 33.33, accuracy to 66.67.
        let record = detailed_metrics("abc", "abd");
        assert_eq!(record.character_error_rate, 33.33);
        assert_eq!(record.character_accuracy, 66.67);
    }

    #[test]
    fn test_detailed_metrics_empty_pair() {
        let record = detailed_metrics("", "");
        assert_eq!(record.character_error_rate, 0.0);
        assert_eq!(record.word_error_rate, 0.0);
        assert_eq!(record.character_accuracy, 100.0);
        assert_eq!(record.word_accuracy, 100.0);
        assert_eq!(record.levenshtein_distance, 0);
        assert_eq!(record.reference_length, 0);
    }
}
