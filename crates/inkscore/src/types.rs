//! Core value types shared across the scoring, correction, and ranking
//! modules.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::correction;
use crate::error::{InkscoreError, Result};

/// Accuracy metrics for one (reference, candidate) comparison.
///
/// Created fresh per comparison by [`crate::metrics::detailed_metrics`] and
/// immutable once built. Rate and accuracy fields are percentages in
/// [0.0, 100.0], rounded to two decimal places; `levenshtein_distance` is the
/// raw character-level edit distance. Lengths count Unicode scalar values;
/// word counts split the raw (un-normalized) texts on whitespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub character_error_rate: f64,
    pub word_error_rate: f64,
    pub character_accuracy: f64,
    pub word_accuracy: f64,
    pub levenshtein_distance: usize,
    pub reference_length: usize,
    pub candidate_length: usize,
    pub reference_word_count: usize,
    pub candidate_word_count: usize,
}

/// Output of a single OCR engine for one image.
///
/// Owned by the caller that produced it. The ranker only reorders a sequence
/// of these and attaches a [`MetricsRecord`] to successful entries; it never
/// mutates them otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineResult {
    /// Engine name, e.g. `"trocr"` or `"tesseract"`.
    pub engine: String,
    /// Text exactly as the recognizer produced it.
    pub raw_text: String,
    /// Text after the correction pipeline.
    pub text: String,
    /// Wall-clock time the recognizer took.
    #[serde(default)]
    pub elapsed: Duration,
    pub success: bool,
    pub error: Option<String>,
    /// Attached by [`crate::ranking::rank`] for successful non-empty results.
    pub metrics: Option<MetricsRecord>,
}

impl EngineResult {
    /// Build a successful result from raw recognizer output, running the
    /// correction pipeline to populate the corrected text.
    pub fn from_raw(engine: impl Into<String>, raw_text: impl Into<String>, elapsed: Duration) -> Result<Self> {
        let engine = validated_engine_name(engine.into())?;
        let raw_text = raw_text.into();
        let correction = correction::correct(&raw_text);

        Ok(Self {
            engine,
            text: correction.corrected,
            raw_text,
            elapsed,
            success: true,
            error: None,
            metrics: None,
        })
    }

    /// Build a failed result carrying only the engine name and error message.
    pub fn failure(engine: impl Into<String>, error: impl Into<String>) -> Result<Self> {
        let engine = validated_engine_name(engine.into())?;

        Ok(Self {
            engine,
            raw_text: String::new(),
            text: String::new(),
            elapsed: Duration::ZERO,
            success: false,
            error: Some(error.into()),
            metrics: None,
        })
    }
}

fn validated_engine_name(engine: String) -> Result<String> {
    if engine.trim().is_empty() {
        return Err(InkscoreError::invalid_input("engine name must not be blank"));
    }
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_applies_correction() {
        let result = EngineResult::from_raw("trocr", "Trmap", Duration::from_millis(120)).unwrap();
        assert!(result.success);
        assert_eq!(result.raw_text, "Trmap");
        assert_eq!(result.text, "TMAP");
        assert!(result.error.is_none());
        assert!(result.metrics.is_none());
    }

    #[test]
    fn test_from_raw_clean_text_unchanged() {
        let result = EngineResult::from_raw("tesseract", "plain text", Duration::from_secs(1)).unwrap();
        assert_eq!(result.text, "plain text");
    }

    #[test]
    fn test_failure_shape() {
        let result = EngineResult::failure("easyocr", "model not available").unwrap();
        assert!(!result.success);
        assert_eq!(result.text, "");
        assert_eq!(result.error.as_deref(), Some("model not available"));
        assert_eq!(result.elapsed, Duration::ZERO);
    }

    #[test]
    fn test_blank_engine_name_rejected() {
        assert!(EngineResult::from_raw("  ", "text", Duration::ZERO).is_err());
        assert!(EngineResult::failure("", "oops").is_err());
    }

    #[test]
    fn test_metrics_record_serde_round_trip() {
        let record = crate::metrics::detailed_metrics("Hello World", "Helo World");
        let json = serde_json::to_string(&record).unwrap();
        let back: MetricsRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_engine_result_serde_round_trip() {
        let result = EngineResult::from_raw("trocr", "Some Text", Duration::from_millis(250)).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: EngineResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
