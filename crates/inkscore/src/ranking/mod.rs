//! Ranking of competing engine outputs against a reference text.

use crate::metrics::detailed_metrics;
use crate::types::EngineResult;

/// Score and rank multiple engine results against `reference`.
///
/// Every result with `success == true` and non-empty corrected text gets a
/// [`crate::types::MetricsRecord`] computed against the reference; failed or
/// empty results are left untouched. The whole sequence is then stable-sorted
/// descending by character accuracy, with results lacking a metrics record
/// ordered as accuracy 0 — failures sink to the bottom but nothing is
/// dropped, and equal-accuracy results keep their input order.
pub fn rank(reference: &str, mut results: Vec<EngineResult>) -> Vec<EngineResult> {
    for result in &mut results {
        if result.success && !result.text.is_empty() {
            result.metrics = Some(detailed_metrics(reference, &result.text));
        }
    }

    results.sort_by(|a, b| ranking_accuracy(b).total_cmp(&ranking_accuracy(a)));
    results
}

fn ranking_accuracy(result: &EngineResult) -> f64 {
    result
        .metrics
        .as_ref()
        .map(|metrics| metrics.character_accuracy)
        .unwrap_or(0.0)
}
