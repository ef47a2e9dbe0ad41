//! Inkscore - OCR Result Scoring, Correction, and Caching
//!
//! Inkscore is the scoring core of a handwriting text recognition pipeline.
//! It turns a raw recognized string plus a reference string into quantitative
//! accuracy metrics, applies a deterministic heuristic correction pipeline to
//! raw OCR output, ranks multiple competing recognizer outputs, and caches
//! recognition results under a bounded FIFO policy keyed by content
//! fingerprint.
//!
//! # Quick Start
//!
//! ```rust
//! use inkscore::{correct, detailed_metrics, RecognitionCache};
//!
//! // Repair systematic recognizer confusions in raw output.
//! let correction = correct("Trmap");
//! assert_eq!(correction.corrected, "TMAP");
//!
//! // Score a candidate against a reference transcript.
//! let metrics = detailed_metrics("Hello World", "Helo World");
//! assert_eq!(metrics.levenshtein_distance, 1);
//!
//! // Cache recognized text under a caller-computed image fingerprint.
//! let cache = RecognitionCache::new();
//! cache.put("9f2c4d1e", correction.corrected);
//! assert!(cache.get("9f2c4d1e").is_some());
//! ```
//!
//! # Architecture
//!
//! - **Metrics** (`metrics`): Levenshtein distance, normalization, CER/WER,
//!   character and word accuracy, detailed records
//! - **Correction** (`correction`): ordered pattern-based rewrite rules with
//!   an audit trail
//! - **Ranking** (`ranking`): stable ordering of engine results by character
//!   accuracy
//! - **Cache** (`cache`): bounded insertion-ordered store with FIFO eviction
//!
//! Everything except the cache is pure, stateless, and reentrant; the cache
//! guards its state with a coarse-grained lock. Nothing here performs I/O,
//! blocks, or retries — image handling, model inference, and the web surface
//! are external collaborators.

#![deny(unsafe_code)]

pub mod cache;
pub mod correction;
pub mod error;
pub mod metrics;
pub mod ranking;
pub mod types;

pub use cache::{DEFAULT_CAPACITY, RecognitionCache};
pub use correction::{Correction, correct};
pub use error::{InkscoreError, Result};
pub use metrics::{
    char_distance, character_accuracy, character_error_rate, detailed_metrics, levenshtein, normalize_text,
    word_accuracy, word_error_rate,
};
pub use ranking::rank;
pub use types::{EngineResult, MetricsRecord};
