//! Bounded in-memory cache for recognized text.
//!
//! Keys are content fingerprints of the source image (computed by the caller,
//! e.g. a hash of decoded pixel bytes); values are recognized texts. The
//! cache is insertion-ordered with FIFO eviction: once a `put` grows the
//! store past capacity, the single oldest-inserted entry is removed. This is
//! deliberately not an LRU — lookups never reorder anything.
//!
//! The cache is the only shared mutable state in the crate. A coarse-grained
//! [`parking_lot::Mutex`] guards the whole check-insert-evict sequence, so a
//! single instance can be shared across request-handling threads; this path
//! is not latency-critical relative to model inference.

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::error::{InkscoreError, Result};

/// Default number of entries retained.
pub const DEFAULT_CAPACITY: usize = 100;

/// Bounded fingerprint → recognized-text cache with FIFO eviction.
pub struct RecognitionCache {
    entries: Mutex<IndexMap<String, String>>,
    capacity: usize,
}

impl RecognitionCache {
    /// Create an empty cache with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(IndexMap::new()),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Create an empty cache bounded to `capacity` entries.
    ///
    /// Fails fast on a zero capacity instead of building a cache that could
    /// never hold anything.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(InkscoreError::invalid_input("cache capacity must be greater than zero"));
        }

        Ok(Self {
            entries: Mutex::new(IndexMap::new()),
            capacity,
        })
    }

    /// Look up the recognized text for `fingerprint`.
    ///
    /// A miss is `None`, never an error. Lookups do not affect insertion
    /// order or eviction.
    pub fn get(&self, fingerprint: &str) -> Option<String> {
        self.entries.lock().get(fingerprint).cloned()
    }

    /// Store `text` under `fingerprint`.
    ///
    /// If the key is already present its text is replaced but its insertion
    /// position is unchanged. When the insert grows the store beyond
    /// capacity, the oldest-inserted entry is evicted.
    pub fn put(&self, fingerprint: impl Into<String>, text: impl Into<String>) {
        let fingerprint = fingerprint.into();
        let mut entries = self.entries.lock();

        entries.insert(fingerprint, text.into());

        if entries.len() > self.capacity {
            if let Some((evicted, _)) = entries.shift_remove_index(0) {
                tracing::debug!(fingerprint = %evicted, "evicted oldest cache entry");
            }
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Maximum number of entries the cache retains.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RecognitionCache {
    fn default() -> Self {
        Self::new()
    }
}
