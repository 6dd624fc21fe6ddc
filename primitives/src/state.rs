//! Transactional state overlay.
//!
//! The overlay buffers a transaction's writes and makes them visible to
//! later reads in the same transaction. The host commits the buffered
//! writes atomically when the invocation succeeds and discards them when
//! it fails.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// Write buffer overlaying committed state.
///
/// Uses `BTreeMap` so draining yields writes in key order.
#[derive(Debug, Clone, Default)]
pub struct StateOverlay {
    writes: BTreeMap<String, Vec<u8>>,
    /// Total bytes written (keys + values) for enforcing a write budget.
    total_write_bytes: u64,
}

impl StateOverlay {
    /// Create a new empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer a write. A later write to the same key replaces the earlier one.
    pub fn set(&mut self, key: String, value: Vec<u8>) {
        self.total_write_bytes = self.projected_bytes(&key, value.len());
        self.writes.insert(key, value);
    }

    /// The write budget the overlay would use after writing `value_len`
    /// bytes under `key`.
    pub fn projected_bytes(&self, key: &str, value_len: usize) -> u64 {
        let prev = self
            .writes
            .get(key)
            .map(|v| (key.len() + v.len()) as u64)
            .unwrap_or(0);
        self.total_write_bytes
            .saturating_sub(prev)
            .saturating_add((key.len() + value_len) as u64)
    }

    /// Look up a key. `None` means the key was not written in this
    /// overlay and the caller must check committed state.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.writes.get(key).map(Vec::as_slice)
    }

    /// Consume the overlay and return all buffered writes in key order.
    pub fn drain(self) -> BTreeMap<String, Vec<u8>> {
        self.writes
    }

    /// Clear all buffered writes.
    pub fn clear(&mut self) {
        self.writes.clear();
        self.total_write_bytes = 0;
    }

    /// Returns the number of keys written in this overlay.
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// Returns true if no writes have been buffered.
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Returns the total bytes written (keys + values).
    pub fn total_write_bytes(&self) -> u64 {
        self.total_write_bytes
    }
}
