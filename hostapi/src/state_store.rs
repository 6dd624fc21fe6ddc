//! Committed state storage abstraction.
//!
//! `StateStore` holds the state committed by earlier transactions. The
//! `MockStub` layers a per-transaction `StateOverlay` on top of it: reads
//! check the overlay first, then fall through to the store, and a
//! successful transaction applies its overlay here in one step.

use std::collections::BTreeMap;

use kvledger_primitives::Hash;

use crate::error::HostError;

/// Abstraction over committed state storage.
///
/// Implementations must be deterministic: equal contents always produce
/// equal reads and equal state roots.
pub trait StateStore: Send + Sync {
    /// Get the committed value for a key. `Ok(None)` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError>;

    /// Check if a key exists in committed state.
    ///
    /// Default implementation uses `get()`, but backends may optimize this.
    fn contains(&self, key: &str) -> Result<bool, HostError> {
        Ok(self.get(key)?.is_some())
    }

    /// Apply a transaction's writes atomically, in key order.
    fn apply(&mut self, writes: BTreeMap<String, Vec<u8>>) -> Result<(), HostError>;

    /// Digest committing to the full contents of the store.
    fn state_root(&self) -> Hash;
}
