//! In-memory state store.
//!
//! `MemStore` implements `StateStore` using a `BTreeMap` for deterministic
//! key ordering. Its state root is a BLAKE3 digest over the sorted,
//! length-prefixed entries, so any change to any entry changes the root.

use std::collections::BTreeMap;

use kvledger_primitives::Hash;

use crate::error::HostError;
use crate::state_store::StateStore;

/// Domain separator mixed into every state root.
const STATE_ROOT_DOMAIN: &[u8] = b"kvledger/state-root/v1";

/// In-memory state store backed by `BTreeMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemStore {
    data: BTreeMap<String, Vec<u8>>,
}

impl MemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key-value pair into the store.
    pub fn insert(&mut self, key: impl Into<String>, value: Vec<u8>) {
        self.data.insert(key.into(), value);
    }

    /// Returns the number of entries in the store.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the committed entries.
    pub fn entries(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.data
    }
}

impl StateStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        Ok(self.data.get(key).cloned())
    }

    fn contains(&self, key: &str) -> Result<bool, HostError> {
        Ok(self.data.contains_key(key))
    }

    fn apply(&mut self, writes: BTreeMap<String, Vec<u8>>) -> Result<(), HostError> {
        self.data.extend(writes);
        Ok(())
    }

    fn state_root(&self) -> Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(STATE_ROOT_DOMAIN);
        hasher.update(&(self.data.len() as u64).to_le_bytes());
        for (key, value) in &self.data {
            hasher.update(&(key.len() as u64).to_le_bytes());
            hasher.update(key.as_bytes());
            hasher.update(&(value.len() as u64).to_le_bytes());
            hasher.update(value);
        }
        *hasher.finalize().as_bytes()
    }
}
