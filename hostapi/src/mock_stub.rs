//! In-memory ledger host.
//!
//! `MockStub` plays the host's part for one chaincode: it hands itself to
//! the chaincode as the `ChaincodeStub`, buffers the transaction's writes
//! in a `StateOverlay` over a committed `StateStore`, records emitted
//! events, and commits or discards the transaction depending on whether
//! the invocation succeeded.

use kvledger_primitives::{types::hash_to_hex, Event, Hash, StateOverlay};
use tracing::{debug, warn};

use crate::error::HostError;
use crate::mem_store::MemStore;
use crate::state_store::StateStore;
use crate::traits::{EventEmitter, StateAccessor};
use crate::types::HostConfig;

/// Outcome of one transaction run through [`MockStub::run_transaction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxRecord {
    /// Host-assigned transaction id.
    pub tx_id: String,
    /// Whether the invocation succeeded and its writes were committed.
    pub success: bool,
    /// Every event the chaincode emitted, in order.
    pub events: Vec<Event>,
    /// Committed state root after the transaction.
    pub state_root: Hash,
}

impl TxRecord {
    /// The event the ledger publishes for this transaction.
    ///
    /// A transaction carries a single event; a later emission replaces an
    /// earlier one, so the published event is the last one set.
    pub fn event(&self) -> Option<&Event> {
        self.events.last()
    }
}

/// Transactional in-memory host implementing `ChaincodeStub`.
pub struct MockStub<S: StateStore = MemStore> {
    committed: S,
    config: HostConfig,
    overlay: StateOverlay,
    events: Vec<Event>,
    history: Vec<TxRecord>,
}

impl MockStub<MemStore> {
    /// Create a host over an empty `MemStore` with default limits.
    pub fn new() -> Self {
        Self::with_store(MemStore::new(), HostConfig::default())
    }

    /// Create a host over an empty `MemStore` with custom limits.
    pub fn with_config(config: HostConfig) -> Self {
        Self::with_store(MemStore::new(), config)
    }
}

impl Default for MockStub<MemStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateStore> MockStub<S> {
    /// Create a host over an existing committed store.
    pub fn with_store(committed: S, config: HostConfig) -> Self {
        Self {
            committed,
            config,
            overlay: StateOverlay::new(),
            events: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Run one transaction.
    ///
    /// `invoke` receives this stub as the chaincode's handle. Its writes are
    /// committed if it returns `Ok` and discarded if it returns `Err`. The
    /// outer `Result` reports a failure of the host itself to commit; such
    /// a transaction is still recorded, as failed.
    /// Anything buffered outside a transaction is discarded first.
    pub fn run_transaction<T, E>(
        &mut self,
        tx_id: &str,
        invoke: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<Result<T, E>, HostError> {
        self.rollback();
        let result = invoke(self);
        let events = std::mem::take(&mut self.events);

        let committed = if result.is_ok() {
            self.commit()
        } else {
            self.rollback();
            Ok(())
        };
        let success = result.is_ok() && committed.is_ok();

        let state_root = self.state_root();
        match &committed {
            Ok(()) => debug!(
                tx_id,
                success,
                events = events.len(),
                root = %hash_to_hex(&state_root),
                "transaction finished"
            ),
            Err(err) => warn!(tx_id, error = %err, events = events.len(), "commit rejected"),
        }
        self.history.push(TxRecord {
            tx_id: tx_id.to_string(),
            success,
            events,
            state_root,
        });
        committed.map(|()| result)
    }

    /// Apply buffered writes to committed state.
    pub fn commit(&mut self) -> Result<(), HostError> {
        let writes = std::mem::take(&mut self.overlay).drain();
        self.committed.apply(writes)
    }

    /// Discard buffered writes and events.
    pub fn rollback(&mut self) {
        self.overlay.clear();
        self.events.clear();
    }

    /// Committed state root.
    pub fn state_root(&self) -> Hash {
        self.committed.state_root()
    }

    /// Committed state backend.
    pub fn committed(&self) -> &S {
        &self.committed
    }

    /// Writes buffered by the transaction in progress.
    pub fn pending(&self) -> &StateOverlay {
        &self.overlay
    }

    /// Events emitted by the transaction in progress.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Every finished transaction, oldest first.
    pub fn history(&self) -> &[TxRecord] {
        &self.history
    }

    /// The most recently finished transaction.
    pub fn last_tx(&self) -> Option<&TxRecord> {
        self.history.last()
    }

    /// The host's limits.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }
}

impl<S: StateStore> StateAccessor for MockStub<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        if key.len() > self.config.max_key_len {
            return Err(HostError::key_too_large());
        }
        match self.overlay.get(key) {
            Some(value) => Ok(Some(value.to_vec())),
            None => self.committed.get(key),
        }
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), HostError> {
        if key.is_empty() {
            return Err(HostError::empty_key());
        }
        if key.len() > self.config.max_key_len {
            return Err(HostError::key_too_large());
        }
        if value.len() > self.config.max_value_len {
            return Err(HostError::value_too_large());
        }
        if self.overlay.projected_bytes(key, value.len()) > self.config.max_write_bytes {
            return Err(HostError::write_limit());
        }
        self.overlay.set(key.to_string(), value.to_vec());
        Ok(())
    }
}

impl<S: StateStore> EventEmitter for MockStub<S> {
    fn emit_event(&mut self, name: &str, payload: &[u8]) -> Result<(), HostError> {
        if name.is_empty() {
            return Err(HostError::invalid_event_name());
        }
        if payload.len() > self.config.max_event_payload {
            return Err(HostError::event_too_large());
        }
        if self.events.len() >= self.config.max_events as usize {
            warn!(name, limit = self.config.max_events, "event rejected");
            return Err(HostError::event_limit());
        }
        self.events.push(Event::new(name, payload.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_reads_see_own_writes() {
        let mut stub = MockStub::new();
        assert_eq!(stub.get("k").unwrap(), None);
        stub.put("k", b"v").unwrap();
        assert_eq!(stub.get("k").unwrap(), Some(b"v".to_vec()));
        // Not committed yet
        assert_eq!(stub.committed().get("k").unwrap(), None);
    }

    #[test]
    fn test_reads_fall_through_to_committed() {
        let mut store = MemStore::new();
        store.insert("k", b"committed".to_vec());
        let mut stub = MockStub::with_store(store, HostConfig::default());
        assert_eq!(stub.get("k").unwrap(), Some(b"committed".to_vec()));

        stub.put("k", b"new").unwrap();
        assert_eq!(stub.get("k").unwrap(), Some(b"new".to_vec()));
    }

    #[test]
    fn test_successful_transaction_commits() {
        let mut stub = MockStub::new();
        let before = stub.state_root();
        let result: Result<(), HostError> = stub
            .run_transaction("tx1", |s| {
                s.emit_event("cevent", b"writeEvent")?;
                s.put("a", b"1")
            })
            .unwrap();
        assert!(result.is_ok());
        assert_eq!(stub.committed().get("a").unwrap(), Some(b"1".to_vec()));
        assert_ne!(stub.state_root(), before);

        let record = stub.last_tx().unwrap();
        assert_eq!(record.tx_id, "tx1");
        assert!(record.success);
        assert_eq!(record.events.len(), 1);
        assert_eq!(record.state_root, stub.state_root());
        assert!(stub.pending().is_empty());
        assert!(stub.events().is_empty());
    }

    #[test]
    fn test_failed_transaction_discards_writes() {
        let mut stub = MockStub::new();
        let before = stub.state_root();
        let result: Result<(), HostError> = stub
            .run_transaction("tx1", |s| {
                s.put("a", b"1")?;
                Err(HostError::Internal("boom".into()))
            })
            .unwrap();
        assert!(result.is_err());
        assert_eq!(stub.committed().get("a").unwrap(), None);
        assert_eq!(stub.state_root(), before);
        assert!(!stub.last_tx().unwrap().success);
    }

    struct FailingStore(MemStore);

    impl StateStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
            self.0.get(key)
        }

        fn apply(&mut self, _writes: BTreeMap<String, Vec<u8>>) -> Result<(), HostError> {
            Err(HostError::Internal("disk".into()))
        }

        fn state_root(&self) -> Hash {
            self.0.state_root()
        }
    }

    #[test]
    fn test_rejected_commit_is_recorded_as_failed() {
        let mut stub = MockStub::with_store(FailingStore(MemStore::new()), HostConfig::default());
        let before = stub.state_root();
        let err = stub
            .run_transaction("tx1", |s| {
                s.emit_event("cevent", b"writeEvent")?;
                s.put("a", b"b")
            })
            .unwrap_err();
        assert_eq!(err, HostError::Internal("disk".into()));

        assert_eq!(stub.history().len(), 1);
        let record = stub.last_tx().unwrap();
        assert_eq!(record.tx_id, "tx1");
        assert!(!record.success);
        assert_eq!(record.event().unwrap().payload, b"writeEvent".to_vec());
        assert_eq!(record.state_root, before);
        assert!(stub.pending().is_empty());
        assert_eq!(stub.get("a").unwrap(), None);
    }

    #[test]
    fn test_published_event_is_last_set() {
        let mut stub = MockStub::new();
        stub.run_transaction("tx1", |s| {
            s.emit_event("cevent", b"InvokeEvent")?;
            s.emit_event("cevent", b"writeEvent")
        })
        .unwrap()
        .unwrap();
        let record = stub.last_tx().unwrap();
        assert_eq!(record.events.len(), 2);
        assert_eq!(record.event().unwrap().payload, b"writeEvent".to_vec());
    }

    #[test]
    fn test_put_limits() {
        let config = HostConfig {
            max_key_len: 4,
            max_value_len: 4,
            max_write_bytes: 10,
            ..HostConfig::default()
        };
        let mut stub = MockStub::with_config(config);
        assert_eq!(stub.put("", b"v").unwrap_err(), HostError::empty_key());
        assert_eq!(stub.put("toolong", b"v").unwrap_err(), HostError::key_too_large());
        assert_eq!(stub.put("k", b"toolong").unwrap_err(), HostError::value_too_large());
        stub.put("k1", b"1234").unwrap(); // 6 bytes
        assert_eq!(stub.put("k2", b"1234").unwrap_err(), HostError::write_limit());
        // Overwriting the same key stays within budget
        stub.put("k1", b"12").unwrap();
        assert_eq!(stub.get("k2").unwrap(), None);
    }

    #[test]
    fn test_event_limits() {
        let config = HostConfig {
            max_events: 1,
            max_event_payload: 8,
            ..HostConfig::default()
        };
        let mut stub = MockStub::with_config(config);
        assert_eq!(stub.emit_event("", b"x").unwrap_err(), HostError::invalid_event_name());
        assert_eq!(
            stub.emit_event("cevent", b"much too long").unwrap_err(),
            HostError::event_too_large()
        );
        stub.emit_event("cevent", b"ok").unwrap();
        assert_eq!(stub.emit_event("cevent", b"ok").unwrap_err(), HostError::event_limit());
        assert_eq!(stub.events().len(), 1);
    }

    #[test]
    fn test_event_limit_resets_per_transaction() {
        let config = HostConfig {
            max_events: 1,
            ..HostConfig::default()
        };
        let mut stub = MockStub::with_config(config);
        for tx in ["tx1", "tx2"] {
            stub.run_transaction(tx, |s| s.emit_event("cevent", b"InitEvent"))
                .unwrap()
                .unwrap();
        }
        assert_eq!(stub.history().len(), 2);
    }
}
