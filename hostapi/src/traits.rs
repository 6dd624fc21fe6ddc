//! Chaincode-facing host interfaces.
//!
//! The chaincode reaches ledger state and the event channel only through
//! these traits. Durability, ordering and replication stay with whoever
//! implements them.

use crate::error::HostError;

/// Keyed byte store provided by the host.
pub trait StateAccessor {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist. Reads observe writes
    /// made earlier in the same transaction.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError>;

    /// Store `value` under `key`.
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), HostError>;
}

/// Notification channel provided by the host.
pub trait EventEmitter {
    /// Emit a named event with an opaque payload.
    fn emit_event(&mut self, name: &str, payload: &[u8]) -> Result<(), HostError>;
}

/// The per-transaction handle the host passes into the chaincode.
pub trait ChaincodeStub: StateAccessor + EventEmitter {}

impl<T: StateAccessor + EventEmitter + ?Sized> ChaincodeStub for T {}
