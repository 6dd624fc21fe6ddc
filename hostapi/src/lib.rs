//! `kvledger-hostapi`: the host boundary of the kvledger chaincode.
//!
//! The chaincode never owns ledger state. It reaches the host only through
//! the narrow interfaces defined here:
//!
//! - `StateAccessor` / `EventEmitter`: what the chaincode calls
//! - `ChaincodeStub`: both, as one handle per transaction
//! - `HostError`: host-side error type with `ErrorCode` conversion
//!
//! And the in-memory host used by tests and local tooling:
//!
//! - `StateStore` trait: committed state backend abstraction
//! - `MemStore`: in-memory `StateStore` with a BLAKE3 state root
//! - `HostConfig`: per-transaction resource limits
//! - `MockStub`: transactional ledger host implementing `ChaincodeStub`

pub mod error;
pub mod types;
pub mod traits;
pub mod state_store;
pub mod mem_store;
pub mod mock_stub;

// Re-export commonly used types at the crate root.
pub use error::HostError;
pub use types::HostConfig;
pub use traits::{ChaincodeStub, EventEmitter, StateAccessor};
pub use state_store::StateStore;
pub use mem_store::MemStore;
pub use mock_stub::{MockStub, TxRecord};
