//! Host-side configuration types.
//!
//! `HostConfig` bundles the resource limits the in-memory host enforces
//! for a single transaction.

use kvledger_primitives::{MAX_KEY_LEN, MAX_VALUE_LEN};

/// Limits enforced by the host for one transaction.
///
/// The chaincode cannot exceed them; a violating call fails with the
/// matching `HostError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Maximum length of a state key in bytes.
    pub max_key_len: usize,
    /// Maximum length of a state value in bytes.
    pub max_value_len: usize,
    /// Maximum total bytes (keys + values) written per transaction.
    pub max_write_bytes: u64,
    /// Maximum number of events emitted per transaction.
    pub max_events: u32,
    /// Maximum event payload length in bytes.
    pub max_event_payload: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_key_len: MAX_KEY_LEN,
            max_value_len: MAX_VALUE_LEN,
            max_write_bytes: 4 * 1024 * 1024, // 4 MiB
            max_events: 16,
            max_event_payload: 1024,
        }
    }
}
