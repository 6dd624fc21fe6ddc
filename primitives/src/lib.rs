//! `kvledger-primitives`: foundational types for the kvledger chaincode.
//!
//! This crate provides the constants, host error codes, invocation and
//! event types, and the transactional state overlay shared by the
//! chaincode and the host-side collaborators.
//!
//! Supports `#![no_std]` for WASM guest builds (use `default-features = false`).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod types;
pub mod error;
pub mod invocation;
pub mod state;

// Re-export commonly used types at the crate root for convenience.
pub use types::{Hash, EVENT_NAME, INIT_KEY, MAX_KEY_LEN, MAX_VALUE_LEN};
pub use error::ErrorCode;
pub use invocation::{EntryPoint, Event, Invocation, Phase};
pub use state::StateOverlay;
