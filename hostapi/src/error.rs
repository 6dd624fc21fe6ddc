//! Host-side error types.
//!
//! `HostError` is the error type of every host boundary call. It wraps
//! `ErrorCode` from `kvledger-primitives` for well-known failures and
//! provides an `Internal` variant carrying a free-form description.

use kvledger_primitives::ErrorCode;
use std::fmt;

/// Error returned by `StateAccessor` and `EventEmitter` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A well-known host error code.
    Code(ErrorCode),
    /// A host failure with no dedicated code.
    Internal(String),
}

impl HostError {
    /// Create an empty-key error.
    pub fn empty_key() -> Self {
        Self::Code(ErrorCode::EmptyKey)
    }

    /// Create a key-too-large error.
    pub fn key_too_large() -> Self {
        Self::Code(ErrorCode::KeyTooLarge)
    }

    /// Create a value-too-large error.
    pub fn value_too_large() -> Self {
        Self::Code(ErrorCode::ValueTooLarge)
    }

    /// Create a write-limit error.
    pub fn write_limit() -> Self {
        Self::Code(ErrorCode::WriteLimit)
    }

    /// Create an event-limit error.
    pub fn event_limit() -> Self {
        Self::Code(ErrorCode::EventLimit)
    }

    /// Create an event-too-large error.
    pub fn event_too_large() -> Self {
        Self::Code(ErrorCode::EventTooLarge)
    }

    /// Create an invalid-event-name error.
    pub fn invalid_event_name() -> Self {
        Self::Code(ErrorCode::InvalidEventName)
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "host error: {}", code),
            Self::Internal(msg) => write!(f, "internal host error: {}", msg),
        }
    }
}

impl std::error::Error for HostError {}

impl From<ErrorCode> for HostError {
    fn from(code: ErrorCode) -> Self {
        Self::Code(code)
    }
}
