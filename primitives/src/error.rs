//! Host boundary error codes.
//!
//! Every fallible host call (state access, event emission) reports one of
//! these codes. The repr values are stable.

use core::fmt;

/// Host API error codes.
///
/// `0` = OK, non-zero = error. These repr values MUST stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    Ok = 0,
    EmptyKey = 1,
    KeyTooLarge = 2,
    ValueTooLarge = 3,
    WriteLimit = 4,
    EventLimit = 5,
    EventTooLarge = 6,
    InvalidEventName = 7,
    Internal = 8,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::EmptyKey => write!(f, "ERR_EMPTY_KEY"),
            Self::KeyTooLarge => write!(f, "ERR_KEY_TOO_LARGE"),
            Self::ValueTooLarge => write!(f, "ERR_VALUE_TOO_LARGE"),
            Self::WriteLimit => write!(f, "ERR_WRITE_LIMIT"),
            Self::EventLimit => write!(f, "ERR_EVENT_LIMIT"),
            Self::EventTooLarge => write!(f, "ERR_EVENT_TOO_LARGE"),
            Self::InvalidEventName => write!(f, "ERR_INVALID_EVENT_NAME"),
            Self::Internal => write!(f, "ERR_INTERNAL"),
        }
    }
}
