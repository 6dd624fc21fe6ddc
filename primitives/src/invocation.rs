//! Invocation boundary types: entry points, phases, invocations, events.
//!
//! The host hands the chaincode one `Invocation` per transaction through
//! one of three entry points. Each phase of handling it announces itself
//! with exactly one `Event` named [`EVENT_NAME`].

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::types::EVENT_NAME;

/// The three entry points the host can call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPoint {
    Init,
    Invoke,
    Query,
}

impl EntryPoint {
    /// Lowercase name of the entry point.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Invoke => "invoke",
            Self::Query => "query",
        }
    }

    /// Noun used when reporting a request made through this entry point.
    pub fn request_noun(self) -> &'static str {
        match self {
            Self::Init => "initialization",
            Self::Invoke => "invocation",
            Self::Query => "query",
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The phase of handling that produced an event.
///
/// Entry points (`Init`, `Invoke`, `Query`) and handlers (`Write`, `Read`)
/// each emit exactly one event tagged with their phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Init,
    Invoke,
    Query,
    Write,
    Read,
}

impl Phase {
    /// The literal event payload tag for this phase.
    pub fn payload(self) -> &'static str {
        match self {
            Self::Init => "InitEvent",
            Self::Invoke => "InvokeEvent",
            Self::Query => "QueryEvent",
            Self::Write => "writeEvent",
            Self::Read => "readEvent",
        }
    }

    /// Parse a payload tag back into its phase.
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        match payload {
            b"InitEvent" => Some(Self::Init),
            b"InvokeEvent" => Some(Self::Invoke),
            b"QueryEvent" => Some(Self::Query),
            b"writeEvent" => Some(Self::Write),
            b"readEvent" => Some(Self::Read),
            _ => None,
        }
    }

    /// Build the event this phase emits.
    pub fn event(self) -> Event {
        Event::new(EVENT_NAME, self.payload().as_bytes().to_vec())
    }
}

/// A named notification emitted to the host's event channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event name (always [`EVENT_NAME`] for chaincode events).
    pub name: String,
    /// Opaque payload.
    pub payload: Vec<u8>,
}

impl Event {
    /// Create an event.
    pub fn new(name: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// The phase this event was emitted by, if it is a chaincode phase event.
    pub fn phase(&self) -> Option<Phase> {
        if self.name != EVENT_NAME {
            return None;
        }
        Phase::from_payload(&self.payload)
    }
}

/// One call into the chaincode: a function name and ordered string arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Invocation {
    /// Function name to route on.
    pub function: String,
    /// Positional arguments.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Invocation {
    /// Create an invocation from anything string-like.
    pub fn new<I, A>(function: &str, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: ToString,
    {
        Self {
            function: function.to_string(),
            args: args.into_iter().map(|a| a.to_string()).collect(),
        }
    }
}
