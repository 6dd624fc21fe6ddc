//! Chaincode error types.

use kvledger_hostapi::HostError;
use kvledger_primitives::EntryPoint;

/// Error returned to the host for a failed invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// Wrong number of positional arguments for the called function.
    #[error("Incorrect number of arguments for {function}. Expecting {expected}, got {got}")]
    ArgumentCount {
        function: String,
        expected: usize,
        got: usize,
    },

    /// No handler is registered under the requested name.
    #[error("Received unknown function {}: {name}", .entry.request_noun())]
    UnknownFunction { entry: EntryPoint, name: String },

    /// The state accessor failed, or a read key is absent.
    #[error("{message}")]
    StateAccess {
        key: String,
        message: String,
        #[source]
        source: Option<HostError>,
    },

    /// The event channel rejected the phase event.
    #[error(transparent)]
    EventEmission(HostError),
}

impl ContractError {
    /// The host error behind this failure, if there is one.
    pub fn host_error(&self) -> Option<&HostError> {
        match self {
            Self::StateAccess { source, .. } => source.as_ref(),
            Self::EventEmission(err) => Some(err),
            _ => None,
        }
    }
}

/// Convenience result type for the chaincode.
pub type ContractResult<T> = Result<T, ContractError>;
