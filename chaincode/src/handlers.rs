//! The `write` and `read` handlers.
//!
//! Both follow the same sequence: check arity, emit the phase event, then
//! make exactly one state accessor call. Any failure returns immediately.

use kvledger_hostapi::{ChaincodeStub, EventEmitter, HostError, StateAccessor};
use kvledger_primitives::{Phase, EVENT_NAME};
use serde_json::json;

use crate::error::{ContractError, ContractResult};
use crate::logger::ChaincodeLogger;
use crate::validation::expect_args;

/// Emit the event for `phase`.
///
/// A rejected event aborts the invocation with the host's error unchanged.
pub fn emit_phase(stub: &mut dyn ChaincodeStub, phase: Phase) -> ContractResult<()> {
    stub.emit_event(EVENT_NAME, phase.payload().as_bytes()).map_err(ContractError::EventEmission)
}

/// Store `value` under `key`. Args: `[key, value]`.
pub fn write(
    stub: &mut dyn ChaincodeStub,
    logger: &ChaincodeLogger,
    args: &[String],
) -> ContractResult<()> {
    logger.entered("write", args);
    expect_args("write", args, 2)?;
    emit_phase(stub, Phase::Write)?;

    let (key, value) = (&args[0], &args[1]);
    stub.put(key, value.as_bytes()).map_err(|err| state_write_error(key, err))
}

/// Return the raw bytes stored under `key`. Args: `[key]`.
///
/// An absent key is an error, not an empty payload.
pub fn read(
    stub: &mut dyn ChaincodeStub,
    logger: &ChaincodeLogger,
    args: &[String],
) -> ContractResult<Vec<u8>> {
    logger.entered("read", args);
    expect_args("read", args, 1)?;
    emit_phase(stub, Phase::Read)?;

    let key = &args[0];
    match stub.get(key) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(state_read_error(key, None)),
        Err(err) => Err(state_read_error(key, Some(err))),
    }
}

/// Error for a rejected write.
pub(crate) fn state_write_error(key: &str, source: HostError) -> ContractError {
    ContractError::StateAccess {
        key: key.to_string(),
        message: format!("Failed to put state for {}: {}", key, source),
        source: Some(source),
    }
}

/// Error for a failed or empty read, carrying a JSON error description.
fn state_read_error(key: &str, source: Option<HostError>) -> ContractError {
    let message = json!({ "Error": format!("Failed to get state for {}", key) }).to_string();
    ContractError::StateAccess {
        key: key.to_string(),
        message,
        source,
    }
}
