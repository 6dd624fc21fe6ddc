//! `kvledger-chaincode`: a minimal key/value chaincode.
//!
//! The host ledger loads this crate as a deterministic state-transition
//! function and calls it once per transaction through one of three entry
//! points. Everything the chaincode touches goes through the
//! `ChaincodeStub` the host passes in.
//!
//! ## Architecture
//!
//! - [`dispatcher::Chaincode`]: the host-facing trait (init/invoke/query)
//! - [`dispatcher::KvChaincode`]: routes invocations to handlers
//! - [`handlers`]: the `write` and `read` handlers
//! - [`validation`]: argument arity checks
//! - [`logger::ChaincodeLogger`]: injected structured logger
//! - [`config::ChaincodeConfig`]: logger settings
//! - [`error::ContractError`]: errors surfaced to the host
//!
//! Every phase emits one `cevent` before its state operation. Entry
//! points `invoke`/`query` emit before validating anything; `init`,
//! `write` and `read` validate their arity first.

pub mod error;
pub mod config;
pub mod logger;
pub mod validation;
pub mod handlers;
pub mod dispatcher;

// Re-export key types for convenience
pub use config::ChaincodeConfig;
pub use dispatcher::{Chaincode, InvokeFunction, KvChaincode, QueryFunction};
pub use error::{ContractError, ContractResult};
pub use logger::ChaincodeLogger;
