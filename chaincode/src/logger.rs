//! Injected structured logger.
//!
//! `KvChaincode` owns one `ChaincodeLogger` and hands it to every handler.
//! Records go through `tracing`; nothing here can abort the invocation.

use std::fmt::Display;

use kvledger_primitives::EntryPoint;
use tracing::{debug, warn};

use crate::config::ChaincodeConfig;

/// Named logger passed explicitly into each entry point and handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaincodeLogger {
    name: String,
    log_arguments: bool,
}

impl ChaincodeLogger {
    /// Create a logger that records argument values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            log_arguments: true,
        }
    }

    /// Create a logger from chaincode config.
    pub fn from_config(config: &ChaincodeConfig) -> Self {
        Self {
            name: config.logger_name.clone(),
            log_arguments: config.log_arguments,
        }
    }

    /// The logger's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record entry into `scope` with its arguments.
    pub fn entered(&self, scope: &str, args: &[String]) {
        let first_arg = if self.log_arguments {
            args.first().map(String::as_str)
        } else {
            None
        };
        debug!(logger = %self.name, scope, arg_count = args.len(), first_arg, "running");
    }

    /// Record that no handler matched `function`.
    pub fn unknown_function(&self, entry: EntryPoint, function: &str) {
        warn!(logger = %self.name, entry = entry.as_str(), function, "did not find func");
    }

    /// Record a failed phase.
    pub fn failed(&self, scope: &str, err: &dyn Display) {
        debug!(logger = %self.name, scope, error = %err, "failed");
    }
}

impl Default for ChaincodeLogger {
    fn default() -> Self {
        Self::from_config(&ChaincodeConfig::default())
    }
}
