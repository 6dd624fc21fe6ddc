//! Chaincode configuration.

use serde::Deserialize;

/// Logger name used when none is configured.
pub const DEFAULT_LOGGER_NAME: &str = "vorvulev";

/// Settings the host may pass in when it instantiates the chaincode.
///
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChaincodeConfig {
    /// Name attached to every log record.
    pub logger_name: String,
    /// Whether argument values (not just counts) appear in logs.
    pub log_arguments: bool,
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            logger_name: DEFAULT_LOGGER_NAME.to_string(),
            log_arguments: true,
        }
    }
}

impl ChaincodeConfig {
    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
