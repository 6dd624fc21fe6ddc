//! Entry points and routing.
//!
//! The host calls one of three entry points per transaction:
//!
//! 1. `init(args)`: validate arity, emit `InitEvent`, seed [`INIT_KEY`]
//! 2. `invoke(function, args)`: emit `InvokeEvent`, then route to
//!    `init` or `write`
//! 3. `query(function, args)`: emit `QueryEvent`, then route to `read`
//!
//! Function names are parsed into [`InvokeFunction`] / [`QueryFunction`]
//! by exact, case-sensitive match before anything is routed.

use std::str::FromStr;

use kvledger_hostapi::{ChaincodeStub, StateAccessor};
use kvledger_primitives::{EntryPoint, Invocation, Phase, INIT_KEY};

use crate::config::ChaincodeConfig;
use crate::error::{ContractError, ContractResult};
use crate::handlers::{self, emit_phase, state_write_error};
use crate::logger::ChaincodeLogger;
use crate::validation::expect_args;

/// Functions reachable through `invoke`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvokeFunction {
    Init,
    Write,
}

impl InvokeFunction {
    /// Exact-match lookup of a function name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "init" => Some(Self::Init),
            "write" => Some(Self::Write),
            _ => None,
        }
    }

    /// The function's registered name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Write => "write",
        }
    }
}

impl FromStr for InvokeFunction {
    type Err = ContractError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::parse(name).ok_or_else(|| ContractError::UnknownFunction {
            entry: EntryPoint::Invoke,
            name: name.to_string(),
        })
    }
}

/// Functions reachable through `query`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryFunction {
    Read,
}

impl QueryFunction {
    /// Exact-match lookup of a function name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "read" => Some(Self::Read),
            _ => None,
        }
    }

    /// The function's registered name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Read => "read",
        }
    }
}

impl FromStr for QueryFunction {
    type Err = ContractError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::parse(name).ok_or_else(|| ContractError::UnknownFunction {
            entry: EntryPoint::Query,
            name: name.to_string(),
        })
    }
}

/// The interface the host ledger calls, once per transaction.
pub trait Chaincode {
    /// Initialize the chaincode. Args: `[value]`.
    fn init(&self, stub: &mut dyn ChaincodeStub, args: &[String]) -> ContractResult<()>;

    /// Run a state-changing function.
    fn invoke(
        &self,
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> ContractResult<()>;

    /// Run a read-only function and return its payload.
    fn query(
        &self,
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> ContractResult<Vec<u8>>;

    /// Route a generic invocation to the matching entry point.
    ///
    /// `Init` ignores the invocation's function name. Only `Query` yields
    /// a payload.
    fn dispatch(
        &self,
        stub: &mut dyn ChaincodeStub,
        entry: EntryPoint,
        invocation: &Invocation,
    ) -> ContractResult<Option<Vec<u8>>> {
        match entry {
            EntryPoint::Init => self.init(stub, &invocation.args).map(|()| None),
            EntryPoint::Invoke => self
                .invoke(stub, &invocation.function, &invocation.args)
                .map(|()| None),
            EntryPoint::Query => self
                .query(stub, &invocation.function, &invocation.args)
                .map(Some),
        }
    }
}

/// The key/value chaincode.
///
/// Holds no ledger state; only its injected logger.
#[derive(Debug, Clone, Default)]
pub struct KvChaincode {
    logger: ChaincodeLogger,
}

impl KvChaincode {
    /// Create a chaincode that logs through `logger`.
    pub fn new(logger: ChaincodeLogger) -> Self {
        Self { logger }
    }

    /// Create a chaincode from config.
    pub fn from_config(config: &ChaincodeConfig) -> Self {
        Self::new(ChaincodeLogger::from_config(config))
    }

    /// The injected logger.
    pub fn logger(&self) -> &ChaincodeLogger {
        &self.logger
    }

    fn run_init(&self, stub: &mut dyn ChaincodeStub, args: &[String]) -> ContractResult<()> {
        self.logger.entered("init", args);
        expect_args("init", args, 1)?;
        emit_phase(stub, Phase::Init)?;

        stub.put(INIT_KEY, args[0].as_bytes()).map_err(|err| state_write_error(INIT_KEY, err))
    }

    fn run_invoke(
        &self,
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> ContractResult<()> {
        self.logger.entered("invoke", args);
        emit_phase(stub, Phase::Invoke)?;

        match function.parse::<InvokeFunction>() {
            Ok(InvokeFunction::Init) => self.run_init(stub, args),
            Ok(InvokeFunction::Write) => handlers::write(stub, &self.logger, args),
            Err(err) => {
                self.logger.unknown_function(EntryPoint::Invoke, function);
                Err(err)
            }
        }
    }

    fn run_query(
        &self,
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> ContractResult<Vec<u8>> {
        self.logger.entered("query", args);
        emit_phase(stub, Phase::Query)?;

        match function.parse::<QueryFunction>() {
            Ok(QueryFunction::Read) => handlers::read(stub, &self.logger, args),
            Err(err) => {
                self.logger.unknown_function(EntryPoint::Query, function);
                Err(err)
            }
        }
    }

    fn logged<T>(&self, scope: &str, result: ContractResult<T>) -> ContractResult<T> {
        if let Err(err) = &result {
            self.logger.failed(scope, err);
        }
        result
    }
}

impl Chaincode for KvChaincode {
    fn init(&self, stub: &mut dyn ChaincodeStub, args: &[String]) -> ContractResult<()> {
        self.logged("init", self.run_init(stub, args))
    }

    fn invoke(
        &self,
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> ContractResult<()> {
        self.logged("invoke", self.run_invoke(stub, function, args))
    }

    fn query(
        &self,
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> ContractResult<Vec<u8>> {
        self.logged("query", self.run_query(stub, function, args))
    }
}
