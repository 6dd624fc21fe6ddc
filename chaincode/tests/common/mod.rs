//! Shared test helpers for integration tests.
//!
//! Provides a `Ledger` that drives `KvChaincode` through `MockStub`
//! transactions the way a host would, plus small argument and event helpers.

#![allow(dead_code)]

use kvledger_chaincode::{Chaincode, ContractResult, KvChaincode};
use kvledger_hostapi::{HostConfig, MockStub, TxRecord};
use kvledger_primitives::{EntryPoint, Hash, Invocation, Phase};

/// Build an owned argument list.
pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Phases of every event a transaction emitted, in order.
pub fn phases(record: &TxRecord) -> Vec<Phase> {
    record.events.iter().filter_map(|e| e.phase()).collect()
}

/// A chaincode deployed on an in-memory host.
pub struct Ledger {
    pub chaincode: KvChaincode,
    pub stub: MockStub,
    next_tx: u64,
}

impl Ledger {
    /// Fresh ledger with default host limits.
    pub fn new() -> Self {
        Self::with_config(HostConfig::default())
    }

    /// Fresh ledger with custom host limits.
    pub fn with_config(config: HostConfig) -> Self {
        Self {
            chaincode: KvChaincode::default(),
            stub: MockStub::with_config(config),
            next_tx: 0,
        }
    }

    fn tx_id(&mut self) -> String {
        self.next_tx += 1;
        format!("tx-{:04}", self.next_tx)
    }

    /// Run `Init` as its own transaction.
    pub fn init(&mut self, a: &[&str]) -> ContractResult<()> {
        let tx_id = self.tx_id();
        let cc = &self.chaincode;
        let args = args(a);
        self.stub
            .run_transaction(&tx_id, |stub| cc.init(stub, &args))
            .expect("host commit failed")
    }

    /// Run `Invoke` as its own transaction.
    pub fn invoke(&mut self, function: &str, a: &[&str]) -> ContractResult<()> {
        let tx_id = self.tx_id();
        let cc = &self.chaincode;
        let args = args(a);
        self.stub
            .run_transaction(&tx_id, |stub| cc.invoke(stub, function, &args))
            .expect("host commit failed")
    }

    /// Run `Query` as its own transaction.
    pub fn query(&mut self, function: &str, a: &[&str]) -> ContractResult<Vec<u8>> {
        let tx_id = self.tx_id();
        let cc = &self.chaincode;
        let args = args(a);
        self.stub
            .run_transaction(&tx_id, |stub| cc.query(stub, function, &args))
            .expect("host commit failed")
    }

    /// Run a generic invocation through `dispatch`.
    pub fn dispatch(
        &mut self,
        entry: EntryPoint,
        invocation: &Invocation,
    ) -> ContractResult<Option<Vec<u8>>> {
        let tx_id = self.tx_id();
        let cc = &self.chaincode;
        self.stub
            .run_transaction(&tx_id, |stub| cc.dispatch(stub, entry, invocation))
            .expect("host commit failed")
    }

    /// Record of the last transaction.
    pub fn last_tx(&self) -> &TxRecord {
        self.stub.last_tx().expect("no transaction has run")
    }

    /// Committed state root.
    pub fn state_root(&self) -> Hash {
        self.stub.state_root()
    }
}
