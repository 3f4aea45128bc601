//! An in-memory `LedgerReader` for exercising the façades and the payment
//! verifier without a node.

// Each integration test binary compiles this module separately and uses a
// different subset of it.
#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use ghostspeak_client::rpc::{
    AccountFilter, LedgerReader, SimulationOutcome, TransactionRecord,
};
use ghostspeak_codec::Instruction;
use ghostspeak_types::error::RpcError;
use ghostspeak_types::Address;

#[derive(Default)]
pub struct MockLedger {
    accounts: HashMap<Address, Vec<u8>>,
    owners: HashMap<Address, Address>,
    transactions: HashMap<String, TransactionRecord>,
    pub fail_transport: bool,
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, owner: Address, address: Address, data: Vec<u8>) -> Self {
        self.accounts.insert(address, data);
        self.owners.insert(address, owner);
        self
    }

    pub fn with_transaction(mut self, record: TransactionRecord) -> Self {
        self.transactions.insert(record.signature.clone(), record);
        self
    }

    fn matches(&self, data: &[u8], filters: &[AccountFilter]) -> bool {
        filters.iter().all(|filter| match filter {
            AccountFilter::DataSize(size) => data.len() as u64 == *size,
            AccountFilter::MemCmp { offset, bytes } => data
                .get(*offset..offset + bytes.len())
                .is_some_and(|window| window == bytes.as_slice()),
        })
    }
}

#[async_trait]
impl LedgerReader for MockLedger {
    async fn account(&self, address: &Address) -> Result<Option<Vec<u8>>, RpcError> {
        if self.fail_transport {
            return Err(RpcError::Transport("connection refused".into()));
        }
        Ok(self.accounts.get(address).cloned())
    }

    async fn program_accounts(
        &self,
        program_id: &Address,
        filters: &[AccountFilter],
    ) -> Result<Vec<(Address, Vec<u8>)>, RpcError> {
        if self.fail_transport {
            return Err(RpcError::Transport("connection refused".into()));
        }
        let mut matched: Vec<(Address, Vec<u8>)> = self
            .accounts
            .iter()
            .filter(|(address, data)| {
                self.owners.get(address) == Some(program_id) && self.matches(data, filters)
            })
            .map(|(address, data)| (*address, data.clone()))
            .collect();
        matched.sort_by_key(|(address, _)| *address);
        Ok(matched)
    }

    async fn transaction(&self, signature: &str) -> Result<Option<TransactionRecord>, RpcError> {
        if self.fail_transport {
            return Err(RpcError::Transport("connection refused".into()));
        }
        Ok(self.transactions.get(signature).cloned())
    }

    async fn simulate(&self, instructions: &[Instruction]) -> Result<SimulationOutcome, RpcError> {
        if self.fail_transport {
            return Err(RpcError::Transport("connection refused".into()));
        }
        Ok(SimulationOutcome {
            err: None,
            logs: instructions
                .iter()
                .map(|ix| format!("Program {} invoke [1]", ix.program_id))
                .collect(),
            units_consumed: 1_400 * instructions.len() as u64,
        })
    }
}

/// A base SPL token account buffer with the given mint, owner, and balance.
pub fn token_account(mint: &Address, owner: &Address, amount: u64) -> Vec<u8> {
    let mut data = vec![0u8; 165];
    data[..32].copy_from_slice(mint.as_ref());
    data[32..64].copy_from_slice(owner.as_ref());
    data[64..72].copy_from_slice(&amount.to_le_bytes());
    data
}
