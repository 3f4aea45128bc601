//! The read-only ledger collaborator.
//!
//! Everything this layer knows about the chain arrives through
//! [`LedgerReader`]. The transport (HTTP, websocket, a recorded fixture) is
//! the caller's choice; the trait only fixes the read surface: single
//! accounts, filtered program scans, parsed transactions, and simulation of
//! unsent instructions. Implementations must not retry; a transport error
//! is reported once and owned by the caller.

use async_trait::async_trait;
use ghostspeak_codec::Instruction;
use ghostspeak_types::error::RpcError;
use ghostspeak_types::Address;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A byte-level filter for bulk account scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountFilter {
    /// Keep accounts whose data is exactly this many bytes.
    DataSize(u64),
    /// Keep accounts whose data equals `bytes` at `offset`.
    MemCmp {
        /// Byte offset the comparison starts at.
        offset: usize,
        /// The bytes that must match.
        bytes: Vec<u8>,
    },
}

/// One instruction of a fetched transaction, in parsed form.
///
/// The verifier only distinguishes the two token-transfer shapes; everything
/// else collapses to `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParsedInstruction {
    /// A plain SPL token transfer.
    TokenTransfer {
        /// The program that executed the transfer.
        program_id: Address,
        /// Source token account.
        source: Address,
        /// Destination token account.
        destination: Address,
        /// The authority that signed the transfer.
        authority: Address,
        /// Amount moved, in the token's smallest unit.
        amount: u64,
    },
    /// A mint-checked SPL token transfer.
    TokenTransferChecked {
        /// The program that executed the transfer.
        program_id: Address,
        /// Source token account.
        source: Address,
        /// Destination token account.
        destination: Address,
        /// The mint the instruction declares.
        mint: Address,
        /// The authority that signed the transfer.
        authority: Address,
        /// Amount moved, in the token's smallest unit.
        amount: u64,
        /// The mint's decimals as declared by the instruction.
        decimals: u8,
    },
    /// Any other instruction.
    Other {
        /// The program the instruction targets.
        program_id: Address,
    },
}

/// A fetched transaction with parsed instructions and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// The transaction signature.
    pub signature: String,
    /// The slot the transaction landed in.
    pub slot: u64,
    /// Block time, when the node knows it.
    pub block_time: Option<i64>,
    /// The on-chain execution error, if the transaction failed.
    pub err: Option<String>,
    /// Top-level instructions, in execution order.
    pub instructions: Vec<ParsedInstruction>,
    /// Inner (cross-program) instructions, flattened in execution order.
    pub inner_instructions: Vec<ParsedInstruction>,
}

/// Result of simulating an unsent instruction set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// The simulated execution error, if any.
    pub err: Option<String>,
    /// Program log lines emitted during simulation.
    pub logs: Vec<String>,
    /// Compute units the simulation consumed.
    pub units_consumed: u64,
}

/// Read-only chain access. See the module docs for the contract.
#[async_trait]
pub trait LedgerReader: Send + Sync {
    /// Fetches one account's data, `None` if the account does not exist.
    async fn account(&self, address: &Address) -> Result<Option<Vec<u8>>, RpcError>;

    /// Fetches all accounts owned by `program_id` that pass every filter.
    async fn program_accounts(
        &self,
        program_id: &Address,
        filters: &[AccountFilter],
    ) -> Result<Vec<(Address, Vec<u8>)>, RpcError>;

    /// Fetches a transaction by signature, parsed. `None` if unknown.
    async fn transaction(&self, signature: &str) -> Result<Option<TransactionRecord>, RpcError>;

    /// Simulates an unsent instruction set against current state.
    async fn simulate(&self, instructions: &[Instruction]) -> Result<SimulationOutcome, RpcError>;
}

#[async_trait]
impl<T: LedgerReader + ?Sized> LedgerReader for Arc<T> {
    async fn account(&self, address: &Address) -> Result<Option<Vec<u8>>, RpcError> {
        (**self).account(address).await
    }

    async fn program_accounts(
        &self,
        program_id: &Address,
        filters: &[AccountFilter],
    ) -> Result<Vec<(Address, Vec<u8>)>, RpcError> {
        (**self).program_accounts(program_id, filters).await
    }

    async fn transaction(&self, signature: &str) -> Result<Option<TransactionRecord>, RpcError> {
        (**self).transaction(signature).await
    }

    async fn simulate(&self, instructions: &[Instruction]) -> Result<SimulationOutcome, RpcError> {
        (**self).simulate(instructions).await
    }
}
