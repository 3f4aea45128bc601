//! The outbound instruction shape.
//!
//! An instruction is a byte payload plus an ordered account list. This layer
//! only builds instructions; signing and submission belong to the caller.

use ghostspeak_types::Address;
use serde::{Deserialize, Serialize};

/// One account an instruction touches, with its access flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMeta {
    /// The account's address.
    pub address: Address,
    /// Whether the account must sign the transaction.
    pub is_signer: bool,
    /// Whether the instruction may mutate the account.
    pub is_writable: bool,
}

impl AccountMeta {
    /// A read-only, non-signing account.
    pub fn readonly(address: Address) -> Self {
        Self {
            address,
            is_signer: false,
            is_writable: false,
        }
    }

    /// A writable, non-signing account.
    pub fn writable(address: Address) -> Self {
        Self {
            address,
            is_signer: false,
            is_writable: true,
        }
    }

    /// A read-only signer.
    pub fn signer(address: Address) -> Self {
        Self {
            address,
            is_signer: true,
            is_writable: false,
        }
    }

    /// A writable signer (typically the fee payer).
    pub fn writable_signer(address: Address) -> Self {
        Self {
            address,
            is_signer: true,
            is_writable: true,
        }
    }
}

/// A fully built instruction, ready to be signed and submitted by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// The program that will execute this instruction.
    pub program_id: Address,
    /// The accounts it touches, in the program's declared order.
    pub accounts: Vec<AccountMeta>,
    /// The discriminator-prefixed payload bytes.
    pub data: Vec<u8>,
}
