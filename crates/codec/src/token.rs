//! Minimal SPL token-account parsing.
//!
//! The payment verifier needs exactly three facts about a token account: its
//! mint, its owning wallet, and its balance. Those occupy the first 72 bytes
//! of the 165-byte SPL token account layout, which is identical between the
//! legacy token program and token-2022 base accounts.

use ghostspeak_types::error::CodecError;
use ghostspeak_types::Address;

use crate::wire::WireReader;

/// Byte length of a base SPL token account.
pub const TOKEN_ACCOUNT_LEN: usize = 165;

/// The fields of a token account this layer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccountState {
    /// The token mint this account holds.
    pub mint: Address,
    /// The wallet that owns this token account.
    pub owner: Address,
    /// The current balance, in the token's smallest unit.
    pub amount: u64,
}

impl TokenAccountState {
    /// Parses the leading fields of a token account buffer.
    ///
    /// Token-2022 accounts may carry extension bytes past the base layout;
    /// anything after the first [`TOKEN_ACCOUNT_LEN`] bytes is ignored.
    pub fn parse(data: &[u8]) -> Result<Self, CodecError> {
        let mut reader = WireReader::new(data);
        Ok(Self {
            mint: reader.read_address()?,
            owner: reader.read_address()?,
            amount: reader.read_u64()?,
        })
    }
}
