//! Core error types for the GhostSpeak protocol client.

use crate::address::Address;
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors from parsing an [`Address`](crate::Address) out of text.
#[derive(Debug, Error)]
pub enum AddressParseError {
    /// The input was not valid base58.
    #[error("invalid base58: {0}")]
    InvalidBase58(String),
    /// The decoded bytes were not exactly 32 bytes long.
    #[error("decoded {got} bytes, expected 32")]
    InvalidLength {
        /// The number of bytes the input decoded to.
        got: usize,
    },
}

/// Errors from deterministic address derivation.
///
/// Derivation never fails for valid seed lists in practice; the exhaustion
/// case exists because the trailing-nonce search is finite.
#[derive(Debug, Error)]
pub enum DeriveError {
    /// No nonce in `255..=0` produced an off-curve address. Statistically
    /// unreachable (each nonce fails with probability ~1/2).
    #[error("no valid off-curve address found for the given seeds")]
    Exhausted,
    /// A single seed exceeded the 32-byte limit the host chain's derivation
    /// enforces.
    #[error("seed {index} is {len} bytes, maximum is 32")]
    SeedTooLong {
        /// Position of the offending seed in the seed list.
        index: usize,
        /// Its length in bytes.
        len: usize,
    },
    /// The seed list exceeded the 16-entry limit the host chain's derivation
    /// enforces.
    #[error("{count} seeds given, maximum is 16")]
    TooManySeeds {
        /// The number of seeds supplied.
        count: usize,
    },
}

impl ErrorCode for DeriveError {
    fn code(&self) -> &'static str {
        match self {
            Self::Exhausted => "DERIVE_EXHAUSTED",
            Self::SeedTooLong { .. } => "DERIVE_SEED_TOO_LONG",
            Self::TooManySeeds { .. } => "DERIVE_TOO_MANY_SEEDS",
        }
    }
}

/// Errors from decoding account buffers or encoding instruction payloads.
///
/// Decode is total: every malformed input maps to one of these variants, and
/// the facade layer converts them into "record absent" before they reach
/// external callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer ended before a fixed-width read could complete.
    #[error("short buffer: needed {needed} bytes at offset {offset}, have {have}")]
    ShortBuffer {
        /// Bytes the read required.
        needed: usize,
        /// Offset the read started at.
        offset: usize,
        /// Bytes remaining in the buffer.
        have: usize,
    },
    /// The leading 8 bytes did not match the expected record discriminator.
    #[error("account discriminator mismatch")]
    BadDiscriminator,
    /// A length prefix declared more bytes than the buffer holds.
    #[error("declared length {declared} exceeds remaining {available} bytes")]
    LengthOverflow {
        /// The length the prefix declared.
        declared: usize,
        /// Bytes actually remaining.
        available: usize,
    },
    /// A string field held bytes that were not valid UTF-8.
    #[error("string field is not valid UTF-8")]
    InvalidUtf8,
    /// A field violated a documented bound (e.g. a string above its maximum
    /// length) while encoding.
    #[error("field {field} out of bounds: {reason}")]
    FieldOutOfBounds {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ErrorCode for CodecError {
    fn code(&self) -> &'static str {
        match self {
            Self::ShortBuffer { .. } => "CODEC_SHORT_BUFFER",
            Self::BadDiscriminator => "CODEC_BAD_DISCRIMINATOR",
            Self::LengthOverflow { .. } => "CODEC_LENGTH_OVERFLOW",
            Self::InvalidUtf8 => "CODEC_INVALID_UTF8",
            Self::FieldOutOfBounds { .. } => "CODEC_FIELD_OUT_OF_BOUNDS",
        }
    }
}

/// Transport-level errors from the read-only RPC collaborator.
///
/// These propagate to callers unmodified; this layer performs no retries.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The transport failed (connection refused, timeout, HTTP error, ...).
    #[error("rpc transport error: {0}")]
    Transport(String),
    /// The node answered, but the response could not be interpreted.
    #[error("invalid rpc response: {0}")]
    InvalidResponse(String),
}

impl ErrorCode for RpcError {
    fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "RPC_TRANSPORT",
            Self::InvalidResponse(_) => "RPC_INVALID_RESPONSE",
        }
    }
}

/// Explicit, reason-coded rejections from payment verification.
///
/// Unlike decode failures these are never collapsed into "absent": financial
/// correctness requires an auditable reason for every rejected proof.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The transaction id could not be found on chain.
    #[error("transaction not found")]
    TransactionNotFound,
    /// The transaction exists but its on-chain execution failed.
    #[error("transaction failed on chain: {0}")]
    TransactionFailed(String),
    /// No token-transfer instruction matched in the transaction.
    #[error("no matching token transfer found in transaction")]
    NoTransferFound,
    /// The resolved source owner is not the expected payer.
    #[error("payer mismatch: expected {expected}, found {found}")]
    PayerMismatch {
        /// The payer the caller claimed.
        expected: Address,
        /// The owner actually resolved from the source token account.
        found: Address,
    },
    /// The resolved destination owner is not the expected recipient.
    #[error("recipient mismatch: expected {expected}, found {found}")]
    RecipientMismatch {
        /// The recipient the caller claimed.
        expected: Address,
        /// The owner actually resolved from the destination token account.
        found: Address,
    },
    /// The transferred amount was below the required minimum.
    #[error("amount too low: required at least {required}, transferred {actual}")]
    AmountTooLow {
        /// The minimum the caller required.
        required: u64,
        /// The amount the transaction actually moved.
        actual: u64,
    },
    /// The verifier could not reach or interpret the ledger.
    #[error(transparent)]
    Rpc(#[from] RpcError),
}

impl ErrorCode for VerifyError {
    fn code(&self) -> &'static str {
        match self {
            Self::TransactionNotFound => "VERIFY_TX_NOT_FOUND",
            Self::TransactionFailed(_) => "VERIFY_TX_FAILED",
            Self::NoTransferFound => "VERIFY_NO_TRANSFER",
            Self::PayerMismatch { .. } => "VERIFY_PAYER_MISMATCH",
            Self::RecipientMismatch { .. } => "VERIFY_RECIPIENT_MISMATCH",
            Self::AmountTooLow { .. } => "VERIFY_AMOUNT_TOO_LOW",
            Self::Rpc(e) => e.code(),
        }
    }
}

/// Umbrella error for operations that can fail at more than one layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Address derivation failed.
    #[error(transparent)]
    Derive(#[from] DeriveError),
    /// Wire encoding or decoding failed.
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// The RPC collaborator failed.
    #[error(transparent)]
    Rpc(#[from] RpcError),
}

impl ErrorCode for ClientError {
    fn code(&self) -> &'static str {
        match self {
            Self::Derive(e) => e.code(),
            Self::Codec(e) => e.code(),
            Self::Rpc(e) => e.code(),
        }
    }
}
