//! # GhostSpeak Wire Codec
//!
//! Encodes outgoing instruction payloads and decodes incoming account
//! buffers for the five registry programs. The wire format is a fixed
//! external contract: little-endian integers with no padding, `u32`
//! length-prefixed strings and vectors, single-byte enum tags, and an 8-byte
//! leading discriminator on every account and instruction.
//!
//! Decoding is **total**: any malformed, truncated, or short buffer maps to
//! a [`CodecError`](ghostspeak_types::error::CodecError) instead of a panic.
//! Whether that error means "corrupt" or "never existed" is decided at the
//! facade boundary, not here.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::indexing_slicing
    )
)]
#![forbid(unsafe_code)]

pub mod accounts;
pub mod discriminator;
pub mod instruction;
pub mod instructions;
pub mod token;
pub mod wire;

pub use accounts::AccountRecord;
pub use instruction::{AccountMeta, Instruction};
pub use wire::{WireReader, WireWriter};
