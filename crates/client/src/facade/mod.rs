//! Protocol façades, one per registry program.
//!
//! Each client composes the same three pieces: typed address derivation,
//! the wire codec, and a [`LedgerReader`](crate::rpc::LedgerReader).
//! `build_*` methods are pure: they derive addresses and encode payloads
//! but never touch the network. `get`-style methods read and decode,
//! returning `Ok(None)` for anything that is absent or undecodable and
//! propagating transport errors untouched.

/// Identity registry client.
pub mod identity;
/// Reputation registry client (including multisig reads).
pub mod reputation;
/// Token staking client.
pub mod staking;
/// Validation registry client.
pub mod validation;
/// Vote registry client.
pub mod vote;
