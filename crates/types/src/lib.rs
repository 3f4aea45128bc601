#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # GhostSpeak Types
//!
//! This crate is the foundational library for the GhostSpeak protocol client,
//! containing all core data structures, error types, and configuration
//! objects shared by the derivation, codec, scoring, and client crates.
//!
//! ## Architectural Role
//!
//! As the base crate, `ghostspeak-types` has minimal dependencies and is
//! itself a dependency for every other crate in the workspace. This structure
//! prevents circular dependencies and provides a stable, canonical definition
//! for shared types like [`Address`], the account-record structs, and the
//! error enums.

/// The 32-byte on-chain address type and its base58 text form.
pub mod address;
/// Network selection and the immutable per-program configuration registry.
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
/// Account-record structs and wire enums for the five registry programs.
pub mod records;
/// Seed-tag constants used for deterministic address derivation.
pub mod seeds;

pub use address::Address;
pub use config::{Network, ProgramRegistry};

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::ClientError> = std::result::Result<T, E>;
