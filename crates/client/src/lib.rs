//! # GhostSpeak Client
//!
//! The composition layer of the protocol client: one façade per registry
//! program, each wiring address derivation, the wire codec, and a read-only
//! [`LedgerReader`] collaborator together, plus the payment verifier that
//! turns claimed token transfers into auditable [`PaymentProof`]s.
//!
//! All I/O is async and side-effect-free; no retries, no caching, no shared
//! mutable state. A failed RPC read surfaces once; callers own retry policy.
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

mod fetch;

pub mod facade;
pub mod payment;
pub mod recompute;
pub mod rpc;

pub use facade::identity::IdentityClient;
pub use facade::reputation::ReputationClient;
pub use facade::staking::StakingClient;
pub use facade::validation::ValidationClient;
pub use facade::vote::VoteClient;
pub use payment::{PaymentProof, PaymentVerifier, VerifyRequest};
pub use recompute::{RecomputeQueue, RecomputeReason, RecomputeRequest};
pub use rpc::{AccountFilter, LedgerReader, ParsedInstruction, SimulationOutcome, TransactionRecord};
