//! # GhostSpeak Scoring
//!
//! The deterministic numeric functions behind every trust figure the
//! dashboard displays: endpoint consensus scores, payment-scaled vote
//! weights, staking trust weights, the staking bonus, the 0-1000 Ghost
//! Score, tier mapping, and reputation decay.
//!
//! Everything here is pure arithmetic: no I/O, no clocks, no randomness.
//! Callers pass decoded records (or fields from them) in and get numbers
//! out; two calls with the same inputs always agree, which is what lets the
//! hosted dashboard recompute any score from chain state alone.
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

pub mod consensus;
pub mod decay;
pub mod ghost_score;
pub mod tier;
pub mod weights;

pub use consensus::{consensus_score, meets_stamp_requirement};
pub use decay::effective_score;
pub use ghost_score::{ghost_score, staking_trust_bonus, GhostScoreInputs};
pub use tier::{tier_for_score, Tier};
pub use weights::{
    direct_trust_weight, relationship_weight, reputation_vote_weight, trust_weight, vote_weight,
};
