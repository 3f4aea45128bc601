//! The reputation registry's account records.

use crate::address::Address;
use serde::{Deserialize, Serialize};

/// Reputation halves after this many days of inactivity (when decay is on).
pub const DECAY_HALF_LIFE_DAYS: i64 = 90;
/// Decay never reduces a score below this floor.
pub const DECAY_MIN_SCORE: u16 = 100;
/// No decay is applied during the first period of inactivity.
pub const DECAY_GRACE_PERIOD_DAYS: i64 = 30;
/// Seconds per day, for decay arithmetic.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Component scores for reputation, each 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScores {
    /// Trustworthiness component.
    pub trust: u8,
    /// Output quality component.
    pub quality: u8,
    /// Reliability/uptime component.
    pub reliability: u8,
    /// Economic behavior component.
    pub economic: u8,
    /// Social behavior component.
    pub social: u8,
}

/// Aggregate vote and review counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationStats {
    /// Total votes received.
    pub total_votes: u32,
    /// Positive votes received.
    pub positive_votes: u32,
    /// Negative votes received.
    pub negative_votes: u32,
    /// Total reviews received.
    pub total_reviews: u32,
    /// Average review rating, 0-50 (rating * 10 for one decimal of precision).
    pub avg_review_rating: u8,
}

/// An agent's reputation record, derived at `["reputation", agent_address]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReputation {
    /// The agent's wallet address.
    pub agent_address: Address,
    /// Overall reputation score, 0-1000.
    pub overall_score: u16,
    /// Component scores.
    pub component_scores: ComponentScores,
    /// Vote and review counters.
    pub stats: ReputationStats,
    /// Merkle root over the agent's verified payment proofs.
    pub payment_proofs_merkle_root: [u8; 32],
    /// Last update timestamp.
    pub last_updated: i64,
    /// Derivation bump.
    pub bump: u8,
    /// Base score before any decay is applied.
    pub base_score: u16,
    /// Last activity timestamp (transaction, vote, ...).
    pub last_activity: i64,
    /// Whether time decay is enabled for this agent.
    pub decay_enabled: bool,
    /// Decay rate multiplier in basis points (10000 = full rate).
    pub decay_rate_bps: u16,
}

/// The reputation registry's authority singleton, derived at `["authority"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationAuthority {
    /// The wallet allowed to update reputations.
    pub authority: Address,
    /// Derivation bump.
    pub bump: u8,
}
