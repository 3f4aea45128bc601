//! The identity registry's agent identity record.

use crate::address::Address;
use serde::{Deserialize, Serialize};

/// Minimum stake amount: 0.1 SOL in lamports.
pub const MIN_STAKE_AMOUNT: u64 = 100_000_000;

/// Stake unlock period: 7 days in seconds.
pub const STAKE_UNLOCK_PERIOD: i64 = 7 * 24 * 60 * 60;

/// Maximum slash fraction in basis points (50%).
pub const MAX_SLASH_BPS: u16 = 5_000;

/// An agent's on-chain identity, derived at `["agent", agent_address]`.
///
/// Created by `register_agent`; the metadata URI points at off-chain
/// metadata (Arweave/IPFS) and the asset address links the identity to its
/// Metaplex Core NFT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentIdentity {
    /// The agent's wallet address (owner).
    pub agent_address: Address,
    /// Metaplex Core NFT asset address.
    pub asset_address: Address,
    /// URI pointing to off-chain metadata. At most 200 bytes.
    pub metadata_uri: String,
    /// Unix timestamp of registration.
    pub registration_timestamp: i64,
    /// Last time the agent was active (any instruction call).
    pub last_active_timestamp: i64,
    /// Total number of on-chain interactions.
    pub activity_count: u64,
    /// Whether the identity is active.
    pub is_active: bool,
    /// Amount of SOL staked as collateral, in lamports.
    pub staked_amount: u64,
    /// Timestamp when the stake can be unlocked (0 if not staking).
    pub stake_unlock_timestamp: i64,
    /// Number of times this agent has been slashed.
    pub slash_count: u32,
    /// Total amount slashed historically, in lamports.
    pub total_slashed: u64,
    /// Derivation bump.
    pub bump: u8,
}

impl AgentIdentity {
    /// Whether the agent currently holds at least the minimum collateral.
    pub fn has_minimum_stake(&self) -> bool {
        self.staked_amount >= MIN_STAKE_AMOUNT
    }

    /// Whether the stake's unlock period has elapsed.
    pub fn can_unlock_stake(&self, now: i64) -> bool {
        self.stake_unlock_timestamp > 0 && now >= self.stake_unlock_timestamp
    }

    /// Slash amount for a violation, on the deployed quadratic curve:
    /// `slash_bps = min(severity² / 10000, MAX_SLASH_BPS)` applied to the
    /// staked amount. A 5% violation costs ~0.25% of stake, a 70% violation
    /// the capped 50%.
    pub fn slash_amount(&self, violation_severity_bps: u16) -> u64 {
        let severity = u64::from(violation_severity_bps.min(10_000));
        let slash_bps = severity
            .saturating_mul(severity)
            .saturating_div(10_000)
            .min(u64::from(MAX_SLASH_BPS));
        self.staked_amount
            .checked_mul(slash_bps)
            .and_then(|v| v.checked_div(10_000))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_with_stake(staked_amount: u64) -> AgentIdentity {
        AgentIdentity {
            agent_address: Address::new([1; 32]),
            asset_address: Address::new([2; 32]),
            metadata_uri: "ipfs://agent".into(),
            registration_timestamp: 1_700_000_000,
            last_active_timestamp: 1_700_000_000,
            activity_count: 1,
            is_active: true,
            staked_amount,
            stake_unlock_timestamp: 0,
            slash_count: 0,
            total_slashed: 0,
            bump: 255,
        }
    }

    #[test]
    fn minimum_stake_boundary() {
        assert!(!identity_with_stake(MIN_STAKE_AMOUNT - 1).has_minimum_stake());
        assert!(identity_with_stake(MIN_STAKE_AMOUNT).has_minimum_stake());
    }

    #[test]
    fn quadratic_slash_curve() {
        let id = identity_with_stake(1_000_000_000);
        // 5% severity -> 0.25% slashed.
        assert_eq!(id.slash_amount(500), 2_500_000);
        // 70% severity squares past the cap and clamps at 50%.
        assert_eq!(id.slash_amount(7_000), 490_000_000);
        assert_eq!(id.slash_amount(10_000), 500_000_000);
        // Severity above 100% is treated as 100%.
        assert_eq!(id.slash_amount(u16::MAX), 500_000_000);
    }

    #[test]
    fn unlock_requires_nonzero_timestamp() {
        let mut id = identity_with_stake(0);
        assert!(!id.can_unlock_stake(i64::MAX));
        id.stake_unlock_timestamp = 100;
        assert!(!id.can_unlock_stake(99));
        assert!(id.can_unlock_stake(100));
    }
}
