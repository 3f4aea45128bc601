//! The token staking program's account records.

use crate::address::Address;
use serde::{Deserialize, Serialize};

/// Default minimum stake (1 token at 6 decimals).
pub const DEFAULT_MIN_STAKE: u64 = 1_000_000;
/// Default lock period: 7 days.
pub const DEFAULT_LOCK_PERIOD: i64 = 7 * 24 * 60 * 60;
/// Maximum configurable lock period: 365 days.
pub const MAX_LOCK_PERIOD: i64 = 365 * 24 * 60 * 60;

/// What a token stake endorses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StakeCategory {
    /// General endorsement.
    #[default]
    General,
    /// High-quality outputs.
    Quality,
    /// Dependable and responsive.
    Reliability,
    /// Verified capabilities.
    Capability,
    /// Security best practices.
    Security,
    /// A tag byte outside the known range, preserved verbatim.
    Unknown(u8),
}

impl StakeCategory {
    /// Decodes a wire tag byte.
    pub fn from_wire(tag: u8) -> Self {
        match tag {
            0 => Self::General,
            1 => Self::Quality,
            2 => Self::Reliability,
            3 => Self::Capability,
            4 => Self::Security,
            other => Self::Unknown(other),
        }
    }

    /// Encodes back to the wire tag byte. `Unknown` round-trips its raw byte.
    pub fn to_wire(self) -> u8 {
        match self {
            Self::General => 0,
            Self::Quality => 1,
            Self::Reliability => 2,
            Self::Capability => 3,
            Self::Security => 4,
            Self::Unknown(raw) => raw,
        }
    }
}

/// A staking vault for one (target agent, token mint) pair, derived at
/// `["vault", target_agent, token_mint]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingVault {
    /// The agent who receives the endorsements.
    pub target_agent: Address,
    /// The SPL token mint this vault accepts.
    pub token_mint: Address,
    /// The vault-controlled token account holding stakes.
    pub vault_token_account: Address,
    /// Minimum stake in the token's smallest unit.
    pub min_stake_amount: u64,
    /// Lock period in seconds.
    pub lock_period_seconds: i64,
    /// Weight multiplier for trust calculation (100 = 1x).
    pub weight_multiplier: u16,
    /// Total tokens staked in this vault.
    pub total_staked: u64,
    /// Number of stakers.
    pub total_stakers: u32,
    /// Who may modify vault settings.
    pub authority: Address,
    /// Whether the vault accepts new stakes.
    pub is_active: bool,
    /// Whether the platform has verified this vault.
    pub is_verified: bool,
    /// Creation timestamp.
    pub created_at: i64,
    /// Last update timestamp.
    pub updated_at: i64,
    /// Derivation bump.
    pub bump: u8,
    /// The vault token account's derivation bump.
    pub vault_bump: u8,
}

/// One staker's position in a vault, derived at
/// `["stake", vault_address, staker]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakePosition {
    /// The vault this position belongs to.
    pub vault: Address,
    /// The staking wallet.
    pub staker: Address,
    /// The endorsed agent.
    pub target_agent: Address,
    /// The staked token's mint.
    pub token_mint: Address,
    /// Amount staked.
    pub amount: u64,
    /// What the stake endorses.
    pub category: StakeCategory,
    /// Trust weight computed when the stake was placed.
    pub trust_weight: u64,
    /// When the stake was created.
    pub staked_at: i64,
    /// When the stake can be withdrawn.
    pub locked_until: i64,
    /// When the stake was withdrawn (0 if still active).
    pub unstaked_at: i64,
    /// Whether the stake is active.
    pub is_active: bool,
    /// Whether the stake has been slashed.
    pub is_slashed: bool,
    /// Derivation bump.
    pub bump: u8,
}

impl StakePosition {
    /// Whether the lock period has elapsed for an active stake.
    pub fn can_unlock(&self, now: i64) -> bool {
        self.is_active && now >= self.locked_until
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stake_category_wire_round_trip() {
        for tag in 0u8..=255 {
            assert_eq!(StakeCategory::from_wire(tag).to_wire(), tag);
        }
    }

    #[test]
    fn inactive_stake_never_unlocks() {
        let position = StakePosition {
            vault: Address::new([1; 32]),
            staker: Address::new([2; 32]),
            target_agent: Address::new([3; 32]),
            token_mint: Address::new([4; 32]),
            amount: 1_000_000,
            category: StakeCategory::General,
            trust_weight: 0,
            staked_at: 0,
            locked_until: 50,
            unstaked_at: 60,
            is_active: false,
            is_slashed: false,
            bump: 254,
        };
        assert!(!position.can_unlock(i64::MAX));
    }
}
