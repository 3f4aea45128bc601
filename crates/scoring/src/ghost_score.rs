//! The 0-1000 Ghost Score aggregate.

use serde::{Deserialize, Serialize};

/// The staking bonus contribution is capped here.
pub const MAX_STAKING_BONUS: f64 = 100.0;

/// Diminishing-returns bonus from token stakes:
/// `min(100, log2(total_stake_weight + 1) * sqrt(unique_stakers) * (avg_staker_score / 1000 + 0.5))`.
///
/// Stake value enters logarithmically, staker diversity by square root, and
/// the stakers' own average score scales the whole term between 0.5x and
/// 1.5x. A whale cannot buy what a crowd of reputable stakers confers.
pub fn staking_trust_bonus(
    total_stake_weight: u64,
    unique_stakers: u32,
    avg_staker_score: u16,
) -> f64 {
    if unique_stakers == 0 {
        return 0.0;
    }
    let weight_term = ((total_stake_weight as f64) + 1.0).log2();
    let diversity_term = f64::from(unique_stakers).sqrt();
    let quality_term = f64::from(avg_staker_score) / 1000.0 + 0.5;
    (weight_term * diversity_term * quality_term).min(MAX_STAKING_BONUS)
}

/// The inputs the Ghost Score is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GhostScoreInputs {
    /// The agent's on-chain reputation score, 0-1000.
    pub reputation: u16,
    /// Total peer votes received.
    pub total_votes: u32,
    /// Average quality across votes and ratings, 0-100.
    pub average_quality: f64,
    /// Staking bonus, normally from [`staking_trust_bonus`].
    pub staking_bonus: f64,
}

/// Computes the Ghost Score:
/// `round(min((min(rep, 1000) + min(votes * 5, 100) + min(staking, 100)) * quality / 100, 1000))`.
pub fn ghost_score(inputs: &GhostScoreInputs) -> u16 {
    let base = f64::from(inputs.reputation.min(1000));
    let vote_bonus = f64::from((inputs.total_votes.saturating_mul(5)).min(100));
    let staking_bonus = inputs.staking_bonus.clamp(0.0, MAX_STAKING_BONUS);
    let quality_factor = (inputs.average_quality / 100.0).clamp(0.0, 1.0);

    let raw = (base + vote_bonus + staking_bonus) * quality_factor;
    raw.min(1000.0).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_boundary_cases() {
        // round((500 + 50 + 0) * 0.8) = 440.
        let mid = GhostScoreInputs {
            reputation: 500,
            total_votes: 10,
            average_quality: 80.0,
            staking_bonus: 0.0,
        };
        assert_eq!(ghost_score(&mid), 440);

        // Everything maxed caps at 1000.
        let max = GhostScoreInputs {
            reputation: 1000,
            total_votes: 100,
            average_quality: 100.0,
            staking_bonus: 100.0,
        };
        assert_eq!(ghost_score(&max), 1000);
    }

    #[test]
    fn vote_bonus_saturates_at_twenty_votes() {
        let at_twenty = GhostScoreInputs {
            reputation: 0,
            total_votes: 20,
            average_quality: 100.0,
            staking_bonus: 0.0,
        };
        let at_two_hundred = GhostScoreInputs {
            total_votes: 200,
            ..at_twenty
        };
        assert_eq!(ghost_score(&at_twenty), 100);
        assert_eq!(ghost_score(&at_twenty), ghost_score(&at_two_hundred));
    }

    #[test]
    fn zero_quality_zeroes_the_score() {
        let inputs = GhostScoreInputs {
            reputation: 1000,
            total_votes: 100,
            average_quality: 0.0,
            staking_bonus: 100.0,
        };
        assert_eq!(ghost_score(&inputs), 0);
    }

    #[test]
    fn staking_bonus_zero_without_stakers() {
        assert_eq!(staking_trust_bonus(1_000_000, 0, 900), 0.0);
    }

    #[test]
    fn staking_bonus_rewards_diversity_over_size() {
        // Same total weight: nine stakers beat one.
        let solo = staking_trust_bonus(4095, 1, 500);
        let crowd = staking_trust_bonus(4095, 9, 500);
        assert!(crowd > solo);
        // log2(4096) = 12, sqrt(9) = 3, quality 1.0 -> 36.
        assert!((crowd - 36.0).abs() < 1e-9);
    }

    #[test]
    fn staking_bonus_caps_at_one_hundred() {
        assert_eq!(staking_trust_bonus(u64::MAX, 10_000, 1000), 100.0);
    }

    #[test]
    fn staker_quality_scales_between_half_and_one_and_a_half() {
        let low = staking_trust_bonus(4095, 1, 0);
        let high = staking_trust_bonus(4095, 1, 1000);
        assert!((low - 6.0).abs() < 1e-9); // 12 * 1 * 0.5
        assert!((high - 18.0).abs() < 1e-9); // 12 * 1 * 1.5
    }
}
