//! Vote and stake weight formulas.

use ghostspeak_types::records::VoteType;

/// Lamports per native token.
const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Payment-scaled weight of a peer vote, where 100 = 1.0x.
///
/// `100 + min(100, floor(sol * 100))`: every vote starts at 1.0x and the
/// transferred amount adds up to another 1.0x, saturating at 2.0x for
/// payments of one native token or more.
pub fn vote_weight(lamports: u64) -> u16 {
    let amount_bonus = (lamports / (LAMPORTS_PER_SOL / 100)).min(100);
    (100 + amount_bonus) as u16
}

/// Trust weight of a token stake:
/// `floor(log2(amount + 1) * weight_multiplier / 100)`.
///
/// Logarithmic in the amount, so doubling a stake adds a constant rather
/// than doubling influence.
pub fn trust_weight(staked_amount: u64, weight_multiplier: u16) -> u64 {
    let base = ((staked_amount as f64) + 1.0).log2();
    (base * f64::from(weight_multiplier) / 100.0).floor() as u64
}

/// Social vote weight of a voter, linear in the voter's own Ghost Score:
/// `score / 100`.
pub fn reputation_vote_weight(voter_ghost_score: u16) -> f64 {
    f64::from(voter_ghost_score) / 100.0
}

/// Weight of the auto-created trust relationship toward the subject of a
/// positive vote: `min(vote_weight * 10, 100)`.
pub fn direct_trust_weight(vote_weight: f64) -> f64 {
    (vote_weight * 10.0).min(100.0)
}

/// The trust relationship a vote creates toward its subject, if any.
/// Only positive vote types create one; downvotes and neutral votes affect
/// the tally without minting trust.
pub fn relationship_weight(vote_type: VoteType, voter_ghost_score: u16) -> Option<f64> {
    vote_type
        .is_positive()
        .then(|| direct_trust_weight(reputation_vote_weight(voter_ghost_score)))
}
