//! Time decay of reputation scores.
//!
//! Mirrors the deployed decay arithmetic exactly so the dashboard can show
//! an agent's effective score without a chain round-trip: exponential decay
//! with a 90-day half-life approximated by integer halvings, a 30-day grace
//! period, a floor of 100, and at most 10 halvings.

use ghostspeak_types::records::reputation::{
    DECAY_GRACE_PERIOD_DAYS, DECAY_HALF_LIFE_DAYS, DECAY_MIN_SCORE, SECONDS_PER_DAY,
};
use ghostspeak_types::records::AgentReputation;

/// The decayed base score at time `now`. Returns the base score unchanged
/// when decay is disabled or the agent is within the grace period.
pub fn decayed_score(reputation: &AgentReputation, now: i64) -> u16 {
    if !reputation.decay_enabled {
        return reputation.base_score;
    }

    let days_inactive = now
        .saturating_sub(reputation.last_activity)
        .saturating_div(SECONDS_PER_DAY);
    if days_inactive <= DECAY_GRACE_PERIOD_DAYS {
        return reputation.base_score;
    }

    let effective_days = days_inactive.saturating_sub(DECAY_GRACE_PERIOD_DAYS);
    let decay_multiplier = i64::from(reputation.decay_rate_bps.clamp(100, 10_000));
    let periods = effective_days
        .saturating_mul(decay_multiplier)
        .saturating_div(DECAY_HALF_LIFE_DAYS.saturating_mul(10_000));

    let mut decayed = i64::from(reputation.base_score);
    for _ in 0..periods.min(10) {
        decayed = decayed.saturating_div(2);
    }

    (decayed as u16).max(DECAY_MIN_SCORE)
}

/// The score the UI should display: decayed when decay is enabled, the
/// plain overall score otherwise.
pub fn effective_score(reputation: &AgentReputation, now: i64) -> u16 {
    if reputation.decay_enabled {
        decayed_score(reputation, now)
    } else {
        reputation.overall_score
    }
}
