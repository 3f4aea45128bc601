//! Ghost Score tier bands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bronze starts here.
pub const BRONZE_THRESHOLD: u16 = 400;
/// Silver starts here.
pub const SILVER_THRESHOLD: u16 = 600;
/// Gold starts here.
pub const GOLD_THRESHOLD: u16 = 750;
/// Platinum starts here.
pub const PLATINUM_THRESHOLD: u16 = 900;

/// The named band a Ghost Score falls into.
///
/// One canonical threshold table (400/600/750/900) applies everywhere a tier
/// is displayed or compared; scores below bronze are explicitly unranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Below every threshold.
    Unranked,
    /// 400-599.
    Bronze,
    /// 600-749.
    Silver,
    /// 750-899.
    Gold,
    /// 900 and above.
    Platinum,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Unranked => "unranked",
            Tier::Bronze => "bronze",
            Tier::Silver => "silver",
            Tier::Gold => "gold",
            Tier::Platinum => "platinum",
        };
        f.write_str(name)
    }
}

/// Maps a Ghost Score to its tier.
pub fn tier_for_score(score: u16) -> Tier {
    match score {
        s if s >= PLATINUM_THRESHOLD => Tier::Platinum,
        s if s >= GOLD_THRESHOLD => Tier::Gold,
        s if s >= SILVER_THRESHOLD => Tier::Silver,
        s if s >= BRONZE_THRESHOLD => Tier::Bronze,
        _ => Tier::Unranked,
    }
}
