use serde::{Deserialize, Serialize};

use crate::domain::state::Team;

pub const PLAYERS: usize = 4;
pub const TRICKS_PER_DEAL: u8 = 10;
pub const TOTAL_POINTS: u8 = 120;
pub const DEFAULT_MATCH_DEALS: u8 = 4;

/// Victory credits handed to the opponents of a seat caught revoking.
pub const REVOKE_PENALTY: u16 = 4;

/// Match-level award for a finished deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DealAward {
    /// `team` takes `credits` victory credits.
    Credited { team: Team, credits: u16 },
    /// 60/60: no rule decides it, nobody is credited.
    Ambiguous,
}

/// Victory credits for the winning team, by the loser's point total.
///
/// loser >= 30 → 1, 0 < loser < 30 → 2, loser == 0 → 4.
pub fn victory_credits(loser_points: u8) -> u16 {
    match loser_points {
        0 => 4,
        1..=29 => 2,
        _ => 1,
    }
}

/// Decide the award for a completed deal from per-team points.
pub fn award_for(points: [u8; 2]) -> DealAward {
    let [one, two] = points;
    if one == two {
        return DealAward::Ambiguous;
    }
    let (team, loser) = if one > two {
        (Team::One, two)
    } else {
        (Team::Two, one)
    };
    DealAward::Credited {
        team,
        credits: victory_credits(loser),
    }
}
