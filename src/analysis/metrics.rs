use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Baseline win rate used when no role average is available.
pub const DEFAULT_ROLE_WIN_RATE: f64 = 0.50;

// eSLG is normalized to a ~1.0 scale and hard-capped before blending.
const ESLG_NORM_DIVISOR: f64 = 150.0;
const ESLG_NORM_CAP: f64 = 1.5;
const OBP_WEIGHT: f64 = 0.6;
const SLG_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    /// Role name as the GRID Central Data API spells it.
    pub fn grid_name(&self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Adc => "adc",
            Role::Support => "support",
        }
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TOP" => Ok(Role::Top),
            "JG" | "JGL" | "JUNGLE" => Ok(Role::Jungle),
            "MID" | "MIDDLE" => Ok(Role::Mid),
            "ADC" | "BOT" | "BOTTOM" => Ok(Role::Adc),
            "SUP" | "SUPP" | "SUPPORT" | "UTILITY" => Ok(Role::Support),
            other => Err(AppError::InvalidRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Top => "TOP",
            Role::Jungle => "JG",
            Role::Mid => "MID",
            Role::Adc => "ADC",
            Role::Support => "SUP",
        };
        write!(f, "{}", s)
    }
}

/// Raw aggregate counts for one player over a window of series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStats {
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
    pub gold_earned: u64,
    pub damage_to_champions: u64,
    pub wins: u64,
    pub games_played: u64,
    pub role: Role,
}

/// Esports On-Base Percentage: (K + A) / (K + A + D).
/// Deaths count like outs, so the ratio lives in [0, 1].
pub fn eobp(stats: &PlayerStats) -> f64 {
    let total_interactions = stats.kills + stats.assists + stats.deaths;
    if total_interactions == 0 {
        return 0.0;
    }
    (stats.kills + stats.assists) as f64 / total_interactions as f64
}

/// Esports Slugging: damage to champions per gold earned, x100.
/// Typical pro range is 100-200; unbounded above.
pub fn eslg(stats: &PlayerStats) -> f64 {
    if stats.gold_earned == 0 {
        return 0.0;
    }
    stats.damage_to_champions as f64 / stats.gold_earned as f64 * 100.0
}

/// Esports Wins Above Replacement: win-rate delta over a role-average
/// baseline, scaled by games played. Negative below the baseline.
pub fn ewar(stats: &PlayerStats, role_avg_win_rate: f64) -> f64 {
    if stats.games_played == 0 {
        return 0.0;
    }
    let player_win_rate = stats.wins as f64 / stats.games_played as f64;
    (player_win_rate - role_avg_win_rate) * stats.games_played as f64
}

/// Composite score: 0.6 x eOBP + 0.4 x capped normalized eSLG.
/// Survival weighs more than flashy damage.
pub fn moneyball_score(stats: &PlayerStats) -> f64 {
    let obp = eobp(stats);
    let norm_slg = (eslg(stats) / ESLG_NORM_DIVISOR).min(ESLG_NORM_CAP);
    obp * OBP_WEIGHT + norm_slg * SLG_WEIGHT
}

/// Traditional KDA: (K + A) / D with deaths floored at 1.
pub fn kda(stats: &PlayerStats) -> f64 {
    (stats.kills + stats.assists) as f64 / stats.deaths.max(1) as f64
}

/// All four derived metrics for one stats snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoneyballMetrics {
    pub eobp: f64,
    pub eslg: f64,
    pub ewar: f64,
    pub score: f64,
}

impl MoneyballMetrics {
    pub fn compute(stats: &PlayerStats, role_avg_win_rate: f64) -> Self {
        MoneyballMetrics {
            eobp: eobp(stats),
            eslg: eslg(stats),
            ewar: ewar(stats, role_avg_win_rate),
            score: moneyball_score(stats),
        }
    }
}
