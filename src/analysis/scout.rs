use std::cmp::Ordering;
use std::collections::HashMap;

use super::aggregate::{Form, PlayerRecord};
use super::metrics::{self, MoneyballMetrics, PlayerStats, Role, DEFAULT_ROLE_WIN_RATE};

/// A player's Moneyball rank must beat their KDA rank by this many
/// places before the board calls them a hidden gem.
const UNDERVALUED_GAP: usize = 2;

/// Per-role average win rates computed from the scouted pool itself.
/// Roles absent from the pool fall back to the league default.
#[derive(Debug, Default)]
pub struct RoleAverages {
    totals: HashMap<Role, (u64, u64)>,
}

impl RoleAverages {
    pub fn from_pool<'a, I>(pool: I) -> Self
    where
        I: IntoIterator<Item = &'a PlayerStats>,
    {
        let mut totals: HashMap<Role, (u64, u64)> = HashMap::new();
        for stats in pool {
            let entry = totals.entry(stats.role).or_insert((0, 0));
            entry.0 += stats.wins;
            entry.1 += stats.games_played;
        }
        RoleAverages { totals }
    }

    pub fn for_role(&self, role: Role) -> f64 {
        match self.totals.get(&role) {
            Some((wins, games)) if *games > 0 => *wins as f64 / *games as f64,
            _ => DEFAULT_ROLE_WIN_RATE,
        }
    }
}

/// One fully aggregated player, ready for scoring.
#[derive(Debug, Clone)]
pub struct ScoutedPlayer {
    pub id: String,
    pub nickname: String,
    pub team: Option<String>,
    pub country: Option<String>,
    pub stats: PlayerStats,
    pub record: PlayerRecord,
    pub form: Form,
    pub series_analyzed: usize,
}

/// A board row: player plus metrics and both rank views.
#[derive(Debug, Clone)]
pub struct ScoutEntry {
    pub player: ScoutedPlayer,
    pub metrics: MoneyballMetrics,
    pub kda: f64,
    pub moneyball_rank: usize,
    pub traditional_rank: usize,
}

impl ScoutEntry {
    pub fn is_undervalued(&self) -> bool {
        self.traditional_rank >= self.moneyball_rank + UNDERVALUED_GAP
    }
}

/// Score the pool and order it by Moneyball score (eOBP breaks ties).
/// Every entry also receives its rank under the traditional KDA view so
/// the two boards can disagree visibly.
pub fn rank_players(pool: Vec<ScoutedPlayer>, averages: &RoleAverages) -> Vec<ScoutEntry> {
    let mut entries: Vec<ScoutEntry> = pool
        .into_iter()
        .map(|p| {
            let m = MoneyballMetrics::compute(&p.stats, averages.for_role(p.stats.role));
            let kda = metrics::kda(&p.stats);
            ScoutEntry {
                player: p,
                metrics: m,
                kda,
                moneyball_rank: 0,
                traditional_rank: 0,
            }
        })
        .collect();

    let mut kda_order: Vec<usize> = (0..entries.len()).collect();
    kda_order.sort_by(|&a, &b| {
        entries[b]
            .kda
            .partial_cmp(&entries[a].kda)
            .unwrap_or(Ordering::Equal)
    });
    for (rank, idx) in kda_order.into_iter().enumerate() {
        entries[idx].traditional_rank = rank + 1;
    }

    entries.sort_by(|a, b| {
        b.metrics
            .score
            .partial_cmp(&a.metrics.score)
            .unwrap_or(Ordering::Equal)
            .then(
                b.metrics
                    .eobp
                    .partial_cmp(&a.metrics.eobp)
                    .unwrap_or(Ordering::Equal),
            )
    });
    for (rank, entry) in entries.iter_mut().enumerate() {
        entry.moneyball_rank = rank + 1;
    }

    entries
}

pub fn undervalued(entries: &[ScoutEntry]) -> Vec<&ScoutEntry> {
    entries.iter().filter(|e| e.is_undervalued()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advantage {
    Left,
    Right,
    Even,
}

#[derive(Debug, Clone)]
pub struct MetricComparison {
    pub metric: &'static str,
    pub left: f64,
    pub right: f64,
    pub advantage: Advantage,
}

#[derive(Debug, Clone)]
pub struct Comparison {
    pub rows: Vec<MetricComparison>,
    pub overall: Advantage,
}

fn advantage_of(left: f64, right: f64) -> Advantage {
    const EPS: f64 = 1e-9;
    if (left - right).abs() < EPS {
        Advantage::Even
    } else if left > right {
        Advantage::Left
    } else {
        Advantage::Right
    }
}

/// Head-to-head across all metrics; the composite decides the overall
/// call. Both sides get the league-default eWAR baseline since a pair
/// is no pool to average over.
pub fn compare(left: &ScoutedPlayer, right: &ScoutedPlayer) -> Comparison {
    let lm = MoneyballMetrics::compute(&left.stats, DEFAULT_ROLE_WIN_RATE);
    let rm = MoneyballMetrics::compute(&right.stats, DEFAULT_ROLE_WIN_RATE);

    let rows = vec![
        MetricComparison {
            metric: "eOBP",
            left: lm.eobp,
            right: rm.eobp,
            advantage: advantage_of(lm.eobp, rm.eobp),
        },
        MetricComparison {
            metric: "eSLG",
            left: lm.eslg,
            right: rm.eslg,
            advantage: advantage_of(lm.eslg, rm.eslg),
        },
        MetricComparison {
            metric: "eWAR",
            left: lm.ewar,
            right: rm.ewar,
            advantage: advantage_of(lm.ewar, rm.ewar),
        },
        MetricComparison {
            metric: "KDA",
            left: metrics::kda(&left.stats),
            right: metrics::kda(&right.stats),
            advantage: advantage_of(metrics::kda(&left.stats), metrics::kda(&right.stats)),
        },
        MetricComparison {
            metric: "Win rate",
            left: left.record.win_rate(),
            right: right.record.win_rate(),
            advantage: advantage_of(left.record.win_rate(), right.record.win_rate()),
        },
        MetricComparison {
            metric: "Moneyball",
            left: lm.score,
            right: rm.score,
            advantage: advantage_of(lm.score, rm.score),
        },
    ];

    let overall = advantage_of(lm.score, rm.score);

    Comparison { rows, overall }
}
