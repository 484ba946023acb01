use crate::analysis::metrics::{PlayerStats, Role};
use crate::api::models::{SeriesNode, StatisticsNode};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Win/loss record derived from series score advantages.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub wins: u64,
    pub losses: u64,
}

impl PlayerRecord {
    pub fn total(&self) -> u64 {
        self.wins + self.losses
    }

    pub fn win_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.wins as f64 / self.total() as f64
        }
    }
}

/// Streak read over the newest three series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Form {
    Hot,
    Stable,
    Cold,
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Form::Hot => "HOT",
            Form::Stable => "STABLE",
            Form::Cold => "COLD",
        };
        write!(f, "{}", s)
    }
}

/// Did this player's side take the series? `None` when the player is on
/// neither roster or the score is level.
pub fn series_outcome(series: &SeriesNode, player_id: &str) -> Option<bool> {
    let on_roster = |t: &crate::api::models::SeriesTeam| {
        t.players.iter().any(|p| p.player.id == player_id)
    };

    let player_team = series.teams.iter().find(|t| on_roster(t))?;
    let opponent = series.teams.iter().find(|t| !on_roster(t))?;

    match player_team.score_advantage.cmp(&opponent.score_advantage) {
        Ordering::Greater => Some(true),
        Ordering::Less => Some(false),
        Ordering::Equal => None,
    }
}

pub fn derive_record(series: &[SeriesNode], player_id: &str) -> PlayerRecord {
    let mut record = PlayerRecord::default();
    for s in series {
        match series_outcome(s, player_id) {
            Some(true) => record.wins += 1,
            Some(false) => record.losses += 1,
            None => {}
        }
    }
    record
}

/// Form over the newest 3 series. Input is expected newest-first, the
/// order the Central Data query returns.
pub fn recent_form(series: &[SeriesNode], player_id: &str) -> Form {
    let recent_wins = series
        .iter()
        .take(3)
        .filter(|s| series_outcome(s, player_id) == Some(true))
        .count();

    match recent_wins {
        n if n >= 2 => Form::Hot,
        1 => Form::Stable,
        _ => Form::Cold,
    }
}

/// Fold Statistics Feed nodes and the derived record into one stats row.
pub fn aggregate_stats(nodes: &[StatisticsNode], record: PlayerRecord, role: Role) -> PlayerStats {
    let mut stats = PlayerStats {
        kills: 0,
        deaths: 0,
        assists: 0,
        gold_earned: 0,
        damage_to_champions: 0,
        wins: record.wins,
        games_played: record.total(),
        role,
    };

    for node in nodes {
        stats.kills += node.stats.kills.total.round() as u64;
        stats.deaths += node.stats.deaths.total.round() as u64;
        stats.assists += node.stats.assists.total.round() as u64;
        stats.damage_to_champions += node.stats.damage.total.round() as u64;
        stats.gold_earned += node.stats.gold_earned.total.round() as u64;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{
        PlayerIdRef, SeriesPlayerRef, SeriesTeam, StatAggregate, StatBlock, TeamRef,
    };

    fn team(id: &str, score: i64, player_ids: &[&str]) -> SeriesTeam {
        SeriesTeam {
            base_info: TeamRef {
                id: id.to_string(),
                name: id.to_string(),
            },
            score_advantage: score,
            players: player_ids
                .iter()
                .map(|p| SeriesPlayerRef {
                    player: PlayerIdRef { id: p.to_string() },
                })
                .collect(),
        }
    }

    fn series(id: &str, our_score: i64, their_score: i64) -> SeriesNode {
        SeriesNode {
            id: id.to_string(),
            start_time_scheduled: None,
            teams: vec![
                team("blue", our_score, &["p1", "p2"]),
                team("red", their_score, &["p9"]),
            ],
        }
    }

    fn stat_node(series_id: &str, kills: f64, deaths: f64, assists: f64, damage: f64, gold: f64) -> StatisticsNode {
        StatisticsNode {
            player_id: "p1".to_string(),
            series_id: series_id.to_string(),
            stats: StatBlock {
                kills: StatAggregate { total: kills, ..Default::default() },
                deaths: StatAggregate { total: deaths, ..Default::default() },
                assists: StatAggregate { total: assists, ..Default::default() },
                damage: StatAggregate { total: damage, ..Default::default() },
                gold_earned: StatAggregate { total: gold, ..Default::default() },
            },
        }
    }

    #[test]
    fn outcome_follows_score_advantage() {
        assert_eq!(series_outcome(&series("s1", 2, 1), "p1"), Some(true));
        assert_eq!(series_outcome(&series("s2", 0, 2), "p1"), Some(false));
        assert_eq!(series_outcome(&series("s3", 1, 1), "p1"), None);
    }

    #[test]
    fn outcome_requires_the_player_on_a_roster() {
        assert_eq!(series_outcome(&series("s1", 2, 0), "stranger"), None);
    }

    #[test]
    fn record_counts_wins_losses_and_skips_ties() {
        let window = vec![
            series("s1", 2, 0),
            series("s2", 1, 2),
            series("s3", 1, 1),
            series("s4", 2, 1),
        ];
        let record = derive_record(&window, "p1");
        assert_eq!(record.wins, 2);
        assert_eq!(record.losses, 1);
        assert_eq!(record.total(), 3);
        assert!((record.win_rate() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn form_reads_only_the_newest_three() {
        let hot = vec![
            series("s1", 2, 0),
            series("s2", 2, 1),
            series("s3", 0, 2),
            series("s4", 0, 2),
        ];
        assert_eq!(recent_form(&hot, "p1"), Form::Hot);

        let stable = vec![series("s1", 2, 0), series("s2", 0, 2), series("s3", 0, 2)];
        assert_eq!(recent_form(&stable, "p1"), Form::Stable);

        let cold = vec![series("s1", 0, 2), series("s2", 1, 2)];
        assert_eq!(recent_form(&cold, "p1"), Form::Cold);
    }

    #[test]
    fn aggregate_sums_totals_and_carries_the_record() {
        let nodes = vec![
            stat_node("s1", 4.0, 2.0, 9.0, 18000.0, 12500.0),
            stat_node("s2", 8.0, 3.0, 9.0, 22000.0, 14500.0),
        ];
        let record = PlayerRecord { wins: 7, losses: 3 };
        let stats = aggregate_stats(&nodes, record, Role::Adc);

        assert_eq!(stats.kills, 12);
        assert_eq!(stats.deaths, 5);
        assert_eq!(stats.assists, 18);
        assert_eq!(stats.damage_to_champions, 40000);
        assert_eq!(stats.gold_earned, 27000);
        assert_eq!(stats.wins, 7);
        assert_eq!(stats.games_played, 10);
        assert_eq!(stats.role, Role::Adc);
    }

    #[test]
    fn aggregate_of_nothing_is_all_zero() {
        let stats = aggregate_stats(&[], PlayerRecord::default(), Role::Support);
        assert_eq!(stats.kills, 0);
        assert_eq!(stats.games_played, 0);
    }
}
