// Fixture payloads through the whole pipeline: parse, derive the
// record, aggregate totals, then rank against a second player.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use moneyball_scout::analysis::aggregate::{
    aggregate_stats, derive_record, recent_form, Form, PlayerRecord,
};
use moneyball_scout::analysis::metrics::{PlayerStats, Role};
use moneyball_scout::analysis::scout::{rank_players, RoleAverages, ScoutedPlayer};
use moneyball_scout::api::models::{GraphQlResponse, SeriesData, StatisticsData};

const PLAYER_ID: &str = "1041";

fn read_fixture(name: &str) -> Result<String> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    Ok(fs::read_to_string(path)?)
}

fn fixture_profile() -> Result<ScoutedPlayer> {
    let series_raw = read_fixture("recent_series.json")?;
    let series_envelope: GraphQlResponse<SeriesData> = serde_json::from_str(&series_raw)?;
    let series: Vec<_> = series_envelope
        .data
        .expect("series data should be present")
        .all_series
        .edges
        .into_iter()
        .map(|e| e.node)
        .collect();

    let stats_raw = read_fixture("player_statistics.json")?;
    let stats_envelope: GraphQlResponse<StatisticsData> = serde_json::from_str(&stats_raw)?;
    let nodes: Vec<_> = stats_envelope
        .data
        .expect("statistics data should be present")
        .player_statistics
        .edges
        .into_iter()
        .map(|e| e.node)
        .collect();

    let record = derive_record(&series, PLAYER_ID);
    let form = recent_form(&series, PLAYER_ID);
    let stats = aggregate_stats(&nodes, record, Role::Mid);

    Ok(ScoutedPlayer {
        id: PLAYER_ID.to_string(),
        nickname: "Caps".to_string(),
        team: Some("G2 Esports".to_string()),
        country: Some("Denmark".to_string()),
        stats,
        record,
        form,
        series_analyzed: series.len(),
    })
}

#[test]
fn record_and_form_come_out_of_the_fixtures() -> Result<()> {
    let profile = fixture_profile()?;

    // Two wins, one loss; the drawn series (s-900) counts as neither
    assert_eq!(profile.record.wins, 2);
    assert_eq!(profile.record.losses, 1);
    // Newest three are win, loss, win
    assert_eq!(profile.form, Form::Hot);
    Ok(())
}

#[test]
fn totals_aggregate_across_series() -> Result<()> {
    let profile = fixture_profile()?;

    assert_eq!(profile.stats.kills, 18);
    assert_eq!(profile.stats.deaths, 14);
    assert_eq!(profile.stats.assists, 28);
    assert_eq!(profile.stats.damage_to_champions, 95000);
    assert_eq!(profile.stats.gold_earned, 72000);
    assert_eq!(profile.stats.wins, 2);
    assert_eq!(profile.stats.games_played, 3);
    Ok(())
}

#[test]
fn fixture_player_outranks_a_weaker_pick() -> Result<()> {
    let profile = fixture_profile()?;

    let rival = ScoutedPlayer {
        id: "5510".to_string(),
        nickname: "Nisqy".to_string(),
        team: Some("MAD Lions".to_string()),
        country: None,
        stats: PlayerStats {
            kills: 10,
            deaths: 20,
            assists: 12,
            gold_earned: 70000,
            damage_to_champions: 50000,
            wins: 1,
            games_played: 3,
            role: Role::Mid,
        },
        record: PlayerRecord { wins: 1, losses: 2 },
        form: Form::Cold,
        series_analyzed: 3,
    };

    let pool = vec![rival, profile];
    let averages = RoleAverages::from_pool(pool.iter().map(|p| &p.stats));
    let entries = rank_players(pool, &averages);

    assert_eq!(entries[0].player.nickname, "Caps");
    assert_eq!(entries[0].moneyball_rank, 1);

    // eOBP 46/60, eSLG 95000/72000 x 100
    let expected_eobp = 46.0 / 60.0;
    let expected_eslg = 95000.0 / 72000.0 * 100.0;
    assert!((entries[0].metrics.eobp - expected_eobp).abs() < 1e-9);
    assert!((entries[0].metrics.eslg - expected_eslg).abs() < 1e-9);

    let expected_score = expected_eobp * 0.6 + (expected_eslg / 150.0) * 0.4;
    assert!((entries[0].metrics.score - expected_score).abs() < 1e-9);
    Ok(())
}
