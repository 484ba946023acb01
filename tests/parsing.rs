use std::fs;
use std::path::PathBuf;

use moneyball_scout::api::models::{
    GraphQlResponse, PlayersData, SeriesData, StatisticsData,
};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn players_page_parses_nodes_and_cursor() {
    let raw = read_fixture("players_page.json");
    let envelope: GraphQlResponse<PlayersData> =
        serde_json::from_str(&raw).expect("players page should parse");

    assert!(envelope.errors.is_empty());
    let players = envelope.data.expect("data should be present").players;

    assert_eq!(players.edges.len(), 3);
    assert_eq!(players.edges[0].node.nickname, "Caps");
    assert_eq!(
        players.edges[1].node.team.as_ref().map(|t| t.name.as_str()),
        Some("Fnatic")
    );
    // Free agents come back with a null team
    assert!(players.edges[2].node.team.is_none());

    let page_info = players.page_info.expect("pageInfo should be present");
    assert!(!page_info.has_next_page);
    assert!(page_info.end_cursor.is_some());
}

#[test]
fn series_page_parses_rosters_and_scores() {
    let raw = read_fixture("recent_series.json");
    let envelope: GraphQlResponse<SeriesData> =
        serde_json::from_str(&raw).expect("series page should parse");

    let series: Vec<_> = envelope
        .data
        .expect("data should be present")
        .all_series
        .edges
        .into_iter()
        .map(|e| e.node)
        .collect();

    assert_eq!(series.len(), 4);
    assert_eq!(series[0].id, "s-903");
    assert_eq!(series[0].teams[0].score_advantage, 2);
    assert_eq!(series[0].teams[1].base_info.name, "Fnatic");
    assert!(series[0]
        .teams[0]
        .players
        .iter()
        .any(|p| p.player.id == "1041"));
    assert!(series[0].start_time_scheduled.is_some());
}

#[test]
fn statistics_page_parses_aggregates_with_defaults() {
    let raw = read_fixture("player_statistics.json");
    let envelope: GraphQlResponse<StatisticsData> =
        serde_json::from_str(&raw).expect("statistics page should parse");

    let nodes: Vec<_> = envelope
        .data
        .expect("data should be present")
        .player_statistics
        .edges
        .into_iter()
        .map(|e| e.node)
        .collect();

    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].player_id, "1041");
    assert_eq!(nodes[0].series_id, "s-903");
    assert_eq!(nodes[0].stats.kills.total, 12.0);
    assert_eq!(nodes[0].stats.kills.max, 7.0);
    // goldEarned carries no max in the feed - defaults to zero
    assert_eq!(nodes[0].stats.gold_earned.max, 0.0);
    assert_eq!(nodes[1].stats.damage.total, 41000.0);
}

#[test]
fn graphql_errors_survive_a_200_response() {
    let raw = read_fixture("graphql_error.json");
    let envelope: GraphQlResponse<PlayersData> =
        serde_json::from_str(&raw).expect("error envelope should parse");

    assert!(envelope.data.is_none());
    assert_eq!(envelope.errors.len(), 1);
    assert!(envelope.errors[0].message.contains("Player not found"));
}
