use serde::Deserialize;

// GraphQL envelope - a 200 response may still carry an `errors` array.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

// Relay-style connection wrapper used by every GRID listing query
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

// Central Data: players / player
#[derive(Debug, Deserialize)]
pub struct PlayersData {
    pub players: Connection<PlayerNode>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerData {
    pub player: Option<PlayerNode>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlayerNode {
    pub id: String,
    pub nickname: String,
    #[serde(default)]
    pub team: Option<TeamRef>,
    #[serde(default)]
    pub country: Option<CountryRef>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TeamRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CountryRef {
    pub name: String,
}

// Central Data: allSeries
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesData {
    pub all_series: Connection<SeriesNode>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SeriesNode {
    pub id: String,
    #[serde(default)]
    pub start_time_scheduled: Option<String>,
    pub teams: Vec<SeriesTeam>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SeriesTeam {
    pub base_info: TeamRef,
    #[serde(default)]
    pub score_advantage: i64,
    #[serde(default)]
    pub players: Vec<SeriesPlayerRef>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeriesPlayerRef {
    pub player: PlayerIdRef,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlayerIdRef {
    pub id: String,
}

// Statistics Feed: playerStatistics
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsData {
    pub player_statistics: Connection<StatisticsNode>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsNode {
    pub player_id: String,
    pub series_id: String,
    pub stats: StatBlock,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    #[serde(default)]
    pub kills: StatAggregate,
    #[serde(default)]
    pub deaths: StatAggregate,
    #[serde(default)]
    pub assists: StatAggregate,
    #[serde(default)]
    pub damage: StatAggregate,
    #[serde(default)]
    pub gold_earned: StatAggregate,
}

// total/average/max triple the Statistics Feed returns per counter.
// Fields default to 0 - goldEarned, for instance, carries no max.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StatAggregate {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub average: f64,
    #[serde(default)]
    pub max: f64,
}
