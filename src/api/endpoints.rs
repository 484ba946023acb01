// GRID endpoint URLs and GraphQL documents.
// Central Data serves players, teams and series listings;
// the Statistics Feed serves aggregated per-series player stats.

pub const CENTRAL_DATA_URL: &str = "https://api.grid.gg/central-data/graphql";
pub const STATISTICS_FEED_URL: &str = "https://api-op.grid.gg/statistics-feed/graphql";

pub const PLAYERS_QUERY: &str = r#"
query GetPlayers($filter: PlayerFilter, $first: Int, $after: String) {
    players(filter: $filter, first: $first, after: $after) {
        edges {
            node {
                id
                nickname
                team { id name }
            }
        }
        pageInfo {
            hasNextPage
            endCursor
        }
    }
}"#;

pub const PLAYER_QUERY: &str = r#"
query GetPlayerInfo($id: ID!) {
    player(id: $id) {
        id
        nickname
        country { name }
        team { id name }
    }
}"#;

pub const RECENT_SERIES_QUERY: &str = r#"
query GetRecentSeries($playerId: ID!, $limit: Int!) {
    allSeries(
        filter: { playerIds: { in: [$playerId] } }
        first: $limit
        orderBy: StartTimeScheduled
        orderDirection: DESC
    ) {
        edges {
            node {
                id
                startTimeScheduled
                teams {
                    baseInfo { id name }
                    scoreAdvantage
                    players { player { id } }
                }
            }
        }
    }
}"#;

pub const PLAYER_STATISTICS_QUERY: &str = r#"
query PlayerStatistics($playerId: ID!, $seriesIds: [ID!]!) {
    playerStatistics(
        filter: {
            playerId: { in: [$playerId] }
            seriesId: { in: $seriesIds }
        }
    ) {
        edges {
            node {
                playerId
                seriesId
                stats {
                    kills { total average max }
                    deaths { total average max }
                    assists { total average max }
                    damage { total average max }
                    goldEarned { total average }
                }
            }
        }
    }
}"#;
