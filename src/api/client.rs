use crate::config::Config;
use crate::error::AppError;
use governor::{Quota, RateLimiter, state::{InMemoryState, NotKeyed}, clock::DefaultClock};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use super::endpoints::*;
use super::models::*;

pub struct GridClient {
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl GridClient {
    pub fn new(config: Config) -> Self {
        // 20 req/sec keeps a full scouting sweep under the shared key quota
        let rate_limiter = RateLimiter::direct(Quota::per_second(NonZeroU32::new(20).unwrap()));
        GridClient {
            config,
            rate_limiter,
        }
    }

    fn post_graphql<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, AppError> {
        while self.rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(50));
        }

        let payload = json!({ "query": query, "variables": variables });

        let mut retry_count = 0;
        const MAX_RETRIES: u32 = 3;

        loop {
            let response = ureq::post(url)
                .set("Content-Type", "application/json")
                .set("x-api-key", &self.config.api_key)
                .set("x-title-id", &self.config.title_id)
                .set("User-Agent", "moneyball_scout/0.1.0")
                .send_json(payload.clone());

            match response {
                Ok(resp) => {
                    let body = resp
                        .into_string()
                        .map_err(|e| AppError::HttpError(e.to_string()))?;
                    return Self::unwrap_envelope(&body);
                }
                Err(ureq::Error::Status(429, _)) => {
                    // Rate limited - wait and retry
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = 2000 * (retry_count + 1) as u64;
                    println!("⏳ Rate limited, waiting {}ms before retry...", wait_ms);
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(ureq::Error::Status(code, resp)) => {
                    let body = resp.into_string().unwrap_or_default();
                    return Err(AppError::ApiError(format!("{} - {}", code, body)));
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }

    // A 200 response can still fail at the GraphQL layer; surface the
    // first error message the way the API reports it.
    fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
        let envelope: GraphQlResponse<T> =
            serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))?;

        if let Some(err) = envelope.errors.first() {
            return Err(AppError::ApiError(err.message.clone()));
        }

        envelope
            .data
            .ok_or_else(|| AppError::JsonError("GraphQL response missing data".to_string()))
    }

    pub fn list_players(&self, role_name: &str, first: usize) -> Result<Vec<PlayerNode>, AppError> {
        // Title scoping rides on the x-title-id header; the filter only
        // narrows by role.
        let data: PlayersData = self.post_graphql(
            CENTRAL_DATA_URL,
            PLAYERS_QUERY,
            json!({
                "filter": { "roleName": role_name },
                "first": first,
                "after": null,
            }),
        )?;

        Ok(data.players.edges.into_iter().map(|e| e.node).collect())
    }

    pub fn player(&self, id: &str) -> Result<PlayerNode, AppError> {
        let data: PlayerData =
            self.post_graphql(CENTRAL_DATA_URL, PLAYER_QUERY, json!({ "id": id }))?;

        data.player
            .ok_or_else(|| AppError::PlayerNotFound(id.to_string()))
    }

    pub fn recent_series(&self, player_id: &str, limit: usize) -> Result<Vec<SeriesNode>, AppError> {
        let data: SeriesData = self.post_graphql(
            CENTRAL_DATA_URL,
            RECENT_SERIES_QUERY,
            json!({ "playerId": player_id, "limit": limit }),
        )?;

        Ok(data.all_series.edges.into_iter().map(|e| e.node).collect())
    }

    pub fn player_statistics(
        &self,
        player_id: &str,
        series_ids: &[String],
    ) -> Result<Vec<StatisticsNode>, AppError> {
        let data: StatisticsData = self.post_graphql(
            STATISTICS_FEED_URL,
            PLAYER_STATISTICS_QUERY,
            json!({ "playerId": player_id, "seriesIds": series_ids }),
        )?;

        Ok(data.player_statistics.edges.into_iter().map(|e| e.node).collect())
    }
}
