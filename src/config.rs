use crate::error::AppError;
use std::env;

/// Title id 3 is League of Legends on GRID's Central Data API.
const DEFAULT_TITLE_ID: &str = "3";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub title_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("GRID_API_KEY").map_err(|_| {
            AppError::ConfigError(
                "GRID_API_KEY not found in .env file".to_string(),
            )
        })?;

        let title_id =
            env::var("GRID_TITLE_ID").unwrap_or_else(|_| DEFAULT_TITLE_ID.to_string());

        Ok(Config { api_key, title_id })
    }
}
