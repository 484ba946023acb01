use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("GRID API error: {0}")]
    ApiError(String),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Unknown role: {0}. Use TOP, JG, MID, ADC or SUP")]
    InvalidRole(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("No recent series found for this player")]
    NoSeriesData,

    #[error("No players matched the scouting filters")]
    NoPlayersFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}
