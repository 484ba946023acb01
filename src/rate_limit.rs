use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::AppError;

// Development-tier GRID keys are metered; cap requests locally so one
// scouting session can't burn the whole allowance.
const MAX_REQUESTS_PER_DAY: u32 = 50;
const MAX_REQUESTS_PER_HOUR: u32 = 20;

#[derive(Debug, Serialize, Deserialize)]
pub struct UsageLog {
    pub title_id: String,
    pub requests_today: u32,
    pub requests_this_hour: u32,
    pub last_request: DateTime<Utc>,
    pub day_reset: DateTime<Utc>,
    pub hour_reset: DateTime<Utc>,
}

impl UsageLog {
    pub fn new(title_id: &str) -> Self {
        let now = Utc::now();
        UsageLog {
            title_id: title_id.to_string(),
            requests_today: 0,
            requests_this_hour: 0,
            last_request: now,
            day_reset: now + Duration::days(1),
            hour_reset: now + Duration::hours(1),
        }
    }

    pub fn log_path(title_id: &str) -> PathBuf {
        let cache_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".moneyball_scout");

        let _ = fs::create_dir_all(&cache_dir);

        cache_dir.join(format!("title_{}.ratelimit.json", title_id))
    }

    pub fn load(title_id: &str) -> Result<Self, AppError> {
        let path = Self::log_path(title_id);

        match fs::read_to_string(&path) {
            Ok(content) => {
                let mut log: UsageLog = serde_json::from_str(&content).map_err(|e| {
                    AppError::JsonError(format!("Failed to parse usage log: {}", e))
                })?;

                let now = Utc::now();
                if now > log.day_reset {
                    log.requests_today = 0;
                    log.day_reset = now + Duration::days(1);
                }
                if now > log.hour_reset {
                    log.requests_this_hour = 0;
                    log.hour_reset = now + Duration::hours(1);
                }

                Ok(log)
            }
            Err(_) => Ok(UsageLog::new(title_id)),
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        let path = Self::log_path(&self.title_id);
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize usage log: {}", e)))?;

        fs::write(&path, json)
            .map_err(|e| AppError::JsonError(format!("Failed to write usage log: {}", e)))?;

        Ok(())
    }

    pub fn can_make_request(&self) -> bool {
        self.requests_today < MAX_REQUESTS_PER_DAY
            && self.requests_this_hour < MAX_REQUESTS_PER_HOUR
    }

    pub fn record_request(&mut self) {
        self.requests_today += 1;
        self.requests_this_hour += 1;
        self.last_request = Utc::now();
    }

    pub fn remaining(&self) -> u32 {
        MAX_REQUESTS_PER_DAY
            .saturating_sub(self.requests_today)
            .min(MAX_REQUESTS_PER_HOUR.saturating_sub(self.requests_this_hour))
    }

    pub fn next_reset(&self) -> DateTime<Utc> {
        self.day_reset.min(self.hour_reset)
    }

    pub fn display_status(&self) {
        let until_reset = self.next_reset().signed_duration_since(Utc::now());

        println!("\n📊 GRID API Usage (Title {})", self.title_id);
        println!(
            "   Daily:  {}/{} requests",
            self.requests_today, MAX_REQUESTS_PER_DAY
        );
        println!(
            "   Hourly: {}/{} requests",
            self.requests_this_hour, MAX_REQUESTS_PER_HOUR
        );
        println!("   Remaining: {} requests", self.remaining());
        println!(
            "   Reset in: {}h {}m\n",
            until_reset.num_hours(),
            until_reset.num_minutes() % 60
        );
    }
}
