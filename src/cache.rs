use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::analysis::aggregate::{Form, PlayerRecord};
use crate::analysis::metrics::PlayerStats;
use crate::analysis::scout::ScoutedPlayer;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CachedPlayer {
    pub id: String,
    pub nickname: String,
    pub team: Option<String>,
    pub country: Option<String>,
    pub stats: PlayerStats,
    pub record: PlayerRecord,
    pub form: Form,
    pub series_analyzed: usize,
    pub cached_at: DateTime<Utc>,
}

impl CachedPlayer {
    pub fn from_scouted(player: &ScoutedPlayer) -> Self {
        CachedPlayer {
            id: player.id.clone(),
            nickname: player.nickname.clone(),
            team: player.team.clone(),
            country: player.country.clone(),
            stats: player.stats.clone(),
            record: player.record,
            form: player.form,
            series_analyzed: player.series_analyzed,
            cached_at: Utc::now(),
        }
    }

    pub fn to_scouted(&self) -> ScoutedPlayer {
        ScoutedPlayer {
            id: self.id.clone(),
            nickname: self.nickname.clone(),
            team: self.team.clone(),
            country: self.country.clone(),
            stats: self.stats.clone(),
            record: self.record,
            form: self.form,
            series_analyzed: self.series_analyzed,
        }
    }
}

/// One scouted pool per GRID title, persisted between runs.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoutCache {
    pub title_id: String,
    pub last_updated: DateTime<Utc>,
    pub players: Vec<CachedPlayer>,
}

impl ScoutCache {
    pub fn new(title_id: &str) -> Self {
        ScoutCache {
            title_id: title_id.to_string(),
            last_updated: Utc::now(),
            players: Vec::new(),
        }
    }

    pub fn cache_path(title_id: &str) -> PathBuf {
        let cache_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".moneyball_scout");

        let _ = fs::create_dir_all(&cache_dir);

        cache_dir.join(format!("title_{}.json", title_id))
    }

    pub fn load(title_id: &str) -> Result<Self, AppError> {
        let path = Self::cache_path(title_id);

        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| AppError::JsonError(format!("Failed to parse cache: {}", e))),
            // Cache doesn't exist yet, start empty
            Err(_) => Ok(ScoutCache::new(title_id)),
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        let path = Self::cache_path(&self.title_id);
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize cache: {}", e)))?;

        fs::write(&path, json)
            .map_err(|e| AppError::JsonError(format!("Failed to write cache: {}", e)))?;

        Ok(())
    }

    /// Fresh snapshots replace same-id entries; newest first.
    pub fn upsert_players(&mut self, fresh: Vec<CachedPlayer>) {
        self.players
            .retain(|p| !fresh.iter().any(|f| f.id == p.id));
        self.players.splice(0..0, fresh);
        self.players.sort_by(|a, b| b.cached_at.cmp(&a.cached_at));

        self.last_updated = Utc::now();
    }

    pub fn get(&self, player_id: &str) -> Option<&CachedPlayer> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn is_stale(&self, max_age_mins: u64) -> bool {
        let age = Utc::now().signed_duration_since(self.last_updated);
        age.num_minutes() > max_age_mins as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::metrics::Role;

    fn cached(id: &str, kills: u64) -> CachedPlayer {
        CachedPlayer {
            id: id.to_string(),
            nickname: id.to_string(),
            team: None,
            country: None,
            stats: PlayerStats {
                kills,
                deaths: 0,
                assists: 0,
                gold_earned: 0,
                damage_to_champions: 0,
                wins: 0,
                games_played: 0,
                role: Role::Mid,
            },
            record: PlayerRecord::default(),
            form: Form::Stable,
            series_analyzed: 0,
            cached_at: Utc::now(),
        }
    }

    #[test]
    fn upsert_replaces_same_id_entries() {
        let mut cache = ScoutCache::new("3");
        cache.upsert_players(vec![cached("p1", 10), cached("p2", 20)]);
        cache.upsert_players(vec![cached("p1", 99)]);

        assert_eq!(cache.players.len(), 2);
        let p1 = cache.get("p1").expect("p1 should stay cached");
        assert_eq!(p1.stats.kills, 99);
    }

    #[test]
    fn fresh_cache_is_not_stale() {
        let mut cache = ScoutCache::new("3");
        cache.upsert_players(vec![cached("p1", 1)]);
        assert!(!cache.is_stale(60));
    }

    #[test]
    fn round_trips_through_scouted() {
        let entry = cached("p1", 7);
        let scouted = entry.to_scouted();
        let back = CachedPlayer::from_scouted(&scouted);
        assert_eq!(back.id, "p1");
        assert_eq!(back.stats.kills, 7);
    }
}
