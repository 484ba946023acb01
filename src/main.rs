use clap::{Parser, Subcommand};
use indicatif::ProgressBar;

use moneyball_scout::analysis::aggregate::{aggregate_stats, derive_record, recent_form};
use moneyball_scout::analysis::metrics::{MoneyballMetrics, Role, DEFAULT_ROLE_WIN_RATE};
use moneyball_scout::analysis::scout::{self, RoleAverages, ScoutedPlayer};
use moneyball_scout::api::client::GridClient;
use moneyball_scout::cache::{CachedPlayer, ScoutCache};
use moneyball_scout::config::Config;
use moneyball_scout::display::output::{
    display_comparison, display_error, display_info, display_player_profile, display_scout_board,
    display_success, display_traditional_board,
};
use moneyball_scout::error::AppError;
use moneyball_scout::rate_limit::UsageLog;

const MAX_SERIES_PER_PLAYER: usize = 50;
const CACHE_MAX_AGE_MINS: u64 = 360;

#[derive(Parser, Debug)]
#[command(name = "Moneyball Scout")]
#[command(about = "Scout esports talent with sabermetrics-style efficiency metrics", long_about = None)]
struct Args {
    /// GRID title id (default: GRID_TITLE_ID env, falls back to LoL)
    #[arg(short, long, global = true)]
    title: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a ranked scouting board for one role
    Scout {
        /// Role to scout (TOP, JG, MID, ADC, SUP)
        #[arg(short, long, default_value = "ADC")]
        role: String,

        /// Number of players to pull into the pool
        #[arg(short, long, default_value = "8")]
        pool: usize,

        /// Recent series per player to aggregate (max 50)
        #[arg(short, long, default_value = "10")]
        series: usize,

        /// Number of board rows to display
        #[arg(long, default_value = "5")]
        top_n: usize,

        /// Rank by raw KDA instead of the Moneyball composite
        #[arg(long)]
        traditional: bool,

        /// Force refresh from the GRID API (ignore cache)
        #[arg(long)]
        refresh: bool,
    },

    /// Show one player's aggregated profile and metrics
    Player {
        /// GRID player id
        player_id: String,

        /// Role shown on the profile (TOP, JG, MID, ADC, SUP)
        #[arg(short, long, default_value = "MID")]
        role: String,

        /// Recent series to aggregate (max 50)
        #[arg(short, long, default_value = "10")]
        series: usize,
    },

    /// Compare two players head-to-head
    Compare {
        /// GRID player id of the first player
        left_id: String,

        /// GRID player id of the second player
        right_id: String,

        /// Role of both players (TOP, JG, MID, ADC, SUP)
        #[arg(short, long, default_value = "MID")]
        role: String,

        /// Recent series to aggregate per player (max 50)
        #[arg(short, long, default_value = "10")]
        series: usize,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = Config::from_env()?;
    if let Some(title) = args.title {
        config.title_id = title;
    }

    let mut usage = UsageLog::load(&config.title_id)?;

    match args.command {
        Command::Scout {
            role,
            pool,
            series,
            top_n,
            traditional,
            refresh,
        } => run_scout(&config, &mut usage, &role, pool, series, top_n, traditional, refresh),
        Command::Player {
            player_id,
            role,
            series,
        } => run_player(&config, &mut usage, &player_id, &role, series),
        Command::Compare {
            left_id,
            right_id,
            role,
            series,
        } => run_compare(&config, &mut usage, &left_id, &right_id, &role, series),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_scout(
    config: &Config,
    usage: &mut UsageLog,
    role: &str,
    pool: usize,
    series: usize,
    top_n: usize,
    traditional: bool,
    refresh: bool,
) -> Result<(), AppError> {
    let role: Role = role.parse()?;
    let series = series.min(MAX_SERIES_PER_PLAYER);

    let mut cache = ScoutCache::load(&config.title_id)?;
    let cached_pool: Vec<ScoutedPlayer> = if refresh || cache.is_stale(CACHE_MAX_AGE_MINS) {
        Vec::new()
    } else {
        cache
            .players
            .iter()
            .filter(|p| p.stats.role == role)
            .map(CachedPlayer::to_scouted)
            .collect()
    };

    let scouted = if !cached_pool.is_empty() {
        display_success(&format!(
            "⚡ Using cached {} pool ({} players, --refresh to refetch)",
            role,
            cached_pool.len()
        ));
        cached_pool
    } else {
        if !usage.can_make_request() {
            usage.display_status();
            return Err(AppError::ApiError(
                "⛔ GRID quota reached (50 req/day, 20 req/hour). Try again later.".to_string(),
            ));
        }

        let client = GridClient::new(config.clone());

        display_info(&format!(
            "Step 1: Listing {} players for title {}...",
            role, config.title_id
        ));
        let players = client.list_players(role.grid_name(), pool)?;
        usage.record_request();
        usage.save().ok();

        if players.is_empty() {
            return Err(AppError::NoPlayersFound);
        }
        display_success(&format!("Found {} players to scout", players.len()));

        display_info("Step 2: Aggregating recent series per player...");
        let pb = ProgressBar::new(players.len() as u64);
        pb.set_message("Fetching player statistics");

        let mut scouted = Vec::new();
        for player in players {
            let series_nodes = client.recent_series(&player.id, series)?;
            usage.record_request();

            let record = derive_record(&series_nodes, &player.id);
            let form = recent_form(&series_nodes, &player.id);

            let series_ids: Vec<String> = series_nodes.iter().map(|s| s.id.clone()).collect();
            let stat_nodes = if series_ids.is_empty() {
                Vec::new()
            } else {
                let nodes = client.player_statistics(&player.id, &series_ids)?;
                usage.record_request();
                nodes
            };
            usage.save().ok();

            scouted.push(ScoutedPlayer {
                id: player.id,
                nickname: player.nickname,
                team: player.team.map(|t| t.name),
                country: player.country.map(|c| c.name),
                stats: aggregate_stats(&stat_nodes, record, role),
                record,
                form,
                series_analyzed: series_nodes.len(),
            });
            pb.inc(1);
        }
        pb.finish_with_message("✓ Player statistics fetched");

        let fresh: Vec<CachedPlayer> = scouted.iter().map(CachedPlayer::from_scouted).collect();
        cache.upsert_players(fresh);
        let _ = cache.save(); // Save to disk silently

        scouted
    };

    display_info("Step 3: Ranking the pool...");
    let averages = RoleAverages::from_pool(scouted.iter().map(|p| &p.stats));
    let entries = scout::rank_players(scouted, &averages);

    if traditional {
        display_traditional_board(&entries, top_n);
    } else {
        display_scout_board(&entries, top_n);
    }

    usage.display_status();
    Ok(())
}

fn run_player(
    config: &Config,
    usage: &mut UsageLog,
    player_id: &str,
    role: &str,
    series: usize,
) -> Result<(), AppError> {
    let role: Role = role.parse()?;

    if !usage.can_make_request() {
        usage.display_status();
        return Err(AppError::ApiError(
            "⛔ GRID quota reached (50 req/day, 20 req/hour). Try again later.".to_string(),
        ));
    }

    let client = GridClient::new(config.clone());

    display_info(&format!("Fetching profile for player {}...", player_id));
    let profile = fetch_profile(&client, usage, player_id, role, series)?;
    display_success(&format!(
        "Aggregated {} recent series for {}",
        profile.series_analyzed, profile.nickname
    ));

    let metrics = MoneyballMetrics::compute(&profile.stats, DEFAULT_ROLE_WIN_RATE);
    display_player_profile(&profile, &metrics);

    usage.display_status();
    Ok(())
}

fn run_compare(
    config: &Config,
    usage: &mut UsageLog,
    left_id: &str,
    right_id: &str,
    role: &str,
    series: usize,
) -> Result<(), AppError> {
    let role: Role = role.parse()?;

    if !usage.can_make_request() {
        usage.display_status();
        return Err(AppError::ApiError(
            "⛔ GRID quota reached (50 req/day, 20 req/hour). Try again later.".to_string(),
        ));
    }

    let client = GridClient::new(config.clone());

    display_info(&format!("Fetching {} and {}...", left_id, right_id));
    let left = fetch_profile(&client, usage, left_id, role, series)?;
    let right = fetch_profile(&client, usage, right_id, role, series)?;
    display_success("Both profiles aggregated");

    let comparison = scout::compare(&left, &right);
    display_comparison(&left, &right, &comparison);

    usage.display_status();
    Ok(())
}

fn fetch_profile(
    client: &GridClient,
    usage: &mut UsageLog,
    player_id: &str,
    role: Role,
    series: usize,
) -> Result<ScoutedPlayer, AppError> {
    let series = series.min(MAX_SERIES_PER_PLAYER);

    let player = client.player(player_id)?;
    usage.record_request();

    let series_nodes = client.recent_series(player_id, series)?;
    usage.record_request();
    if series_nodes.is_empty() {
        return Err(AppError::NoSeriesData);
    }

    let record = derive_record(&series_nodes, player_id);
    let form = recent_form(&series_nodes, player_id);

    let series_ids: Vec<String> = series_nodes.iter().map(|s| s.id.clone()).collect();
    let stat_nodes = client.player_statistics(player_id, &series_ids)?;
    usage.record_request();
    usage.save().ok();

    Ok(ScoutedPlayer {
        id: player.id,
        nickname: player.nickname,
        team: player.team.map(|t| t.name),
        country: player.country.map(|c| c.name),
        stats: aggregate_stats(&stat_nodes, record, role),
        record,
        form,
        series_analyzed: series_nodes.len(),
    })
}
