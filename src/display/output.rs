use colored::*;
use tabled::{builder::Builder, settings::Style, Table, Tabled};

use crate::analysis::aggregate::Form;
use crate::analysis::metrics::MoneyballMetrics;
use crate::analysis::scout::{undervalued, Advantage, Comparison, ScoutEntry, ScoutedPlayer};

#[derive(Tabled)]
struct ScoutRow {
    rank: String,
    player: String,
    role: String,
    team: String,
    #[tabled(rename = "eOBP")]
    eobp: String,
    #[tabled(rename = "eSLG")]
    eslg: String,
    #[tabled(rename = "eWAR")]
    ewar: String,
    score: String,
}

#[derive(Tabled)]
struct TraditionalRow {
    rank: String,
    player: String,
    role: String,
    team: String,
    #[tabled(rename = "KDA")]
    kda: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
    games: String,
}

pub fn display_scout_board(entries: &[ScoutEntry], top_n: usize) {
    println!("\n{}", "💎 MONEYBALL SCOUTING BOARD".bold().cyan());
    println!("{}\n", "=".repeat(70).cyan());

    if entries.is_empty() {
        println!("{}", "No players to rank (pool is empty)".yellow());
        return;
    }

    let mut rows = vec![];
    for entry in entries.iter().take(top_n) {
        rows.push(ScoutRow {
            rank: format!("#{}", entry.moneyball_rank),
            player: entry.player.nickname.clone(),
            role: entry.player.stats.role.to_string(),
            team: entry.player.team.clone().unwrap_or_else(|| "-".to_string()),
            eobp: format!("{:.3}", entry.metrics.eobp),
            eslg: format!("{:.1}", entry.metrics.eslg),
            ewar: format!("{:+.1}", entry.metrics.ewar),
            score: format!("{:.3}", entry.metrics.score),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\n{}", "Interpretation".bold().yellow());
    println!("• eOBP: kill participation that survives - (K+A)/(K+A+D)");
    println!("• eSLG: damage dealt per gold earned, x100 (pro range ~100-200)");
    println!("• eWAR: wins above the role-average baseline over the window");
    println!("• Score: 0.6 x eOBP + 0.4 x capped eSLG - survival over flash\n");

    if let Some(top_pick) = entries.first() {
        println!("{}", "Top Pick".bold().green());
        println!(
            "  {} - score {:.3} over {} series ({}-{} record)",
            top_pick.player.nickname,
            top_pick.metrics.score,
            top_pick.player.series_analyzed,
            top_pick.player.record.wins,
            top_pick.player.record.losses
        );
        if top_pick.metrics.eobp > 0.8 {
            println!(
                "  {} Elite survival - contributes far more than they feed",
                "⭐".green()
            );
        } else if top_pick.metrics.eslg > 160.0 {
            println!(
                "  {} Damage machine - converts gold into pressure",
                "🔥".yellow()
            );
        }
    }

    let gems = undervalued(entries);
    if !gems.is_empty() {
        println!("\n{}", "Hidden Gems".bold().magenta());
        for gem in gems {
            println!(
                "  💎 {} - #{} on this board but only #{} by raw KDA",
                gem.player.nickname, gem.moneyball_rank, gem.traditional_rank
            );
        }
    }

    println!();
}

pub fn display_traditional_board(entries: &[ScoutEntry], top_n: usize) {
    println!("\n{}", "📊 TRADITIONAL SCOUTING BOARD".bold().cyan());
    println!("{}\n", "=".repeat(70).cyan());

    if entries.is_empty() {
        println!("{}", "No players to rank (pool is empty)".yellow());
        return;
    }

    let mut ordered: Vec<&ScoutEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.traditional_rank);

    let mut rows = vec![];
    for entry in ordered.into_iter().take(top_n) {
        rows.push(TraditionalRow {
            rank: format!("#{}", entry.traditional_rank),
            player: entry.player.nickname.clone(),
            role: entry.player.stats.role.to_string(),
            team: entry.player.team.clone().unwrap_or_else(|| "-".to_string()),
            kda: format!("{:.2}", entry.kda),
            win_rate: format!("{:.1}%", entry.player.record.win_rate() * 100.0),
            games: format!("{}", entry.player.stats.games_played),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\n• KDA flatters low-risk play; check the Moneyball view before signing\n");
}

pub fn display_player_profile(profile: &ScoutedPlayer, metrics: &MoneyballMetrics) {
    let team = profile
        .team
        .clone()
        .unwrap_or_else(|| "Free Agent".to_string());
    let header = match &profile.country {
        Some(country) => format!("🎮 {} ({}) - {}", profile.nickname, team, country),
        None => format!("🎮 {} ({})", profile.nickname, team),
    };

    println!("\n{}", header.bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    println!(
        "{} {} W / {} L ({:.1}% WR) - form: {}",
        "📈 Record:".bold(),
        profile.record.wins.to_string().green(),
        profile.record.losses.to_string().red(),
        profile.record.win_rate() * 100.0,
        format_form(profile.form)
    );

    let series = profile.series_analyzed.max(1) as f64;
    let mut builder = Builder::default();
    builder.push_record(["stat", "total", "per series"]);
    builder.push_record([
        "Kills".to_string(),
        profile.stats.kills.to_string(),
        format!("{:.1}", profile.stats.kills as f64 / series),
    ]);
    builder.push_record([
        "Deaths".to_string(),
        profile.stats.deaths.to_string(),
        format!("{:.1}", profile.stats.deaths as f64 / series),
    ]);
    builder.push_record([
        "Assists".to_string(),
        profile.stats.assists.to_string(),
        format!("{:.1}", profile.stats.assists as f64 / series),
    ]);
    builder.push_record([
        "Damage".to_string(),
        profile.stats.damage_to_champions.to_string(),
        format!("{:.0}", profile.stats.damage_to_champions as f64 / series),
    ]);
    builder.push_record([
        "Gold".to_string(),
        profile.stats.gold_earned.to_string(),
        format!("{:.0}", profile.stats.gold_earned as f64 / series),
    ]);

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("\n{}", table);

    println!("\n{}", "Moneyball Metrics".bold().yellow());
    println!("  eOBP:  {:.3}", metrics.eobp);
    println!("  eSLG:  {:.1}", metrics.eslg);
    println!("  eWAR:  {:+.1}", metrics.ewar);
    println!("  Score: {:.3}", metrics.score);
    println!();
}

pub fn display_comparison(left: &ScoutedPlayer, right: &ScoutedPlayer, comparison: &Comparison) {
    println!(
        "\n{}",
        format!("⚔️  {} vs {}", left.nickname, right.nickname)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let mut builder = Builder::default();
    builder.push_record([
        "metric",
        left.nickname.as_str(),
        right.nickname.as_str(),
        "edge",
    ]);
    for row in &comparison.rows {
        builder.push_record([
            row.metric.to_string(),
            format!("{:.3}", row.left),
            format!("{:.3}", row.right),
            edge_label(row.advantage, left, right),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{}", table);

    match comparison.overall {
        Advantage::Left => println!(
            "\n{} {} takes the composite",
            "🏆".green(),
            left.nickname.bold()
        ),
        Advantage::Right => println!(
            "\n{} {} takes the composite",
            "🏆".green(),
            right.nickname.bold()
        ),
        Advantage::Even => println!("\n{}", "Dead even on the composite score".yellow()),
    }
    println!();
}

fn edge_label(advantage: Advantage, left: &ScoutedPlayer, right: &ScoutedPlayer) -> String {
    match advantage {
        Advantage::Left => left.nickname.clone(),
        Advantage::Right => right.nickname.clone(),
        Advantage::Even => "even".to_string(),
    }
}

fn format_form(form: Form) -> String {
    match form {
        Form::Hot => "HOT 🔥".green().to_string(),
        Form::Stable => "STABLE".yellow().to_string(),
        Form::Cold => "COLD ❄️".red().to_string(),
    }
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
