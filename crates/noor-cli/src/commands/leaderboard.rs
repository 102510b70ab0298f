use anyhow::Result;
use colored::Colorize;

use noor_core::leaderboard::{rank, LeaderboardEntry};

use super::AppContext;

/// How many rows the collapsed leaderboard shows.
const COLLAPSED_ROWS: usize = 6;

pub async fn run(context: &AppContext, all: bool) -> Result<()> {
    let records = context.store.snapshot().await;
    let board = rank(&records);

    println!("{}", "Family Leaderboard".bold());
    println!();
    let shown = if all {
        board.len()
    } else {
        board.len().min(COLLAPSED_ROWS)
    };
    for entry in &board[..shown] {
        println!("{}", format_row(entry));
    }
    if !all && board.len() > shown {
        println!();
        println!(
            "{}",
            format!("... and {} more (--all to show everyone)", board.len() - shown).dimmed()
        );
    }

    Ok(())
}

pub fn format_row(entry: &LeaderboardEntry) -> String {
    let line = format!(
        "#{:<3} {:<20} {} Juz | Surah {}, Ayah {}",
        entry.rank, entry.name, entry.position.juz, entry.position.surah, entry.position.ayah
    );
    match entry.rank {
        1 => format!("{} 👑", line.yellow().bold()),
        2 | 3 => line.cyan().to_string(),
        _ => line,
    }
}
