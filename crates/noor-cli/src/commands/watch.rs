use anyhow::Result;
use colored::Colorize;
use tokio::sync::broadcast::error::RecvError;

use noor_core::leaderboard::rank;
use noor_application::spawn_poll_refresher;

use super::leaderboard::format_row;
use super::AppContext;

/// Re-renders the leaderboard on every change signal. The poll refresher
/// doubles as the way writes from other processes become visible.
pub async fn run(context: &AppContext) -> Result<()> {
    let mut rx = context.store.subscribe();
    let poll = spawn_poll_refresher(
        context.store.notifier().clone(),
        context.config.poll_interval(),
    );

    println!("{}", "Watching for progress updates (Ctrl-C to stop)".dimmed());

    loop {
        let records = context.store.snapshot().await;
        print!("\x1B[2J\x1B[H");
        println!("{}", "Family Leaderboard".bold());
        println!();
        for entry in rank(&records) {
            println!("{}", format_row(&entry));
        }

        match rx.recv().await {
            Ok(_) => {}
            // Level-triggered: a lag just means we re-read once.
            Err(RecvError::Lagged(_)) => {}
            Err(RecvError::Closed) => break,
        }
    }

    poll.abort();
    Ok(())
}
