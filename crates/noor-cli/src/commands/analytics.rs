use anyhow::Result;
use colored::Colorize;

use noor_application::AnalyticsService;

use super::AppContext;

/// How many members the behind/inactive views list.
const VIEW_LIMIT: usize = 5;

pub async fn run(context: &AppContext) -> Result<()> {
    let snapshot = AnalyticsService::new(context.store.clone()).snapshot().await;

    println!("{}", "Behind in Progress".red().bold());
    if snapshot.behind.is_empty() {
        println!("  {}", "Everyone is doing great!".dimmed());
    }
    for member in snapshot.behind.iter().take(VIEW_LIMIT) {
        println!(
            "  {:<20} Juz {}, Surah {}",
            member.name, member.position.juz, member.position.surah
        );
    }

    println!();
    println!("{}", "Inactive Members".yellow().bold());
    if snapshot.inactive.is_empty() {
        println!("  {}", "All members are active!".dimmed());
    }
    for member in snapshot.inactive.iter().take(VIEW_LIMIT) {
        println!(
            "  {:<20} last updated {} days ago",
            member.name, member.days_inactive
        );
    }

    println!();
    println!("{}", "Top Performers".green().bold());
    for entry in &snapshot.top_performers {
        println!(
            "  #{} {:<20} {} Juz | Surah {}, Ayah {}",
            entry.rank, entry.name, entry.position.juz, entry.position.surah, entry.position.ayah
        );
    }

    Ok(())
}
