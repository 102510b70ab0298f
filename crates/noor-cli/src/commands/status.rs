use anyhow::Result;
use colored::Colorize;

use noor_application::AnalyticsService;

use super::AppContext;

pub async fn run(context: &AppContext) -> Result<()> {
    let snapshot = AnalyticsService::new(context.store.clone()).snapshot().await;

    println!(
        "{} ({})",
        "Active Members".green().bold(),
        snapshot.active.len()
    );
    for member in &snapshot.active {
        let when = if member.days_inactive == 0 {
            "Today".to_string()
        } else {
            format!("{}d ago", member.days_inactive)
        };
        println!("  {:<20} {}", member.name, when.dimmed());
    }

    println!();
    println!(
        "{} ({})",
        "Inactive Members".red().bold(),
        snapshot.inactive.len()
    );
    if snapshot.inactive.is_empty() {
        println!("  {}", "Everyone is active!".dimmed());
    }
    for member in &snapshot.inactive {
        println!(
            "  {:<20} {}",
            member.name,
            format!("{}d inactive", member.days_inactive).dimmed()
        );
    }

    Ok(())
}
