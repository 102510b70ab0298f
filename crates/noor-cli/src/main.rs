use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "noor")]
#[command(about = "Noor Journey - family Quran memorization tracker", long_about = None)]
struct Cli {
    /// Override the data/config directory (defaults to the platform dirs)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the family leaderboard
    Leaderboard {
        /// Show every member instead of the top 6
        #[arg(long)]
        all: bool,
    },
    /// Show who is active and who has gone quiet
    Status,
    /// Show behind / inactive / top performer views
    Analytics,
    /// Save your progress (PIN-gated)
    Save {
        /// Your name as it appears on the roster
        #[arg(long)]
        member: String,
        /// Your PIN (set on first use with --confirm-pin)
        #[arg(long)]
        pin: String,
        /// First-time setup: repeat the PIN to create it
        #[arg(long)]
        confirm_pin: Option<String>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=30))]
        juz: u32,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=114))]
        surah: u32,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        ayah: u32,
    },
    /// Reset your progress to the beginning (PIN-gated)
    Reset {
        /// Your name as it appears on the roster
        #[arg(long)]
        member: String,
        /// Your PIN
        #[arg(long)]
        pin: String,
    },
    /// Print the weekly WhatsApp report
    Report,
    /// Re-render the leaderboard whenever progress changes
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let context = commands::AppContext::build(cli.data_dir.as_deref()).await?;

    match cli.command {
        Commands::Leaderboard { all } => commands::leaderboard::run(&context, all).await?,
        Commands::Status => commands::status::run(&context).await?,
        Commands::Analytics => commands::analytics::run(&context).await?,
        Commands::Save {
            member,
            pin,
            confirm_pin,
            juz,
            surah,
            ayah,
        } => {
            commands::progress::save(
                &context,
                &member,
                &pin,
                confirm_pin.as_deref(),
                noor_core::progress::Position::new(juz, surah, ayah),
            )
            .await?
        }
        Commands::Reset { member, pin } => commands::progress::reset(&context, &member, &pin).await?,
        Commands::Report => commands::report::run(&context).await?,
        Commands::Watch => commands::watch::run(&context).await?,
    }

    Ok(())
}
