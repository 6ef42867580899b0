mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "glowbook")]
#[command(about = "Preview recurring booking series and export them to your calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SeriesArgs {
    /// First appointment date (YYYY-MM-DD); prompted for when omitted
    #[arg(short, long)]
    start: Option<String>,

    /// weekly, biweekly or monthly [default: weekly]
    #[arg(short, long)]
    frequency: Option<String>,

    /// Number of occurrence slots (1-52); skipped slots still count
    #[arg(short, long)]
    occurrences: Option<u32>,

    /// Stop at this date instead of an occurrence count (YYYY-MM-DD)
    #[arg(long)]
    end: Option<String>,

    /// Date to exclude from the series (YYYY-MM-DD, repeatable)
    #[arg(long)]
    skip: Vec<String>,

    /// Time-of-day label carried onto each appointment (e.g. "morning")
    #[arg(long)]
    time_slot: Option<String>,

    /// Per-session price for the cost projection
    #[arg(short, long)]
    price: Option<Decimal>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a series and print its dates with the projected cost
    Preview {
        #[command(flatten)]
        series: SeriesArgs,
    },
    /// Expand a series and write it to an .ics file
    Export {
        /// Title used for each calendar entry
        title: String,

        #[command(flatten)]
        series: SeriesArgs,

        /// Output path (defaults to the configured export directory)
        #[arg(short = 'O', long)]
        output: Option<PathBuf>,
    },
    /// Show or change the configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Update one setting and save it
    Set {
        /// export_dir, default_occurrences or currency
        key: String,
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Preview { series } => commands::preview::run(series),
        Commands::Export {
            title,
            series,
            output,
        } => commands::export::run(title, series, output),
        Commands::Config { action } => commands::config::run(action),
    }
}
