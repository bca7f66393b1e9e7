mod commands;
mod store;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "guildcal")]
#[command(about = "Guild schedule planner: browse events, get reminders, manage backups")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List upcoming events visible to the current user
    Events {
        /// How many days ahead to show
        #[arg(short, long, default_value_t = 14)]
        days: i64,
    },
    /// Create a new event
    New {
        title: String,

        /// Start date/time (e.g., "2026-09-03T20:00")
        #[arg(short, long)]
        start: String,

        /// End date/time; defaults to one hour after start
        #[arg(short, long)]
        end: Option<String>,

        /// Category id (defaults to the first category)
        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Switch the current user
    Switch {
        user_id: String,
    },
    /// Run the reminder scheduler (scans every minute, Ctrl-C to stop)
    Watch,
    /// Export a full backup, or only settings+categories with --design
    Export {
        /// Export the design pack (settings and categories only)
        #[arg(long)]
        design: bool,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Import a full backup, or a design pack with --design
    Import {
        file: std::path::PathBuf,

        /// Import as a design pack (settings and categories only)
        #[arg(long)]
        design: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Clear the activity log
    ClearLog {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Reset the application to its factory defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Events { days } => commands::events::run(days),
        Commands::New {
            title,
            start,
            end,
            category,
            description,
        } => commands::new::run(title, start, end, category, description),
        Commands::Switch { user_id } => commands::admin::switch(&user_id),
        Commands::Watch => commands::watch::run().await,
        Commands::Export { design, output } => commands::data::export(design, output),
        Commands::Import { file, design, yes } => commands::data::import(&file, design, yes),
        Commands::ClearLog { yes } => commands::admin::clear_log(yes),
        Commands::Reset { yes } => commands::admin::reset(yes),
    }
}
