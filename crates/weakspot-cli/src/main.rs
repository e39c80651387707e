//! weakspot CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "weakspot", version, about = "Mistake-mastery tracker for study content")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a self-check result for an item
    Mark {
        /// Item ID, e.g. "D1-LESSON-001-0-2"
        id: String,

        /// New status: mastered, review, or unset
        status: String,
    },

    /// Show the recorded status of an item
    Status {
        /// Item ID, e.g. "D1-LESSON-001-0-2"
        id: String,
    },

    /// List weak spots across all lessons
    Review {
        /// Only show items from this domain
        #[arg(long)]
        domain: Option<u32>,

        /// Output format: table, json, markdown
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Per-section progress table
    Progress {
        /// Only show sections of this lesson
        #[arg(long)]
        lesson: Option<String>,

        /// Only show this section (zero-based index; requires --lesson)
        #[arg(long, requires = "lesson")]
        section: Option<u32>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Clear the entire needs-review list
    ClearReview {
        /// Confirm the irreversible clear
        #[arg(long)]
        yes: bool,
    },

    /// Validate lesson content files
    Validate {
        /// Content directory or single lesson file (defaults to the
        /// configured content_dir)
        #[arg(long)]
        content: Option<PathBuf>,
    },

    /// Write a progress snapshot
    Export {
        /// Output file for the snapshot JSON
        #[arg(long)]
        output: PathBuf,
    },

    /// Compare current progress against a snapshot
    Diff {
        /// Baseline snapshot JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create starter config and an example lesson
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("weakspot=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load_config_from(cli.config.as_deref())?;

    match cli.command {
        Commands::Mark { id, status } => commands::mark::execute(&config, &id, &status),
        Commands::Status { id } => commands::status::execute(&config, &id),
        Commands::Review { domain, format } => commands::review::execute(&config, domain, &format),
        Commands::Progress {
            lesson,
            section,
            format,
        } => commands::progress::execute(&config, lesson, section, &format),
        Commands::ClearReview { yes } => commands::clear::execute(&config, yes),
        Commands::Validate { content } => commands::validate::execute(&config, content),
        Commands::Export { output } => commands::export::execute(&config, output),
        Commands::Diff { baseline, format } => commands::diff::execute(&config, baseline, &format),
        Commands::Init => commands::init::execute(),
    }
}
