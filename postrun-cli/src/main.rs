//! postrun — re-derive system caches and registrations after package
//! installs.
//!
//! # Usage
//!
//! ```text
//! postrun run [TRIGGER]... [--dry-run] [--force] [--root <path>] [--json]
//! postrun list [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{list::ListArgs, run::RunArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "postrun",
    version,
    about = "Run post-install maintenance triggers against the live system",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run registered triggers (all of them, or only the named ones).
    Run(RunArgs),

    /// List registered triggers and the paths they watch.
    List(ListArgs),
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => args.run(),
        Commands::List(args) => args.run(),
    }
}

/// Progress lines come from the libraries through the `log` facade; default
/// them on so `postrun run` narrates which paths it is processing.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
