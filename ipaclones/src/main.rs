//! Main binary entry point for the `ipaclones` dump analyzer.
//!
//! Thin clap wrapper over the query commands; all real work happens in the
//! library so that externalization tooling can link against it directly.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use ipaclones::commands;

/// Command line interface configuration using `clap`.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    /// The query to run against the dump.
    command: Commands,
}

#[derive(Subcommand)]
/// Queries over a GCC `-fdump-ipa-clones` dump.
enum Commands {
    /// Resolve which compiled instances a source-level symbol becomes
    Spawns {
        /// Path to the IPA clones dump
        dump: PathBuf,

        /// Source-level symbol name to resolve
        name: String,

        /// Output raw JSON
        #[arg(long, short = 'j')]
        json: bool,
    },

    /// Check whether every compiled instance of a symbol was removed
    Removed {
        /// Path to the IPA clones dump
        dump: PathBuf,

        /// Source-level symbol name to check
        name: String,

        /// Output raw JSON
        #[arg(long, short = 'j')]
        json: bool,
    },

    /// Print summary statistics for a dump
    Stats {
        /// Path to the IPA clones dump
        dump: PathBuf,

        /// Output raw JSON
        #[arg(long, short = 'j')]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Spawns { dump, name, json } => commands::run_spawns(&dump, &name, json),
        Commands::Removed { dump, name, json } => commands::run_removed(&dump, &name, json),
        Commands::Stats { dump, json } => commands::run_stats(&dump, json),
    };
    match result {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
