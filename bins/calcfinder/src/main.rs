//! calcfinder: search the clinical calculator catalog from the terminal.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;

/// Fuzzy search over a calculator catalog
#[derive(Parser)]
#[command(name = "calcfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank catalog entries by relevance to a query
    Rank {
        /// Search query
        query: String,

        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Scoring config file (TOML)
        #[arg(short, long, env = "CALCFINDER_CONFIG")]
        config: Option<PathBuf>,

        /// Show which tiers matched
        #[arg(short, long)]
        explain: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List entries a filterable list would keep, in catalog order
    Filter {
        /// Search text
        search: String,

        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Bounded edit distance between two strings
    Distance {
        /// First string
        a: String,

        /// Second string
        b: String,

        /// Largest distance to report
        #[arg(short, long, default_value = "2")]
        max: usize,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Rank {
            query,
            catalog,
            limit,
            config: config_path,
            explain,
            json,
        } => config::resolve(config_path.as_deref())
            .and_then(|config| commands::rank::run(&catalog, &query, &config, limit, explain, json)),

        Commands::Filter {
            search,
            catalog,
            json,
        } => commands::filter::run(&catalog, &search, json),

        Commands::Distance { a, b, max } => commands::distance::run(&a, &b, max),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red(), e);
            ExitCode::FAILURE
        }
    }
}
