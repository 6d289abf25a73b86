//! LaunchGate CLI - Command-line interface
//!
//! This binary provides a command-line interface to the LaunchGate library.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::cache::CacheAction;
use commands::config::ConfigCommands;
use commands::resolve::ResolveArgs;
use commands::run::RunArgs;

#[derive(Parser)]
#[command(name = "launchgate")]
#[command(version)]
#[command(about = "Resolve the remote endpoint and arbitrate app startup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve, watch connectivity, and report the startup mode
    Run {
        /// Enable debug-level logging
        #[arg(long)]
        debug: bool,
    },

    /// Perform a single resolution pass and exit
    Resolve {
        /// Clear the cached endpoint first, forcing a network pass
        #[arg(long)]
        fresh: bool,

        /// Enable debug-level logging
        #[arg(long)]
        debug: bool,
    },

    /// Manage the cached endpoint
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Print system information for bug reports
    Diagnostics,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { debug } => commands::run::run(RunArgs { debug }),
        Commands::Resolve { fresh, debug } => commands::resolve::run(ResolveArgs { fresh, debug }),
        Commands::Cache { action } => commands::cache::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Diagnostics => commands::diagnostics::run(),
    };

    if let Err(e) = result {
        e.exit();
    }
}
