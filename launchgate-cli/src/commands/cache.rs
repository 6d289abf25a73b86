//! Cached endpoint management CLI commands.

use clap::Subcommand;

use launchgate::config::ConfigFile;
use launchgate::store::{EndpointStore, FileStore};

use crate::error::CliError;

/// Cache action subcommands.
#[derive(Debug, Subcommand)]
pub enum CacheAction {
    /// Show the cached endpoint, if any
    Show,
    /// Clear the cached endpoint, forcing the next launch to resolve
    Clear,
}

/// Run a cache subcommand.
pub fn run(action: CacheAction) -> Result<(), CliError> {
    let config = ConfigFile::load().unwrap_or_default();
    let store = FileStore::new(&config.store.directory);

    match action {
        CacheAction::Show => {
            println!("Endpoint store: {}", config.store.directory.display());
            match store.load() {
                Some(endpoint) => println!("  Cached: {}", endpoint),
                None => println!("  Cached: (none)"),
            }
            Ok(())
        }
        CacheAction::Clear => {
            store.clear()?;
            println!(
                "Cleared cached endpoint at: {}",
                config.store.directory.display()
            );
            Ok(())
        }
    }
}
