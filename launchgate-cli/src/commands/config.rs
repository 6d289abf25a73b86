//! Configuration management CLI commands.
//!
//! Provides `config path`, `config show`, and `config init` commands for
//! inspecting and creating the configuration file.

use clap::Subcommand;

use launchgate::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the configuration file contents
    Show,

    /// Create a default configuration file if none exists
    Init,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Init => run_init(),
    }
}

/// Show the configuration file path.
fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}

/// Show the configuration file contents.
fn run_show() -> Result<(), CliError> {
    let path = config_file_path();

    if !path.exists() {
        println!("No configuration file found at {}", path.display());
        println!("Run 'launchgate config init' to create one.");
        return Ok(());
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| CliError::FileRead {
        path: path.display().to_string(),
        error: e,
    })?;
    print!("{}", contents);
    Ok(())
}

/// Create a default configuration file if none exists.
fn run_init() -> Result<(), CliError> {
    let path = config_file_path();

    if path.exists() {
        println!("Configuration already exists at {}", path.display());
        return Ok(());
    }

    let written = ConfigFile::ensure_exists()?;
    println!("Created default configuration at {}", written.display());
    Ok(())
}
