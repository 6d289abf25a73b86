//! Default configuration values.

use super::file::config_directory;
use super::settings::{
    BootstrapSettings, ConfigFile, ConnectivitySettings, LoggingSettings, ResolverSettings,
    StoreSettings,
};

// ===== Resolution retry schedule =====

/// Default per-attempt timeout in seconds.
pub const DEFAULT_ATTEMPT_TIMEOUT_SECS: u64 = 15;

/// Default number of attempts per resolution pass.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default delay between attempts in milliseconds.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

// ===== Logging =====

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "launchgate.log";

impl Default for ConfigFile {
    fn default() -> Self {
        let config_dir = config_directory();
        Self {
            resolver: ResolverSettings::default(),
            store: StoreSettings {
                directory: config_dir.clone(),
            },
            connectivity: ConnectivitySettings::default(),
            bootstrap: BootstrapSettings::default(),
            logging: LoggingSettings {
                file: config_dir.join(DEFAULT_LOG_FILE_NAME),
            },
        }
    }
}
