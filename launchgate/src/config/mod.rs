//! Configuration for LaunchGate components.
//!
//! User-facing configuration lives in `~/.launchgate/config.ini`,
//! loaded through [`ConfigFile`]. A missing file means defaults; the
//! file is written out commented so every knob documents itself.
//!
//! Component configs ([`RetryPolicy`], the resolver, connectivity and
//! bootstrap configs) convert from their settings sections via `From`,
//! keeping the INI schema out of the components themselves.

mod defaults;
mod file;
mod parser;
mod retry;
mod settings;
mod writer;

pub use defaults::{
    DEFAULT_ATTEMPT_TIMEOUT_SECS, DEFAULT_LOG_FILE_NAME, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_RETRY_DELAY_MS,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use retry::RetryPolicy;
pub use settings::{
    BootstrapSettings, ConfigFile, ConnectivitySettings, LoggingSettings, ResolverSettings,
    StoreSettings,
};
