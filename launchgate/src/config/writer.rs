//! Configuration file serialization.

use std::path::Path;

use super::settings::ConfigFile;

/// Render the configuration as a commented INI document.
///
/// Every key is written out with its current value so the file doubles
/// as documentation of the available knobs.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"; LaunchGate configuration
;
; Values here override the built-in defaults. Delete a line (or this
; whole file) to fall back to the default for it.

[resolver]
; Resolution server asked which endpoint this device should load.
base_url = {base_url}
; Partner token sent as the `p` query parameter.
partner_token = {partner_token}
; Marker preceding the endpoint in the response body.
payload_marker = {payload_marker}
; Separator terminating the endpoint in the response body. Quoted so
; `#` is not read as a comment.
payload_separator = "{payload_separator}"
; Per-attempt timeout in seconds.
attempt_timeout_secs = {attempt_timeout_secs}
; Attempts per resolution pass.
max_attempts = {max_attempts}
; Delay between attempts in milliseconds.
retry_delay_ms = {retry_delay_ms}

[store]
; Directory holding the persisted endpoint.
directory = {store_directory}

[connectivity]
; Comma-separated host:port targets probed for reachability.
probe_targets = {probe_targets}
; Timeout per probe connection in milliseconds.
probe_timeout_ms = {probe_timeout_ms}
; Seconds between reachability polls.
poll_interval_secs = {poll_interval_secs}

[bootstrap]
; Minimum splash duration in milliseconds. The initial mode is not
; published before this much time has passed.
min_splash_ms = {min_splash_ms}

[logging]
; Log file path. Cleared at the start of every session.
file = {log_file}
"#,
        base_url = config.resolver.base_url,
        partner_token = config.resolver.partner_token,
        payload_marker = config.resolver.payload_marker,
        payload_separator = config.resolver.payload_separator,
        attempt_timeout_secs = config.resolver.attempt_timeout_secs,
        max_attempts = config.resolver.max_attempts,
        retry_delay_ms = config.resolver.retry_delay_ms,
        store_directory = path_to_string(&config.store.directory),
        probe_targets = config.connectivity.probe_targets.join(", "),
        probe_timeout_ms = config.connectivity.probe_timeout_ms,
        poll_interval_secs = config.connectivity.poll_interval_secs,
        min_splash_ms = config.bootstrap.min_splash_ms,
        log_file = path_to_string(&config.logging.file),
    )
}

/// Render a path, collapsing the home directory prefix to `~/`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(rest) = path.strip_prefix(&home) {
            return format!("~/{}", rest.display());
        }
    }
    path.display().to_string()
}
