//! INI parsing into settings.
//!
//! Parsing overlays file values onto the defaults: only keys the user
//! actually wrote are applied, so a sparse file keeps working as the
//! defaults evolve.

use std::path::PathBuf;

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    if let Some(section) = ini.section(Some("resolver")) {
        if let Some(value) = section.get("base_url") {
            if !value.trim().is_empty() {
                config.resolver.base_url = value.trim().to_string();
            }
        }
        if let Some(value) = section.get("partner_token") {
            if !value.trim().is_empty() {
                config.resolver.partner_token = value.trim().to_string();
            }
        }
        if let Some(value) = section.get("payload_marker") {
            if !value.trim().is_empty() {
                config.resolver.payload_marker = value.trim().to_string();
            }
        }
        if let Some(value) = section.get("payload_separator") {
            config.resolver.payload_separator =
                parse_char("resolver", "payload_separator", value)?;
        }
        if let Some(value) = section.get("attempt_timeout_secs") {
            config.resolver.attempt_timeout_secs =
                parse_u64("resolver", "attempt_timeout_secs", value)?;
        }
        if let Some(value) = section.get("max_attempts") {
            let attempts = parse_u32("resolver", "max_attempts", value)?;
            if attempts == 0 {
                return Err(invalid(
                    "resolver",
                    "max_attempts",
                    value,
                    "must be at least 1",
                ));
            }
            config.resolver.max_attempts = attempts;
        }
        if let Some(value) = section.get("retry_delay_ms") {
            config.resolver.retry_delay_ms = parse_u64("resolver", "retry_delay_ms", value)?;
        }
    }

    if let Some(section) = ini.section(Some("store")) {
        if let Some(value) = section.get("directory") {
            if !value.trim().is_empty() {
                config.store.directory = expand_tilde(value.trim());
            }
        }
    }

    if let Some(section) = ini.section(Some("connectivity")) {
        if let Some(value) = section.get("probe_targets") {
            let targets: Vec<String> = value
                .split(',')
                .map(|target| target.trim().to_string())
                .filter(|target| !target.is_empty())
                .collect();
            if targets.is_empty() {
                return Err(invalid(
                    "connectivity",
                    "probe_targets",
                    value,
                    "expected a comma-separated list of host:port targets",
                ));
            }
            config.connectivity.probe_targets = targets;
        }
        if let Some(value) = section.get("probe_timeout_ms") {
            config.connectivity.probe_timeout_ms =
                parse_u64("connectivity", "probe_timeout_ms", value)?;
        }
        if let Some(value) = section.get("poll_interval_secs") {
            config.connectivity.poll_interval_secs =
                parse_u64("connectivity", "poll_interval_secs", value)?;
        }
    }

    if let Some(section) = ini.section(Some("bootstrap")) {
        if let Some(value) = section.get("min_splash_ms") {
            config.bootstrap.min_splash_ms = parse_u64("bootstrap", "min_splash_ms", value)?;
        }
    }

    if let Some(section) = ini.section(Some("logging")) {
        if let Some(value) = section.get("file") {
            if !value.trim().is_empty() {
                config.logging.file = expand_tilde(value.trim());
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_u64(section: &str, key: &str, value: &str) -> Result<u64, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(section, key, value, "expected a non-negative integer"))
}

fn parse_u32(section: &str, key: &str, value: &str) -> Result<u32, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(section, key, value, "expected a non-negative integer"))
}

fn parse_char(section: &str, key: &str, value: &str) -> Result<char, ConfigFileError> {
    let mut chars = value.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(invalid(section, key, value, "expected a single character")),
    }
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(contents).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        assert_eq!(parse("").unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_unknown_sections_are_ignored() {
        let config = parse("[something_else]\nkey = value\n").unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_resolver_overrides_apply() {
        let config = parse(
            "[resolver]\n\
             base_url = https://staging.example.com/server.php\n\
             max_attempts = 5\n\
             retry_delay_ms = 250\n",
        )
        .unwrap();

        assert_eq!(
            config.resolver.base_url,
            "https://staging.example.com/server.php"
        );
        assert_eq!(config.resolver.max_attempts, 5);
        assert_eq!(config.resolver.retry_delay_ms, 250);
        // Untouched keys keep their defaults.
        assert_eq!(config.resolver.attempt_timeout_secs, 15);
    }

    #[test]
    fn test_non_numeric_value_is_rejected() {
        let result = parse("[resolver]\nmax_attempts = many\n");
        assert!(matches!(
            result,
            Err(ConfigFileError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_zero_attempts_is_rejected() {
        let result = parse("[resolver]\nmax_attempts = 0\n");
        assert!(matches!(
            result,
            Err(ConfigFileError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_separator_must_be_a_single_character() {
        assert!(parse("[resolver]\npayload_separator = ##\n").is_err());
        assert_eq!(
            parse("[resolver]\npayload_separator = |\n")
                .unwrap()
                .resolver
                .payload_separator,
            '|'
        );
    }

    #[test]
    fn test_probe_targets_are_split_and_trimmed() {
        let config = parse(
            "[connectivity]\nprobe_targets = 192.0.2.1:443 , 192.0.2.2:53,\n",
        )
        .unwrap();
        assert_eq!(
            config.connectivity.probe_targets,
            vec!["192.0.2.1:443".to_string(), "192.0.2.2:53".to_string()]
        );
    }

    #[test]
    fn test_empty_probe_target_list_is_rejected() {
        assert!(parse("[connectivity]\nprobe_targets = , ,\n").is_err());
    }

    #[test]
    fn test_bootstrap_splash_override() {
        let config = parse("[bootstrap]\nmin_splash_ms = 500\n").unwrap();
        assert_eq!(config.bootstrap.min_splash_ms, 500);
    }

    #[test]
    fn test_expand_tilde_with_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/state"), home.join("state"));
        }
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        assert_eq!(expand_tilde("/var/lib/launchgate"), PathBuf::from("/var/lib/launchgate"));
    }
}
