//! Diagnostics report for bug reports.
//!
//! Collects the environment facts that matter when startup arbitration
//! misbehaves: what the device fingerprint resolves to, whether an
//! endpoint is stored, and what configuration is in effect. Collection
//! never fails; anything unreadable shows up as `unknown`.

use std::fmt;
use std::fs;

use crate::config::{config_file_path, ConfigFile};
use crate::device::DeviceProfile;
use crate::store::{EndpointStore, FileStore};
use crate::VERSION;

/// Full diagnostics report.
#[derive(Debug, Clone, Default)]
pub struct SystemReport {
    pub os: OsInfo,
    pub device: DeviceInfo,
    pub store: StoreInfo,
    pub config: ConfigInfo,
}

/// Operating system details.
#[derive(Debug, Clone, Default)]
pub struct OsInfo {
    pub kernel: Option<String>,
    pub distribution: Option<String>,
}

/// The fingerprint sent with resolution requests.
#[derive(Debug, Clone, Default)]
pub struct DeviceInfo {
    pub os_version: Option<String>,
    pub language: Option<String>,
    pub model: Option<String>,
    pub region: Option<String>,
}

/// State of the endpoint store.
#[derive(Debug, Clone, Default)]
pub struct StoreInfo {
    pub directory: Option<String>,
    pub endpoint: Option<String>,
}

/// Configuration file state.
#[derive(Debug, Clone, Default)]
pub struct ConfigInfo {
    pub path: Option<String>,
    pub content: Option<String>,
}

impl SystemReport {
    /// Collect a report from the current machine.
    pub fn collect() -> Self {
        Self {
            os: OsInfo::collect(),
            device: DeviceInfo::collect(),
            store: StoreInfo::collect(),
            config: ConfigInfo::collect(),
        }
    }
}

impl OsInfo {
    fn collect() -> Self {
        let kernel = fs::read_to_string("/proc/sys/kernel/osrelease")
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|value| !value.is_empty());

        let distribution = fs::read_to_string("/etc/os-release").ok().and_then(|raw| {
            raw.lines()
                .find(|line| line.starts_with("PRETTY_NAME="))
                .map(|line| {
                    line.trim_start_matches("PRETTY_NAME=")
                        .trim_matches('"')
                        .to_string()
                })
        });

        Self {
            kernel,
            distribution,
        }
    }
}

impl DeviceInfo {
    fn collect() -> Self {
        let profile = DeviceProfile::detect();
        Self {
            os_version: Some(profile.os_version),
            language: Some(profile.language),
            model: Some(profile.model),
            region: Some(profile.region),
        }
    }
}

impl StoreInfo {
    fn collect() -> Self {
        let config = ConfigFile::load().unwrap_or_default();
        let store = FileStore::new(config.store.directory.clone());
        Self {
            directory: Some(config.store.directory.display().to_string()),
            endpoint: store.load().map(|endpoint| endpoint.to_string()),
        }
    }
}

impl ConfigInfo {
    fn collect() -> Self {
        let path = config_file_path();
        let content = fs::read_to_string(&path).ok().map(|raw| redact(&raw));
        Self {
            path: Some(path.display().to_string()),
            content,
        }
    }

    /// Build from explicit content, for tests.
    #[cfg(test)]
    fn with_content(content: &str) -> Self {
        Self {
            path: Some("/tmp/config.ini".to_string()),
            content: Some(redact(content)),
        }
    }
}

/// Blank out values of secret-bearing keys in config content.
fn redact(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            let key = line.split('=').next().unwrap_or("").trim().to_lowercase();
            if key.contains("token") || key.contains("secret") || key.contains("api_key") {
                match line.split_once('=') {
                    Some((prefix, _)) => format!("{}= [REDACTED]", prefix),
                    None => line.to_string(),
                }
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl fmt::Display for SystemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unknown = "unknown";

        writeln!(f, "# LaunchGate Diagnostics Report")?;
        writeln!(f)?;
        writeln!(f, "Version: {}", VERSION)?;
        writeln!(f)?;

        writeln!(f, "## Operating System")?;
        writeln!(
            f,
            "Kernel: {}",
            self.os.kernel.as_deref().unwrap_or(unknown)
        )?;
        writeln!(
            f,
            "Distribution: {}",
            self.os.distribution.as_deref().unwrap_or(unknown)
        )?;
        writeln!(f)?;

        writeln!(f, "## Device Fingerprint")?;
        writeln!(
            f,
            "OS version: {}",
            self.device.os_version.as_deref().unwrap_or(unknown)
        )?;
        writeln!(
            f,
            "Language: {}",
            self.device.language.as_deref().unwrap_or(unknown)
        )?;
        writeln!(
            f,
            "Model: {}",
            self.device.model.as_deref().unwrap_or(unknown)
        )?;
        writeln!(
            f,
            "Region: {}",
            self.device.region.as_deref().unwrap_or(unknown)
        )?;
        writeln!(f)?;

        writeln!(f, "## Endpoint Store")?;
        writeln!(
            f,
            "Directory: {}",
            self.store.directory.as_deref().unwrap_or(unknown)
        )?;
        writeln!(
            f,
            "Stored endpoint: {}",
            self.store.endpoint.as_deref().unwrap_or("(none)")
        )?;
        writeln!(f)?;

        writeln!(f, "## Configuration")?;
        writeln!(
            f,
            "Path: {}",
            self.config.path.as_deref().unwrap_or(unknown)
        )?;
        match &self.config.content {
            Some(content) => {
                writeln!(f)?;
                writeln!(f, "```ini")?;
                writeln!(f, "{}", content)?;
                writeln!(f, "```")?;
            }
            None => writeln!(f, "Content: (not created)")?,
        }
        writeln!(f)?;

        writeln!(f, "Copy the above output into your GitHub issue.")?;
        Ok(())
    }
}
