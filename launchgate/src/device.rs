//! Device fingerprint for resolution requests.
//!
//! The resolution server tailors its answer to the requesting device, so
//! every request carries the OS version, preferred language, hardware
//! model and region. Detection never fails: each probe falls back to a
//! neutral default when the underlying source is unavailable.

#[cfg(target_os = "linux")]
use std::fs;

/// Fallback language when no locale is configured.
const FALLBACK_LANGUAGE: &str = "en";

/// Fallback region when the locale carries no territory.
const FALLBACK_REGION: &str = "US";

/// Snapshot of the device attributes sent with a resolution request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Operating system version (kernel release on Linux).
    pub os_version: String,
    /// Preferred language code, lowercase (e.g. "en").
    pub language: String,
    /// Hardware model string.
    pub model: String,
    /// Region code, uppercase (e.g. "US").
    pub region: String,
}

impl DeviceProfile {
    /// Create a profile from explicit values.
    pub fn new(
        os_version: impl Into<String>,
        language: impl Into<String>,
        model: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            os_version: os_version.into(),
            language: language.into(),
            model: model.into(),
            region: region.into(),
        }
    }

    /// Detect the profile of the current machine.
    pub fn detect() -> Self {
        let locale = locale_env();
        let language = locale
            .as_deref()
            .and_then(parse_locale_language)
            .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());
        let region = locale
            .as_deref()
            .and_then(parse_locale_region)
            .unwrap_or_else(|| FALLBACK_REGION.to_string());

        Self {
            os_version: detect_os_version(),
            language,
            model: detect_model(),
            region,
        }
    }
}

/// Locale string from the environment, `LC_ALL` taking precedence.
fn locale_env() -> Option<String> {
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
}

/// Language component of a locale string ("en_US.UTF-8" yields "en").
///
/// The "C" and "POSIX" pseudo-locales carry no language.
fn parse_locale_language(locale: &str) -> Option<String> {
    let base = locale.split('.').next().unwrap_or(locale);
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    let language = base.split(|c| c == '_' || c == '-').next().unwrap_or(base);
    if language.is_empty() {
        None
    } else {
        Some(language.to_ascii_lowercase())
    }
}

/// Region component of a locale string ("en_US.UTF-8" yields "US").
fn parse_locale_region(locale: &str) -> Option<String> {
    let base = locale.split('.').next().unwrap_or(locale);
    let mut parts = base.split(|c| c == '_' || c == '-');
    let _language = parts.next();
    let region = parts.next()?;
    if region.is_empty() {
        None
    } else {
        Some(region.to_ascii_uppercase())
    }
}

#[cfg(target_os = "linux")]
fn detect_os_version() -> String {
    fs::read_to_string("/proc/sys/kernel/osrelease")
        .map(|raw| raw.trim().to_string())
        .ok()
        .filter(|version| !version.is_empty())
        .unwrap_or_else(|| std::env::consts::OS.to_string())
}

#[cfg(not(target_os = "linux"))]
fn detect_os_version() -> String {
    std::env::consts::OS.to_string()
}

#[cfg(target_os = "linux")]
fn detect_model() -> String {
    // DMI covers x86 machines, the device tree covers ARM boards.
    let probes = [
        "/sys/devices/virtual/dmi/id/product_name",
        "/proc/device-tree/model",
    ];
    for path in probes {
        if let Ok(raw) = fs::read_to_string(path) {
            let model = raw.trim_matches(char::from(0)).trim();
            if !model.is_empty() {
                return model.to_string();
            }
        }
    }
    std::env::consts::ARCH.to_string()
}

#[cfg(not(target_os = "linux"))]
fn detect_model() -> String {
    std::env::consts::ARCH.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_language() {
        assert_eq!(parse_locale_language("en_US.UTF-8"), Some("en".to_string()));
        assert_eq!(parse_locale_language("de_DE"), Some("de".to_string()));
        assert_eq!(parse_locale_language("fr"), Some("fr".to_string()));
        assert_eq!(parse_locale_language("pt-BR"), Some("pt".to_string()));
    }

    #[test]
    fn test_parse_locale_language_normalizes_case() {
        assert_eq!(parse_locale_language("EN_us"), Some("en".to_string()));
    }

    #[test]
    fn test_parse_locale_language_rejects_pseudo_locales() {
        assert_eq!(parse_locale_language("C"), None);
        assert_eq!(parse_locale_language("C.UTF-8"), None);
        assert_eq!(parse_locale_language("POSIX"), None);
        assert_eq!(parse_locale_language(""), None);
    }

    #[test]
    fn test_parse_locale_region() {
        assert_eq!(parse_locale_region("en_US.UTF-8"), Some("US".to_string()));
        assert_eq!(parse_locale_region("de_DE"), Some("DE".to_string()));
        assert_eq!(parse_locale_region("pt-br"), Some("BR".to_string()));
    }

    #[test]
    fn test_parse_locale_region_missing_territory() {
        assert_eq!(parse_locale_region("en"), None);
        assert_eq!(parse_locale_region("en.UTF-8"), None);
    }

    #[test]
    fn test_detect_fills_every_field() {
        let profile = DeviceProfile::detect();
        assert!(!profile.os_version.is_empty());
        assert!(!profile.language.is_empty());
        assert!(!profile.model.is_empty());
        assert!(!profile.region.is_empty());
    }

    #[test]
    fn test_new_preserves_values() {
        let profile = DeviceProfile::new("17.4", "en", "iPhone", "US");
        assert_eq!(profile.os_version, "17.4");
        assert_eq!(profile.language, "en");
        assert_eq!(profile.model, "iPhone");
        assert_eq!(profile.region, "US");
    }
}
