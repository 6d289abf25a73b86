//! Resolution request URL construction.

use reqwest::Url;

use crate::device::DeviceProfile;

use super::types::ResolveError;

/// Build the resolution request URL for a device.
///
/// The server contract is a GET with exactly these query parameters,
/// in this order: `p` (partner token), `os`, `lng`, `devicemodel`,
/// `country`. Values are percent-encoded as needed.
pub fn build_request_url(
    base_url: &str,
    partner_token: &str,
    profile: &DeviceProfile,
) -> Result<String, ResolveError> {
    let url = Url::parse_with_params(
        base_url,
        [
            ("p", partner_token),
            ("os", profile.os_version.as_str()),
            ("lng", profile.language.as_str()),
            ("devicemodel", profile.model.as_str()),
            ("country", profile.region.as_str()),
        ],
    )
    .map_err(|e| ResolveError::Protocol(format!("Invalid request URL {}: {}", base_url, e)))?;

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_profile() -> DeviceProfile {
        DeviceProfile::new("17.4", "en", "iPhone", "US")
    }

    #[test]
    fn test_url_carries_all_parameters_in_order() {
        let url =
            build_request_url("https://example.com/server.php", "token123", &test_profile())
                .unwrap();
        assert_eq!(
            url,
            "https://example.com/server.php?p=token123&os=17.4&lng=en&devicemodel=iPhone&country=US"
        );
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let profile = DeviceProfile::new("6.8.0-45 generic", "en", "ThinkPad X1 Carbon", "US");
        let url = build_request_url("https://example.com/server.php", "t", &profile).unwrap();
        assert!(url.contains("os=6.8.0-45+generic"));
        assert!(url.contains("devicemodel=ThinkPad+X1+Carbon"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_invalid_base_url_is_a_protocol_error() {
        let result = build_request_url("not a url", "t", &test_profile());
        assert!(matches!(result, Err(ResolveError::Protocol(_))));
    }

    #[test]
    fn test_default_config_produces_valid_url() {
        let config = super::super::types::ResolverConfig::default();
        let url = build_request_url(&config.base_url, &config.partner_token, &test_profile())
            .unwrap();
        assert!(url.starts_with("https://wallen-eatery.space/ios-olg-1/server.php?p="));
    }
}
