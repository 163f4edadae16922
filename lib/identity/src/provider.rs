//! Hosted identity provider configuration.
//!
//! The provider is reached only through its browser SDK, which the server
//! injects into every page. This module knows how to locate that SDK from
//! the publishable key the provider issues for the application.

use crate::error::ProviderConfigError;
use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use portico_core::Result;
use serde::{Deserialize, Serialize};

/// Prefix of publishable keys for development instances.
const TEST_KEY_PREFIX: &str = "pk_test_";

/// Prefix of publishable keys for production instances.
const LIVE_KEY_PREFIX: &str = "pk_live_";

/// Publishable keys may or may not carry base64 padding.
const KEY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Configuration for the hosted identity provider.
///
/// Fields with defaults can be omitted when loading from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The publishable key issued by the provider (`pk_test_...` or `pk_live_...`).
    publishable_key: String,
    /// The provider's frontend API host (e.g. "clerk.example.com").
    /// Derived from the publishable key when omitted.
    #[serde(default)]
    frontend_api: Option<String>,
    /// Major version of the browser SDK to load.
    /// Default: "5"
    #[serde(default = "default_sdk_version")]
    sdk_version: String,
}

fn default_sdk_version() -> String {
    "5".to_string()
}

impl ProviderConfig {
    /// Creates a configuration that derives the frontend API from the key.
    #[must_use]
    pub fn new(publishable_key: String) -> Self {
        Self {
            publishable_key,
            frontend_api: None,
            sdk_version: default_sdk_version(),
        }
    }

    /// Overrides the frontend API host, e.g. for a proxied domain.
    #[must_use]
    pub fn with_frontend_api(mut self, host: String) -> Self {
        self.frontend_api = Some(host);
        self
    }

    /// Overrides the browser SDK major version.
    #[must_use]
    pub fn with_sdk_version(mut self, version: String) -> Self {
        self.sdk_version = version;
        self
    }

    /// Returns the publishable key.
    #[must_use]
    pub fn publishable_key(&self) -> &str {
        &self.publishable_key
    }

    /// Returns the configured SDK major version.
    #[must_use]
    pub fn sdk_version(&self) -> &str {
        &self.sdk_version
    }

    /// Returns the frontend API host, decoding it from the publishable key
    /// when it is not configured explicitly.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be decoded or the host is malformed.
    pub fn frontend_api(&self) -> Result<String, ProviderConfigError> {
        let host = match &self.frontend_api {
            Some(host) => host.trim().to_string(),
            None => decode_frontend_api(&self.publishable_key)?,
        };
        check_host(&host)?;
        Ok(host)
    }

    /// Returns the URL of the provider's browser SDK bundle.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend API host cannot be determined.
    pub fn script_url(&self) -> Result<String, ProviderConfigError> {
        let host = self.frontend_api()?;
        Ok(format!(
            "https://{host}/npm/@clerk/clerk-js@{}/dist/clerk.browser.js",
            self.sdk_version
        ))
    }

    /// Returns true if the key belongs to a production instance.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.publishable_key.starts_with(LIVE_KEY_PREFIX)
    }

    /// Checks that the configuration can be used to load the SDK.
    ///
    /// # Errors
    ///
    /// Returns the first problem found with the key, host or SDK version.
    pub fn validate(&self) -> Result<(), ProviderConfigError> {
        if self.publishable_key.trim().is_empty() {
            return Err(ProviderConfigError::MissingPublishableKey.into());
        }
        key_payload(&self.publishable_key)?;
        if self.sdk_version.is_empty() || !self.sdk_version.chars().all(|c| c.is_ascii_digit()) {
            return Err(ProviderConfigError::InvalidSdkVersion {
                version: self.sdk_version.clone(),
            }
            .into());
        }
        self.frontend_api()?;
        Ok(())
    }
}

fn key_payload(key: &str) -> Result<&str, ProviderConfigError> {
    key.strip_prefix(TEST_KEY_PREFIX)
        .or_else(|| key.strip_prefix(LIVE_KEY_PREFIX))
        .filter(|payload| !payload.is_empty())
        .ok_or_else(|| {
            ProviderConfigError::InvalidPublishableKey {
                reason: format!("expected '{TEST_KEY_PREFIX}' or '{LIVE_KEY_PREFIX}' prefix"),
            }
            .into()
        })
}

/// The key payload is the base64 encoded frontend API host followed by `$`.
fn decode_frontend_api(key: &str) -> Result<String, ProviderConfigError> {
    let payload = key_payload(key)?;

    let bytes = KEY_ENGINE.decode(payload).map_err(|e| {
        ProviderConfigError::InvalidPublishableKey {
            reason: format!("payload is not base64: {e}"),
        }
    })?;
    let decoded = String::from_utf8(bytes).map_err(|_| ProviderConfigError::InvalidPublishableKey {
        reason: "payload is not UTF-8".to_string(),
    })?;

    let host = decoded
        .strip_suffix('$')
        .ok_or_else(|| ProviderConfigError::InvalidPublishableKey {
            reason: "payload is missing its '$' terminator".to_string(),
        })?;

    tracing::debug!(frontend_api = %host, "Derived frontend API from publishable key");
    Ok(host.to_string())
}

fn check_host(host: &str) -> Result<(), ProviderConfigError> {
    let reason = if host.is_empty() {
        Some("host is empty")
    } else if host.contains("://") {
        Some("must be a bare host name without a scheme")
    } else if host.contains('/') {
        Some("must not contain a path")
    } else if !host.chars().all(is_host_char) {
        Some("may only contain letters, digits, '-', '.' and ':'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ProviderConfigError::InvalidFrontendApi {
            host: host.to_string(),
            reason: reason.to_string(),
        }
        .into()),
        None => Ok(()),
    }
}

fn is_host_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | ':')
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    fn test_key(host: &str) -> String {
        format!("pk_test_{}", STANDARD.encode(format!("{host}$")))
    }

    #[test]
    fn new_config_has_defaults() {
        let config = ProviderConfig::new(test_key("clerk.example.com"));
        assert_eq!(config.sdk_version(), "5");
        assert!(!config.is_live());
    }

    #[test]
    fn frontend_api_is_decoded_from_key() {
        let config = ProviderConfig::new(test_key("clerk.example.com"));
        assert_eq!(config.frontend_api().expect("decode"), "clerk.example.com");
    }

    #[test]
    fn frontend_api_decodes_unpadded_key() {
        let padded = test_key("sweet-owl-42.clerk.accounts.dev");
        let unpadded = padded.trim_end_matches('=').to_string();
        let config = ProviderConfig::new(unpadded);
        assert_eq!(
            config.frontend_api().expect("decode"),
            "sweet-owl-42.clerk.accounts.dev"
        );
    }

    #[test]
    fn explicit_frontend_api_wins() {
        let config = ProviderConfig::new(test_key("clerk.example.com"))
            .with_frontend_api("auth.example.org".to_string());
        assert_eq!(config.frontend_api().expect("host"), "auth.example.org");
    }

    #[test]
    fn script_url_points_at_browser_bundle() {
        let config = ProviderConfig::new(test_key("clerk.example.com"))
            .with_sdk_version("6".to_string());
        assert_eq!(
            config.script_url().expect("url"),
            "https://clerk.example.com/npm/@clerk/clerk-js@6/dist/clerk.browser.js"
        );
    }

    #[test]
    fn validate_accepts_well_formed_config() {
        let config = ProviderConfig::new(test_key("clerk.example.com"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_key() {
        let err = ProviderConfig::new(String::new())
            .validate()
            .expect_err("empty key");
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn validate_rejects_secret_key() {
        let err = ProviderConfig::new("sk_test_abc".to_string())
            .validate()
            .expect_err("secret key");
        assert!(err.to_string().contains("prefix"));
    }

    #[test]
    fn validate_rejects_key_without_terminator() {
        let key = format!("pk_live_{}", STANDARD.encode("clerk.example.com"));
        let config = ProviderConfig::new(key);
        assert!(config.is_live());
        let err = config.validate().expect_err("no terminator");
        assert!(err.to_string().contains("terminator"));
    }

    #[test]
    fn validate_rejects_host_with_scheme() {
        let config = ProviderConfig::new(test_key("clerk.example.com"))
            .with_frontend_api("https://clerk.example.com".to_string());
        let err = config.validate().expect_err("scheme");
        assert!(err.to_string().contains("without a scheme"));
    }

    #[test]
    fn validate_rejects_host_with_url_delimiters() {
        for host in ["evil.com#", "evil.com?x=1", "user@clerk.example.com", "clerk example.com"] {
            let config = ProviderConfig::new(test_key("clerk.example.com"))
                .with_frontend_api(host.to_string());
            let err = config.validate().expect_err(host);
            assert!(err.to_string().contains("may only contain"), "{host}: {err}");
        }
    }

    #[test]
    fn validate_accepts_host_with_port() {
        let config = ProviderConfig::new(test_key("clerk.example.com"))
            .with_frontend_api("localhost:8443".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_numeric_sdk_version() {
        let config = ProviderConfig::new(test_key("clerk.example.com"))
            .with_sdk_version("latest".to_string());
        let err = config.validate().expect_err("version");
        assert!(err.to_string().contains("latest"));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let json = format!(r#"{{"publishable_key": "{}"}}"#, test_key("clerk.example.com"));
        let config: ProviderConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(config.sdk_version(), "5");
        assert_eq!(config.frontend_api().expect("host"), "clerk.example.com");
    }
}
