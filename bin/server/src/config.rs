//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables.
//!
//! See [`ProviderConfig`] for identity provider configuration, set through
//! `IDENTITY__PUBLISHABLE_KEY`, `IDENTITY__FRONTEND_API` and
//! `IDENTITY__SDK_VERSION`.

use config::builder::{ConfigBuilder, DefaultState};
use portico_core::Result;
use portico_identity::{ProviderConfig, ProviderConfigError};
use serde::Deserialize;

/// Server configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Identity provider configuration.
    pub identity: ProviderConfig,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> std::result::Result<Self, config::ConfigError> {
        Self::load(config::Config::builder().add_source(
            config::Environment::default()
                .separator("__")
                .try_parsing(true),
        ))
    }

    /// Builds and deserializes configuration from an arbitrary source stack.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn load(
        builder: ConfigBuilder<DefaultState>,
    ) -> std::result::Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }
}

/// Attributes of the provider SDK `<script>` tag injected into every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkScript {
    pub src: String,
    pub publishable_key: String,
}

impl SdkScript {
    /// Resolves the script tag for a validated provider configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider configuration is invalid.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderConfigError> {
        config.validate()?;
        Ok(Self {
            src: config.script_url()?,
            publishable_key: config.publishable_key().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "pk_test_" followed by base64("clerk.example.com$")
    const KEY: &str = "pk_test_Y2xlcmsuZXhhbXBsZS5jb20k";

    #[test]
    fn load_reads_nested_identity_section() {
        let builder = config::Config::builder()
            .set_override("identity.publishable_key", KEY)
            .expect("override");
        let config = ServerConfig::load(builder).expect("load");
        assert_eq!(config.identity.publishable_key(), KEY);
        assert_eq!(config.identity.sdk_version(), "5");
    }

    #[test]
    fn load_fails_without_publishable_key() {
        assert!(ServerConfig::load(config::Config::builder()).is_err());
    }

    #[test]
    fn sdk_script_uses_derived_frontend_api() {
        let script = SdkScript::from_config(&ProviderConfig::new(KEY.to_string())).expect("script");
        assert_eq!(
            script.src,
            "https://clerk.example.com/npm/@clerk/clerk-js@5/dist/clerk.browser.js"
        );
        assert_eq!(script.publishable_key, KEY);
    }

    #[test]
    fn sdk_script_rejects_invalid_config() {
        let config = ProviderConfig::new("sk_live_secret".to_string());
        assert!(SdkScript::from_config(&config).is_err());
    }
}
