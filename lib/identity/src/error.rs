//! Error types for the identity crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `ProviderConfigError`: Identity provider settings that cannot be used
//! - `WidgetError`: Widget props that cannot be handed to the provider SDK

use std::fmt;

/// Errors from validating identity provider configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfigError {
    /// No publishable key was configured.
    MissingPublishableKey,
    /// The publishable key is malformed.
    InvalidPublishableKey { reason: String },
    /// The frontend API host is malformed.
    InvalidFrontendApi { host: String, reason: String },
    /// The SDK version is not a major version number.
    InvalidSdkVersion { version: String },
}

impl fmt::Display for ProviderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPublishableKey => {
                write!(f, "identity provider publishable key is missing")
            }
            Self::InvalidPublishableKey { reason } => {
                write!(f, "invalid publishable key: {reason}")
            }
            Self::InvalidFrontendApi { host, reason } => {
                write!(f, "invalid frontend API host '{host}': {reason}")
            }
            Self::InvalidSdkVersion { version } => {
                write!(f, "SDK version '{version}' must be a major version number")
            }
        }
    }
}

impl std::error::Error for ProviderConfigError {}

/// Errors from preparing widget props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// The props could not be serialized for the provider SDK.
    Serialize { details: String },
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize { details } => {
                write!(f, "failed to serialize widget props: {details}")
            }
        }
    }
}

impl std::error::Error for WidgetError {}
