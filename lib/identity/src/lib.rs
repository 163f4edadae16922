//! Identity provider integration for portico.
//!
//! This crate provides:
//! - Provider configuration (`ProviderConfig`) and SDK location
//! - Props for the provider's prebuilt sign-in and sign-up widgets
//! - Identity error types
//!
//! # Delegation Model
//!
//! Everything that touches a credential happens inside the provider's
//! browser SDK: rendering the forms, verifying factors, issuing the session
//! and redirecting afterwards. portico only tells each widget where it is
//! mounted, where it links to, and how its root element is sized.
//!
//! # Example
//!
//! ```
//! use portico_identity::{ProviderConfig, SignInProps, WidgetProps};
//!
//! // "pk_test_" followed by base64("clerk.example.com$")
//! let config = ProviderConfig::new("pk_test_Y2xlcmsuZXhhbXBsZS5jb20k".to_string());
//! assert!(config.validate().is_ok());
//! assert_eq!(
//!     config.script_url().unwrap(),
//!     "https://clerk.example.com/npm/@clerk/clerk-js@5/dist/clerk.browser.js"
//! );
//!
//! let props = WidgetProps::from(SignInProps::standard());
//! let json = props.to_json().unwrap();
//! assert!(json.contains(r#""signUpUrl":"/sign-up""#));
//! ```

pub mod error;
pub mod provider;
pub mod widget;

// Re-export main types at crate root
pub use error::{ProviderConfigError, WidgetError};
pub use provider::ProviderConfig;
pub use widget::{Appearance, RoutingMode, SignInProps, SignUpProps, StyleRules, WidgetKind, WidgetProps};
