//! Props handed to the identity provider's prebuilt widgets.
//!
//! The widgets themselves are opaque: they render their own forms, talk to
//! the provider and perform redirects. The application only decides where
//! each widget lives, where it links to, and how its root element is sized.

use crate::error::WidgetError;
use portico_core::{Result, RoutePath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How a widget keeps track of its internal steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingMode {
    /// Steps live in URL sub-paths of the mount path (`/sign-in/factor-one`).
    #[default]
    Path,
}

/// CSS declarations keyed by property name.
pub type StyleRules = BTreeMap<String, String>;

/// Appearance overrides, keyed by the provider's element names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub elements: BTreeMap<String, StyleRules>,
}

impl Appearance {
    /// Element name of the outermost box a widget renders.
    pub const ROOT_BOX: &'static str = "rootBox";

    /// Stretches the widget root to the width of its container.
    #[must_use]
    pub fn full_width_root() -> Self {
        Self::default().with_element_style(Self::ROOT_BOX, "width", "100%")
    }

    /// Adds one CSS declaration for a provider element.
    #[must_use]
    pub fn with_element_style(mut self, element: &str, property: &str, value: &str) -> Self {
        self.elements
            .entry(element.to_string())
            .or_default()
            .insert(property.to_string(), value.to_string());
        self
    }

    /// Returns the declared value of `property` on `element`, if any.
    #[must_use]
    pub fn element_style(&self, element: &str, property: &str) -> Option<&str> {
        self.elements
            .get(element)
            .and_then(|rules| rules.get(property))
            .map(String::as_str)
    }
}

/// The prebuilt widgets the application mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    SignIn,
    SignUp,
}

impl WidgetKind {
    /// Returns the kind as a kebab-case string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SignIn => "sign-in",
            Self::SignUp => "sign-up",
        }
    }

    /// Returns the DOM id of the element hosting this widget.
    #[must_use]
    pub const fn host_id(self) -> &'static str {
        match self {
            Self::SignIn => "sign-in-widget",
            Self::SignUp => "sign-up-widget",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Props for the sign-in widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInProps {
    pub routing: RoutingMode,
    /// Route the widget is mounted at.
    pub path: RoutePath,
    /// Route the widget links to for creating an account.
    pub sign_up_url: RoutePath,
    pub appearance: Appearance,
}

impl SignInProps {
    /// Sign-in widget mounted at `/sign-in`, linking to `/sign-up`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            routing: RoutingMode::Path,
            path: RoutePath::SIGN_IN,
            sign_up_url: RoutePath::SIGN_UP,
            appearance: Appearance::full_width_root(),
        }
    }
}

/// Props for the sign-up widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpProps {
    pub routing: RoutingMode,
    /// Route the widget is mounted at.
    pub path: RoutePath,
    /// Route the widget links to for existing accounts.
    pub sign_in_url: RoutePath,
    pub appearance: Appearance,
}

impl SignUpProps {
    /// Sign-up widget mounted at `/sign-up`, linking to `/sign-in`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            routing: RoutingMode::Path,
            path: RoutePath::SIGN_UP,
            sign_in_url: RoutePath::SIGN_IN,
            appearance: Appearance::full_width_root(),
        }
    }
}

/// Props for any mountable widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WidgetProps {
    SignIn(SignInProps),
    SignUp(SignUpProps),
}

impl WidgetProps {
    /// Returns which widget these props configure.
    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::SignIn(_) => WidgetKind::SignIn,
            Self::SignUp(_) => WidgetKind::SignUp,
        }
    }

    /// Returns the route the widget is mounted at.
    #[must_use]
    pub fn path(&self) -> &RoutePath {
        match self {
            Self::SignIn(props) => &props.path,
            Self::SignUp(props) => &props.path,
        }
    }

    /// Serializes the props into the JSON object the provider SDK expects.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, WidgetError> {
        serde_json::to_string(self).map_err(|e| {
            WidgetError::Serialize {
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl From<SignInProps> for WidgetProps {
    fn from(props: SignInProps) -> Self {
        Self::SignIn(props)
    }
}

impl From<SignUpProps> for WidgetProps {
    fn from(props: SignUpProps) -> Self {
        Self::SignUp(props)
    }
}
