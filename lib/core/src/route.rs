//! Validated application route paths.
//!
//! Route paths are absolute, slash-separated and free of query strings or
//! fragments, so they can be handed to both the router and the identity
//! provider widget without further checks.

use crate::error::{Result, RouteError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// An absolute route path served by the application, such as `/sign-in`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePath(Cow<'static, str>);

impl RoutePath {
    /// The application root.
    pub const ROOT: Self = Self(Cow::Borrowed("/"));

    /// The route hosting the sign-in widget.
    pub const SIGN_IN: Self = Self(Cow::Borrowed("/sign-in"));

    /// The route hosting the sign-up widget.
    pub const SIGN_UP: Self = Self(Cow::Borrowed("/sign-up"));

    /// Parses and validates a route path.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] if the path is empty, relative, has a
    /// trailing slash or empty segment, or contains characters outside
    /// `[A-Za-z0-9-._~/]`.
    pub fn parse(path: impl Into<String>) -> Result<Self, RouteError> {
        let path = path.into();

        if path.is_empty() {
            return Err(RouteError::Empty.into());
        }
        if !path.starts_with('/') {
            return Err(RouteError::MissingLeadingSlash { path }.into());
        }
        if let Some(character) = path.chars().find(|c| !is_route_char(*c)) {
            return Err(RouteError::InvalidCharacter { path, character }.into());
        }
        if path.contains("//") {
            return Err(RouteError::EmptySegment { path }.into());
        }
        if path.len() > 1 && path.ends_with('/') {
            return Err(RouteError::TrailingSlash { path }.into());
        }

        Ok(Self(Cow::Owned(path)))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `location` is this route or one of its sub-paths.
    ///
    /// Path-routed widgets keep their internal steps under their mount
    /// path, so `/sign-in/factor-one` belongs to `/sign-in`.
    #[must_use]
    pub fn owns(&self, location: &str) -> bool {
        let location = location.split(['?', '#']).next().unwrap_or_default();
        if self.as_str() == "/" {
            return location.starts_with('/');
        }
        match location.strip_prefix(self.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

fn is_route_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~' | '/')
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for RoutePath {
    type Err = rootcause::Report<RouteError>;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RoutePath {
    type Error = rootcause::Report<RouteError>;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<RoutePath> for String {
    fn from(path: RoutePath) -> Self {
        path.0.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_valid_routes() {
        for route in [RoutePath::ROOT, RoutePath::SIGN_IN, RoutePath::SIGN_UP] {
            let reparsed = RoutePath::parse(route.as_str()).expect("constant should parse");
            assert_eq!(reparsed, route);
        }
    }

    #[test]
    fn parse_accepts_nested_paths() {
        let path = RoutePath::parse("/account/sign-in").expect("should parse");
        assert_eq!(path.as_str(), "/account/sign-in");
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(RoutePath::parse("").is_err());
    }

    #[test]
    fn parse_rejects_relative_path() {
        let err = RoutePath::parse("sign-in").expect_err("relative path");
        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn parse_rejects_trailing_slash() {
        let err = RoutePath::parse("/sign-in/").expect_err("trailing slash");
        assert!(err.to_string().contains("must not end with '/'"));
    }

    #[test]
    fn parse_rejects_empty_segment() {
        assert!(RoutePath::parse("/sign-in//factor-one").is_err());
    }

    #[test]
    fn parse_rejects_query_and_fragment() {
        assert!(RoutePath::parse("/sign-in?redirect=/").is_err());
        assert!(RoutePath::parse("/sign-in#top").is_err());
        assert!(RoutePath::parse("/sign in").is_err());
    }

    #[test]
    fn owns_matches_self_and_sub_paths() {
        let route = RoutePath::SIGN_IN;
        assert!(route.owns("/sign-in"));
        assert!(route.owns("/sign-in/factor-one"));
        assert!(route.owns("/sign-in?redirect_url=%2F"));
        assert!(!route.owns("/sign-in-help"));
        assert!(!route.owns("/sign-up"));
    }

    #[test]
    fn root_owns_everything_absolute() {
        assert!(RoutePath::ROOT.owns("/"));
        assert!(RoutePath::ROOT.owns("/sign-up"));
    }

    #[test]
    fn serde_uses_plain_string() {
        let json = serde_json::to_string(&RoutePath::SIGN_UP).expect("serialize");
        assert_eq!(json, "\"/sign-up\"");

        let parsed: RoutePath = serde_json::from_str("\"/sign-in\"").expect("deserialize");
        assert_eq!(parsed, RoutePath::SIGN_IN);

        assert!(serde_json::from_str::<RoutePath>("\"sign-in\"").is_err());
    }
}
