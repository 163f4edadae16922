//! Error handling foundation for portico.
//!
//! This module provides the `Result` type alias using rootcause, plus the
//! route errors owned by this crate. Each crate defines its own
//! domain-specific error types and adds layer-appropriate context via
//! `.context()` as errors propagate up the stack.

use rootcause::Report;
use std::fmt;

/// A Result type alias using rootcause's Report for error handling.
///
/// Each layer adds its own context via `.context()` as errors propagate.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

/// Errors from parsing an application route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The path was empty.
    Empty,
    /// The path does not start with `/`.
    MissingLeadingSlash { path: String },
    /// The path ends with `/` but is not the root.
    TrailingSlash { path: String },
    /// The path contains `//`.
    EmptySegment { path: String },
    /// The path contains a character that is not allowed in a route.
    InvalidCharacter { path: String, character: char },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "route path is empty"),
            Self::MissingLeadingSlash { path } => {
                write!(f, "route path '{path}' must start with '/'")
            }
            Self::TrailingSlash { path } => {
                write!(f, "route path '{path}' must not end with '/'")
            }
            Self::EmptySegment { path } => {
                write!(f, "route path '{path}' contains an empty segment")
            }
            Self::InvalidCharacter { path, character } => {
                write!(f, "route path '{path}' contains invalid character {character:?}")
            }
        }
    }
}

impl std::error::Error for RouteError {}
