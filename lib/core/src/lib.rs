//! Core types and utilities for the portico sign-in gateway.
//!
//! This crate provides the error handling foundation and the validated
//! route paths shared by the identity and server crates.

pub mod error;
pub mod route;

pub use error::{Result, RouteError};
pub use route::RoutePath;
