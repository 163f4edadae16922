//! portico web server and UI.
//!
//! This crate provides the Leptos-based sign-in gateway: pages that wrap
//! the identity provider's prebuilt widgets in the application's own
//! layout, plus the axum server that renders them.

#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "hydrate")]
mod browser;
mod lifecycle;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
