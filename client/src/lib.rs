//! # client
//!
//! Leptos + WASM frontend for Nestmate, a roommate-matching and
//! property-listing site.
//!
//! This crate contains pages, components, application state, mock data and
//! the simulated API layer. All data is local: static fixtures plus flags
//! in `localStorage`. The `hydrate` feature builds the browser bundle; the
//! `ssr` feature lets the server render the first frame.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod data;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    log::info!("nestmate client hydrating");
    leptos::mount::hydrate_body(app::App);
}
