//! # luckydraw
//!
//! Leptos + WASM front-end for a retail prize-drawing campaign: a public
//! registration form (name, phone, branch, receipt photo) and an operator
//! panel that tallies registrants and draws random winners.
//!
//! All business logic (storage, counting, deduplication, winner selection)
//! lives in a remote script-hosted endpoint. This crate collects input,
//! normalizes the receipt image in the browser, and renders what the
//! endpoint answers.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
