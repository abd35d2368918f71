//! # client
//!
//! Leptos + WASM front end for the job-application mailer.
//!
//! Pages compose and send mail through the external API, and every form keeps
//! an auto-saved draft in `localStorage` through the `drafts` crate. This crate
//! supplies the browser halves of the draft seams: storage, timer, clock, and
//! the toast surface that shows "saved" / "recovered" / "cleared" messages.
//! The history page lists sent mail and hands one back to the job
//! application form for resending.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
