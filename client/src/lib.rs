//! # client
//!
//! Leptos front-end for the resident training portal.
//!
//! This crate contains the app shell, pages, components, and the signal-backed
//! state that wraps the `portal` core (`SessionView`, `RecordCatalog`). Built
//! with the `csr` feature it mounts itself into the page body; without it the
//! crate compiles natively so helpers can be unit tested.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Browser entry point: install logging and the panic hook, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
