//! # client
//!
//! Leptos + WASM frontend for the Inkwell blog CMS.
//!
//! This crate contains pages, components, application state, the REST client
//! for the blog API, and the query cache that sits between them. The `ssr`
//! build is linked into the host server for rendering; the `hydrate` build
//! runs in the browser and performs every API call.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating, api base {}", util::config::api_base());
    leptos::mount::hydrate_body(app::App);
}
