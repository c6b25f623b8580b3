//! # landing
//!
//! Leptos + WASM frontend for the AgentForge marketing site.
//!
//! This crate contains the landing page, its static sections, the code
//! playground widget, view state, and the REST helpers that talk to the
//! analysis backend. The `ssr` feature is used by the root server binary;
//! the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use crate::config::PageConfig;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = PageConfig::from_document();
    log::info!("hydrating landing page against {}", config.backend.base_url());
    leptos::mount::hydrate_body(move || view! { <App config/> });
}
