//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the health probe, the compiled client bundle under `/pkg`, and
//! Leptos SSR of the landing page into one Axum router. The page config is
//! rebuilt per render so the footer year follows the calendar.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use landing::app::{App, shell};
use landing::config::{BackendConfig, PageConfig};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;

/// Routes that do not depend on Leptos configuration.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Page config for one render.
fn page_config(backend: &BackendConfig) -> PageConfig {
    PageConfig { backend: backend.clone(), copyright_year: current_year() }
}

fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

/// Full site: health probe + Leptos SSR at `/` + client bundle at `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section / `LEPTOS_*` env vars).
pub fn leptos_app(site: &SiteConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;

    let routes = generate_route_list({
        let backend = site.backend.clone();
        move || view! { <App config=page_config(&backend)/> }
    });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            let backend = site.backend.clone();
            move || shell(opts.clone(), page_config(&backend))
        })
        .with_state(leptos_options.clone());

    // Compiled WASM, JS glue, and stylesheet.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
