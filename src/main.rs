#![recursion_limit = "256"]

mod config;
mod routes;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let site = match config::SiteConfig::from_env() {
        Ok(site) => site,
        Err(e) => {
            tracing::error!(error = %e, "configuration invalid");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(backend = site.backend.base_url(), "analysis backend configured");

    let app = match routes::leptos_app(&site) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router init failed");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", site.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, port = site.port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(port = site.port, "agentforge listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
