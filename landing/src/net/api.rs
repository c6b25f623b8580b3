//! REST calls to the analysis backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/`ApiError::Unavailable` since the
//! page only talks to the backend from the browser.
//!
//! ERROR HANDLING
//! ==============
//! `analyze` reports every failure as an `ApiError` so the playground can show
//! it. The two mount-time reads return `Option` because their failures are
//! swallowed by design; they are logged to the console and nothing else.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::ApiError;
use super::types::{AnalysisRequest, AnalysisResult, Metrics, SocialProof};
use crate::config::BackendConfig;

#[cfg(any(test, feature = "hydrate"))]
fn read_failed_message(what: &str, err: &str) -> String {
    format!("{what} unavailable: {err}")
}

/// Transport failure carrying the browser's own message when there is one
/// (`"Failed to fetch"`), falling back to the full error text.
#[cfg(any(test, feature = "hydrate"))]
fn transport_error(js_message: Option<&str>, fallback: &dyn std::fmt::Display) -> ApiError {
    match js_message {
        Some(message) if !message.is_empty() => ApiError::Transport(message.to_owned()),
        _ => ApiError::Transport(fallback.to_string()),
    }
}

#[cfg(feature = "hydrate")]
fn from_gloo(err: &gloo_net::Error) -> ApiError {
    let js_message = match err {
        gloo_net::Error::JsError(js) => Some(js.message.as_str()),
        _ => None,
    };
    transport_error(js_message, err)
}

/// Submit code for analysis via `POST /api/analyze`.
///
/// The HTTP status is not checked; whatever JSON comes back is parsed.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] if the request fails, [`ApiError::Decode`]
/// or [`ApiError::Schema`] if the body cannot be parsed, and
/// [`ApiError::Unavailable`] during server rendering.
pub async fn analyze(backend: &BackendConfig, request: &AnalysisRequest) -> Result<AnalysisResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&backend.analyze_url())
            .json(request)
            .map_err(|e| from_gloo(&e))?
            .send()
            .await
            .map_err(|e| from_gloo(&e))?;
        let body = resp.text().await.map_err(|e| from_gloo(&e))?;
        super::types::parse_analysis_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (backend, request);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the issues-fixed-today counter from `/api/metrics/issues-fixed-today`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_metrics(backend: &BackendConfig) -> Option<Metrics> {
    #[cfg(feature = "hydrate")]
    {
        match fetch_json::<Metrics>(&backend.metrics_url()).await {
            Ok(metrics) => Some(metrics),
            Err(e) => {
                log::warn!("{}", read_failed_message("metrics", &e));
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = backend;
        None
    }
}

/// Fetch the social-proof payload from `/api/social-proof`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_social_proof(backend: &BackendConfig) -> Option<SocialProof> {
    #[cfg(feature = "hydrate")]
    {
        match fetch_json::<SocialProof>(&backend.social_proof_url()).await {
            Ok(proof) => Some(proof),
            Err(e) => {
                log::warn!("{}", read_failed_message("social proof", &e));
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = backend;
        None
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url).send().await.map_err(|e| e.to_string())?;
    resp.json::<T>().await.map_err(|e| e.to_string())
}
