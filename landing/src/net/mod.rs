//! Networking modules for the analysis backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the three HTTP calls the page makes and `types` defines the
//! wire schema plus the parse boundary for analyze responses.

pub mod api;
pub mod types;

/// Failures at the widget's network boundary.
///
/// `Transport` and `Decode` display the underlying message verbatim because
/// the playground shows it to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built, sent, or its body read.
    #[error("{0}")]
    Transport(String),

    /// The response body was not valid JSON.
    #[error("{0}")]
    Decode(String),

    /// The response body was JSON but not the expected shape.
    #[error("unexpected response shape: {0}")]
    Schema(String),

    /// Called outside a browser (server rendering).
    #[error("not available on server")]
    Unavailable,
}
