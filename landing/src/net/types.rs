//! Wire DTOs for the analysis backend.
//!
//! DESIGN
//! ======
//! The backend is trusted for shape but not for completeness: optional lists
//! default to empty and integer fields accept integer-valued floats. Anything
//! else that fails to match is rejected at the boundary (`parse_analysis_body`)
//! and surfaces as an error record rather than a half-rendered report.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

use super::ApiError;

/// Language tag sent with every analysis request.
pub const ANALYSIS_LANGUAGE: &str = "javascript";

/// Body of `POST /api/analyze`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Source text exactly as it sits in the editor.
    pub code: String,
    /// Language hint; always [`ANALYSIS_LANGUAGE`].
    pub language: String,
}

impl AnalysisRequest {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into(), language: ANALYSIS_LANGUAGE.to_owned() }
    }
}

/// A single issue reported by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Free-form severity label (e.g. `"HIGH"`), displayed verbatim.
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub title: String,
    /// 1-based line in the submitted source; `None` when the backend omits it.
    #[serde(default, deserialize_with = "deserialize_opt_u64_from_number")]
    pub line: Option<u64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommendation: String,
}

/// One processing stage logged by the backend's agent pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub agent: String,
    #[serde(default)]
    pub action: String,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub elapsed_ms: u64,
}

/// Successful analysis payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Risk score; `None` when the backend omits it.
    #[serde(default)]
    pub score: Option<f64>,
    /// Findings in server order.
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub findings: Vec<Finding>,
    /// Pipeline steps in server order.
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub steps: Vec<Step>,
}

/// Outcome of one analysis cycle as held by the playground.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisResult {
    /// Transport, decode, or backend-reported failure; message shown verbatim.
    Error(String),
    /// Parsed report.
    Report(AnalysisReport),
}

/// Body of `GET /api/metrics/issues-fixed-today`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub count: u64,
}

/// Opaque body of `GET /api/social-proof`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialProof(pub serde_json::Value);

/// Object keys checked, in order, for a displayable social-proof line.
const SOCIAL_PROOF_TEXT_KEYS: [&str; 4] = ["headline", "message", "text", "label"];

impl SocialProof {
    /// Text suitable for a badge, if the payload carries any.
    #[must_use]
    pub fn display_text(&self) -> Option<String> {
        let text = match &self.0 {
            serde_json::Value::String(s) => Some(s.as_str()),
            serde_json::Value::Object(map) => SOCIAL_PROOF_TEXT_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(serde_json::Value::as_str)),
            _ => None,
        }?;
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_owned())
    }
}

/// Turn a raw analyze response body into a result.
///
/// The HTTP status is deliberately not consulted: any JSON body is accepted.
/// A top-level `error` field that is neither `null` nor `""` becomes an error
/// record: strings verbatim, anything else as its JSON text.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is not JSON and
/// [`ApiError::Schema`] when it is JSON but not a report.
pub fn parse_analysis_body(body: &str) -> Result<AnalysisResult, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Some(message) = value.get("error").and_then(error_message) {
        return Ok(AnalysisResult::Error(message));
    }
    if !value.is_object() {
        return Err(ApiError::Schema("expected a JSON object".to_owned()));
    }
    let report = serde_json::from_value::<AnalysisReport>(value).map_err(|e| ApiError::Schema(e.to_string()))?;
    Ok(AnalysisResult::Report(report))
}

fn error_message(error: &serde_json::Value) -> Option<String> {
    match error {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn deserialize_vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_opt_u64_from_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        value => u64_from_value::<D::Error>(value).map(Some),
    }
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    u64_from_value(serde_json::Value::deserialize(deserializer)?)
}

fn u64_from_value<E: serde::de::Error>(value: serde_json::Value) -> Result<u64, E> {
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(E::custom("expected non-negative integer-compatible number"))
        }
        _ => Err(E::custom("expected number")),
    }
}
