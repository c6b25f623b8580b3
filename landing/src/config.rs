//! Page configuration injected at startup.
//!
//! DESIGN
//! ======
//! The server resolves the backend base address once at boot and passes a
//! `PageConfig` into the root component. The same values are written into the
//! document head as `<meta>` tags so the hydrating client reads exactly what
//! the server rendered with, instead of consulting the environment ad hoc.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend base address used when nothing is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// `<meta name=...>` carrying the backend base address.
pub const BACKEND_URL_META: &str = "agentforge:backend-url";

/// `<meta name=...>` carrying the copyright year shown in the footer.
pub const COPYRIGHT_YEAR_META: &str = "agentforge:year";

/// Fallback copyright year when neither the server nor the browser supplies one.
pub const DEFAULT_COPYRIGHT_YEAR: i32 = 2025;

/// Base address of the analysis backend, without a trailing slash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl BackendConfig {
    /// Build from a raw base address. Trailing slashes are trimmed and an
    /// empty value falls back to [`DEFAULT_BACKEND_URL`].
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self { base_url: trimmed.to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST` target for code analysis.
    #[must_use]
    pub fn analyze_url(&self) -> String {
        format!("{}/api/analyze", self.base_url)
    }

    /// `GET` target for the issues-fixed-today counter.
    #[must_use]
    pub fn metrics_url(&self) -> String {
        format!("{}/api/metrics/issues-fixed-today", self.base_url)
    }

    /// `GET` target for the social-proof payload.
    #[must_use]
    pub fn social_proof_url(&self) -> String {
        format!("{}/api/social-proof", self.base_url)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BACKEND_URL.to_owned() }
    }
}

/// Everything the page needs from its host at render time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub backend: BackendConfig,
    pub copyright_year: i32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self { backend: BackendConfig::default(), copyright_year: DEFAULT_COPYRIGHT_YEAR }
    }
}

impl PageConfig {
    /// Rebuild the config from the raw `<meta>` contents written by the server.
    /// Missing or unparsable values fall back field by field.
    #[must_use]
    pub fn from_meta(backend_url: Option<&str>, year: Option<&str>, fallback_year: i32) -> Self {
        let backend = backend_url.map(BackendConfig::new).unwrap_or_default();
        let copyright_year = year
            .and_then(|raw| raw.trim().parse::<i32>().ok())
            .unwrap_or(fallback_year);
        Self { backend, copyright_year }
    }

    /// Read the injected config from the live document.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_document() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        let read = |name: &str| {
            document
                .as_ref()
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{name}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"))
        };
        let backend_url = read(BACKEND_URL_META);
        let year = read(COPYRIGHT_YEAR_META);
        let browser_year =
            i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(DEFAULT_COPYRIGHT_YEAR);
        Self::from_meta(backend_url.as_deref(), year.as_deref(), browser_year)
    }
}
