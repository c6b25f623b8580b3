use super::*;

#[test]
fn backend_config_defaults_to_localhost() {
    let cfg = BackendConfig::default();
    assert_eq!(cfg.base_url(), DEFAULT_BACKEND_URL);
}

#[test]
fn backend_config_trims_trailing_slashes() {
    let cfg = BackendConfig::new("https://api.agentforge.dev//");
    assert_eq!(cfg.base_url(), "https://api.agentforge.dev");
}

#[test]
fn backend_config_empty_value_falls_back() {
    assert_eq!(BackendConfig::new("   "), BackendConfig::default());
}

#[test]
fn backend_config_formats_endpoints() {
    let cfg = BackendConfig::new("http://backend:9000/");
    assert_eq!(cfg.analyze_url(), "http://backend:9000/api/analyze");
    assert_eq!(cfg.metrics_url(), "http://backend:9000/api/metrics/issues-fixed-today");
    assert_eq!(cfg.social_proof_url(), "http://backend:9000/api/social-proof");
}

#[test]
fn page_config_from_meta_reads_both_values() {
    let cfg = PageConfig::from_meta(Some("http://x.test"), Some("2031"), 1999);
    assert_eq!(cfg.backend.base_url(), "http://x.test");
    assert_eq!(cfg.copyright_year, 2031);
}

#[test]
fn page_config_from_meta_falls_back_per_field() {
    let cfg = PageConfig::from_meta(None, Some("not-a-year"), 2027);
    assert_eq!(cfg.backend, BackendConfig::default());
    assert_eq!(cfg.copyright_year, 2027);
}
