use super::*;

// =============================================================
// Helpers
// =============================================================

fn report(body: &str) -> AnalysisReport {
    match parse_analysis_body(body).expect("body should parse") {
        AnalysisResult::Report(report) => report,
        AnalysisResult::Error(message) => panic!("expected report, got error: {message}"),
    }
}

// =============================================================
// AnalysisRequest
// =============================================================

#[test]
fn analysis_request_hardcodes_javascript() {
    let req = AnalysisRequest::new("let x = 1;");
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "code": "let x = 1;", "language": "javascript" })
    );
}

// =============================================================
// parse_analysis_body
// =============================================================

#[test]
fn parse_full_report_preserves_server_order() {
    let parsed = report(
        r#"{
            "score": 42,
            "findings": [
                {"severity":"LOW","title":"b","line":9,"description":"d2","recommendation":"r2"},
                {"severity":"HIGH","title":"a","line":3,"description":"d1","recommendation":"r1"}
            ],
            "steps": [{"agent":"Scanner","action":"scan","elapsed_ms":120}]
        }"#,
    );
    assert_eq!(parsed.score, Some(42.0));
    assert_eq!(parsed.findings.len(), 2);
    assert_eq!(parsed.findings[0].severity, "LOW");
    assert_eq!(parsed.findings[1].line, Some(3));
    assert_eq!(parsed.steps[0].elapsed_ms, 120);
}

#[test]
fn parse_missing_lists_default_to_empty() {
    let parsed = report(r#"{"score": 7}"#);
    assert!(parsed.findings.is_empty());
    assert!(parsed.steps.is_empty());
}

#[test]
fn parse_null_lists_default_to_empty() {
    let parsed = report(r#"{"score": 7, "findings": null, "steps": null}"#);
    assert!(parsed.findings.is_empty());
    assert!(parsed.steps.is_empty());
}

#[test]
fn parse_accepts_integer_valued_floats() {
    let parsed = report(r#"{"steps":[{"agent":"a","action":"b","elapsed_ms":120.0}]}"#);
    assert_eq!(parsed.steps[0].elapsed_ms, 120);
    assert_eq!(parsed.score, None);
}

#[test]
fn parse_error_field_becomes_error_record() {
    let parsed = parse_analysis_body(r#"{"error":"rate limited"}"#).unwrap();
    assert_eq!(parsed, AnalysisResult::Error("rate limited".to_owned()));
}

#[test]
fn parse_non_string_error_is_still_an_error_record() {
    let parsed = parse_analysis_body(r#"{"error": 123}"#).unwrap();
    assert_eq!(parsed, AnalysisResult::Error("123".to_owned()));

    let parsed = parse_analysis_body(r#"{"error": {"code": "RATE_LIMIT"}, "findings": []}"#).unwrap();
    assert_eq!(parsed, AnalysisResult::Error(r#"{"code":"RATE_LIMIT"}"#.to_owned()));
}

#[test]
fn parse_null_or_empty_error_falls_through_to_report() {
    let parsed = report(r#"{"error": null, "score": 3}"#);
    assert_eq!(parsed.score, Some(3.0));
    let parsed = report(r#"{"error": "", "score": 4}"#);
    assert_eq!(parsed.score, Some(4.0));
}

#[test]
fn parse_missing_or_null_line_is_none() {
    let parsed = report(r#"{"findings":[{"title":"a"},{"title":"b","line":null},{"title":"c","line":12.0}]}"#);
    assert_eq!(parsed.findings[0].line, None);
    assert_eq!(parsed.findings[1].line, None);
    assert_eq!(parsed.findings[2].line, Some(12));
}

#[test]
fn parse_non_json_is_decode_error() {
    let err = parse_analysis_body("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn parse_wrong_shape_is_schema_error() {
    let err = parse_analysis_body(r#"{"findings": "none"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Schema(_)));
    let err = parse_analysis_body("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, ApiError::Schema(_)));
}

#[test]
fn parse_rejects_fractional_line_numbers() {
    let err = parse_analysis_body(r#"{"findings":[{"line":2.5}]}"#).unwrap_err();
    assert!(matches!(err, ApiError::Schema(_)));
}

// =============================================================
// Metrics / SocialProof
// =============================================================

#[test]
fn metrics_parse_count() {
    let metrics: Metrics = serde_json::from_str(r#"{"count": 3051}"#).unwrap();
    assert_eq!(metrics.count, 3051);
}

#[test]
fn metrics_without_count_is_rejected() {
    assert!(serde_json::from_str::<Metrics>(r#"{"detail":"Not Found"}"#).is_err());
}

#[test]
fn social_proof_text_from_string_payload() {
    let proof = SocialProof(serde_json::json!("  Trusted by 500 teams "));
    assert_eq!(proof.display_text().as_deref(), Some("Trusted by 500 teams"));
}

#[test]
fn social_proof_text_uses_first_known_key() {
    let proof = SocialProof(serde_json::json!({ "text": "third", "message": "second" }));
    assert_eq!(proof.display_text().as_deref(), Some("second"));
}

#[test]
fn social_proof_without_text_displays_nothing() {
    assert_eq!(SocialProof(serde_json::json!({ "logos": ["a", "b"] })).display_text(), None);
    assert_eq!(SocialProof(serde_json::json!({ "headline": "   " })).display_text(), None);
    assert_eq!(SocialProof(serde_json::json!(17)).display_text(), None);
}
