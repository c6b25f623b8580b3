//! Text formatting for numbers and labels shown on the page.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group digits in threes with commas (`1247` -> `"1,247"`).
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Risk score text. Integral scores drop the fraction; a missing score is a dash.
#[must_use]
pub fn format_score(score: Option<f64>) -> String {
    match score {
        None => "—".to_owned(),
        #[allow(clippy::cast_possible_truncation)]
        Some(s) if s.is_finite() && s.fract() == 0.0 && s.abs() < 1e15 => format!("{}", s as i64),
        Some(s) => format!("{s}"),
    }
}

#[must_use]
pub fn format_elapsed(elapsed_ms: u64) -> String {
    format!("{elapsed_ms}ms")
}

/// BEM modifier for a finding row. The severity label itself is shown as-is.
#[must_use]
pub fn severity_modifier(severity: &str) -> &'static str {
    match severity.trim().to_ascii_lowercase().as_str() {
        "critical" => "critical",
        "high" => "high",
        "medium" | "moderate" => "medium",
        "low" => "low",
        _ => "info",
    }
}
