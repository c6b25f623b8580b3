use super::*;
use leptos::tachys::view::RenderHtml;

#[test]
fn pricing_renders_three_tiers() {
    let html = view! { <Pricing/> }.to_html();
    assert_eq!(html.matches("pricing-card__name").count(), 3);
    assert!(html.contains("pricing-card--highlighted"));
    assert!(html.contains("/dev/mo"));
}

#[test]
fn only_team_tier_is_highlighted() {
    let highlighted: Vec<_> = PRICING_TIERS.iter().filter(|t| t.highlighted).map(|t| t.name).collect();
    assert_eq!(highlighted, ["Team"]);
}
