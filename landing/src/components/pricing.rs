//! Pricing tiers. Buttons are cosmetic.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use leptos::prelude::*;

/// One column of the pricing grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    /// Suffix after the price, e.g. `/dev/mo`.
    pub unit: Option<&'static str>,
    pub perks: &'static [&'static str],
    pub cta: &'static str,
    pub highlighted: bool,
}

pub const PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Free",
        price: "$0",
        unit: None,
        perks: &["10 analyses / month", "Public repos only"],
        cta: "Get started",
        highlighted: false,
    },
    PricingTier {
        name: "Team",
        price: "$49",
        unit: Some("/dev/mo"),
        perks: &["Unlimited private repos", "RLHF tuned agents", "Slack integration"],
        cta: "Start trial",
        highlighted: true,
    },
    PricingTier {
        name: "Enterprise",
        price: "Custom",
        unit: None,
        perks: &["Self-hosted", "Custom agents", "Dedicated SLA"],
        cta: "Talk to sales",
        highlighted: false,
    },
];

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="section">
            <h3 class="section__title">"Pricing"</h3>
            <div class="section__grid">
                {PRICING_TIERS.iter().map(|tier| view! { <PricingCard tier=*tier/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PricingCard(tier: PricingTier) -> impl IntoView {
    view! {
        <div class="pricing-card" class:pricing-card--highlighted=tier.highlighted>
            <div class="pricing-card__name">{tier.name}</div>
            <div class="pricing-card__price">
                {tier.price}
                {tier.unit.map(|unit| view! { <span class="pricing-card__unit">{unit}</span> })}
            </div>
            <ul class="pricing-card__perks">
                {tier.perks.iter().map(|perk| view! { <li>{*perk}</li> }).collect_view()}
            </ul>
            <button class="btn pricing-card__cta" class:btn--primary=tier.highlighted type="button">
                {tier.cta}
            </button>
        </div>
    }
}
