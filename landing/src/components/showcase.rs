//! Fixed marketing sections: "How it works" and "Security showcase".

use leptos::prelude::*;

use crate::components::feature_card::FeatureCard;

const SECURITY_CARDS: [(&str, &str); 3] = [
    ("CVE-2024-12345 caught pre-prod", "Prevented secrets exposure in Node microservice before release."),
    ("Vs competitors", "Higher detection rate with fewer false positives."),
    ("Compliance ready", "SOC2, GDPR controls with audit logs and SSO."),
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how" class="section">
            <h3 class="section__title">"How it works"</h3>
            <div class="section__grid">
                <FeatureCard icon="✨" title="Multi-agent pipeline">
                    "Experts collaborate to scan, reason and remediate in seconds."
                </FeatureCard>
                <FeatureCard icon="🔒" title="Privacy-first">
                    "We never train on your private code. SOC2-ready controls."
                </FeatureCard>
                <FeatureCard icon="🛡" title="Better than rules">
                    "AI reasoning catches what rule-based tools miss."
                </FeatureCard>
            </div>
        </section>
    }
}

#[component]
pub fn SecurityShowcase() -> impl IntoView {
    view! {
        <section id="security" class="section">
            <h3 class="section__title">"Security showcase"</h3>
            <div class="section__grid">
                {SECURITY_CARDS
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="showcase-card">
                                <div class="showcase-card__title">{*title}</div>
                                <p class="showcase-card__body">{*body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
