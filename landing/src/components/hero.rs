//! Hero section: headline, calls to action, live counter, and the playground.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::playground::Playground;
use crate::state::shell::ShellState;
use crate::util::format::format_count;

#[component]
pub fn Hero() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let count = move || format_count(shell.with(ShellState::issues_fixed_today));
    let social = move || shell.with(ShellState::social_proof_text);

    view! {
        <section class="hero">
            <div class="hero__copy">
                <Badge>"Used by engineers at Google, Meta, Stripe"</Badge>
                {move || social().map(|text| view! { <div class="hero__social"><Badge>{text}</Badge></div> })}
                <h1 class="hero__headline">"AI Agents That Review Code Better Than Senior Engineers"</h1>
                <p class="hero__lede">
                    "Ship fast without shipping vulns. Multi-agent security reviews, RLHF-tuned, integrated with your CI."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--dark" href="#">
                        <span aria-hidden="true">"🚀"</span>
                        " Start free trial"
                    </a>
                    <a class="btn btn--outline" href="#">
                        "Book demo "
                        <span aria-hidden="true">"›"</span>
                    </a>
                </div>
                <div class="hero__metric">
                    <span class="hero__metric-icon" aria-hidden="true">"🛡"</span>
                    " Issues fixed today: "
                    <span class="hero__metric-value">{count}</span>
                </div>
            </div>
            <div class="hero__demo">
                <div class="hero__glow" aria-hidden="true"></div>
                <div class="hero__panel">
                    <Playground/>
                </div>
            </div>
        </section>
    }
}
