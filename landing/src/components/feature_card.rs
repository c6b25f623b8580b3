//! Card used by the "How it works" grid.

use leptos::prelude::*;

/// Icon + title header over a short description.
#[component]
pub fn FeatureCard(icon: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-card__header">
                <span class="feature-card__icon" aria-hidden="true">{icon}</span>
                <h4 class="feature-card__title">{title}</h4>
            </div>
            <p class="feature-card__body">{children()}</p>
        </div>
    }
}
