//! Small pill used for claims and social proof in the hero.

use leptos::prelude::*;

/// Rounded check-mark badge wrapping arbitrary content.
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="badge">
            <span class="badge__icon" aria-hidden="true">"✓"</span>
            {children()}
        </span>
    }
}
