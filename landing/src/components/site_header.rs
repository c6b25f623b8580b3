//! Top bar with logo, in-page navigation, and GitHub calls to action.

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use leptos::prelude::*;

/// In-page anchors and their labels, in display order.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#how", "How it works"),
    ("#security", "Security"),
    ("#pricing", "Pricing"),
    ("/test", "Status"),
    ("#docs", "Docs"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__brand">
                <div class="site-header__logo">"AF"</div>
                <span class="site-header__name">"AgentForge"</span>
            </div>
            <nav class="site-header__nav">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| view! { <a class="site-header__link" href=*href>{*label}</a> })
                    .collect_view()}
            </nav>
            <div class="site-header__actions">
                <a class="btn btn--outline site-header__star" href="#">
                    <span aria-hidden="true">"★"</span>
                    " Star on GitHub"
                </a>
                <a class="btn btn--primary" href="#">"Install GitHub App"</a>
            </div>
        </header>
    }
}
