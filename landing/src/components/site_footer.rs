//! Footer with copyright and legal links.

use leptos::prelude::*;

use crate::config::PageConfig;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = expect_context::<PageConfig>().copyright_year;
    view! {
        <footer class="site-footer">
            <p>{format!("© {year} AgentForge")}</p>
            <div class="site-footer__links">
                <a href="#">"Privacy"</a>
                <a href="#">"Terms"</a>
                <a href="#">"Security"</a>
            </div>
        </footer>
    }
}
