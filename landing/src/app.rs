//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{BACKEND_URL_META, COPYRIGHT_YEAR_META, PageConfig};
use crate::pages::landing::LandingPage;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is written into the head so the hydrating client starts from the
/// same values the server rendered with.
pub fn shell(options: LeptosOptions, config: PageConfig) -> impl IntoView {
    let backend_url = config.backend.base_url().to_owned();
    let year = config.copyright_year.to_string();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BACKEND_URL_META content=backend_url/>
                <meta name=COPYRIGHT_YEAR_META content=year/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the injected page config to every child and mounts the single
/// landing route.
#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/agentforge.css"/>
        <Title text="AgentForge · AI code review agents"/>
        <Meta name="description" content="Multi-agent security reviews for every pull request."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
