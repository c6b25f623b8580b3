//! Landing page: static marketing sections around the playground.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single route of the site. On mount in the browser it starts two
//! independent reads (issues-fixed counter, social proof). Each writes into
//! `ShellState` only if the page is still mounted when it finishes; failures
//! leave the defaults in place.

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::pricing::Pricing;
use crate::components::showcase::{HowItWorks, SecurityShowcase};
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::state::shell::ShellState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let shell = RwSignal::new(ShellState::default());
    provide_context(shell);

    #[cfg(feature = "hydrate")]
    {
        let backend = expect_context::<crate::config::PageConfig>().backend;
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        load_display_metrics(backend, shell, alive.clone());
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="landing">
            <SiteHeader/>
            <main class="landing__main">
                <Hero/>
                <HowItWorks/>
                <SecurityShowcase/>
                <Pricing/>
                <SiteFooter/>
            </main>
        </div>
    }
}

/// Fire both mount-time reads. No retry; `alive` gates the writes.
#[cfg(feature = "hydrate")]
fn load_display_metrics(
    backend: crate::config::BackendConfig,
    shell: RwSignal<ShellState>,
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
) {
    use std::sync::atomic::Ordering;

    let metrics_backend = backend.clone();
    let metrics_alive = alive.clone();
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::fetch_metrics(&metrics_backend).await;
        if metrics_alive.load(Ordering::Relaxed) {
            let _ = shell.try_update(|s| s.issues_fixed.resolve(outcome));
        }
    });

    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::fetch_social_proof(&backend).await;
        if alive.load(Ordering::Relaxed) {
            let _ = shell.try_update(|s| s.social_proof.resolve(outcome));
        }
    });
}
