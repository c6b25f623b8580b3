//! Interactive code playground: editor on the left, agent output on the right.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns its `PlaygroundState` signal outright; nothing else on the page reads
//! or writes it. The only network side effect is the Run analysis button,
//! which hands the request to `net::api::analyze` via `run_analysis`.

use leptos::prelude::*;

use crate::components::agent_output::AgentOutput;
use crate::config::PageConfig;
use crate::net::api;
use crate::state::playground::{PlaygroundState, run_analysis};

/// Editable snippet plus Run analysis trigger and result pane.
#[component]
pub fn Playground() -> impl IntoView {
    let backend = expect_context::<PageConfig>().backend;
    let state = RwSignal::new(PlaygroundState::default());
    let output = Memo::new(move |_| state.with(PlaygroundState::view));
    let initial_code = state.with_untracked(|s| s.code.clone());

    let on_run = move |_: leptos::ev::MouseEvent| {
        let backend = backend.clone();
        let cycle = run_analysis(state, move |request| async move { api::analyze(&backend, &request).await });
        leptos::task::spawn_local(cycle);
    };

    view! {
        <div class="playground">
            <div class="playground__editor">
                <div class="playground__toolbar">
                    <span class="playground__label">"live code"</span>
                    <button class="btn btn--primary playground__run" on:click=on_run>
                        <span aria-hidden="true">"▶"</span>
                        " Run analysis"
                    </button>
                </div>
                <textarea
                    class="playground__code"
                    spellcheck="false"
                    prop:value=move || state.with(|s| s.code.clone())
                    on:input=move |ev| state.update(|s| s.edit(event_target_value(&ev)))
                >
                    {initial_code}
                </textarea>
            </div>
            <div class="playground__output agent-output">
                <h4 class="agent-output__title">"Agent output"</h4>
                {move || view! { <AgentOutput output=output.get()/> }}
            </div>
        </div>
    }
}
