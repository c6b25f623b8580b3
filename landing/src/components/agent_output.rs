//! Output pane of the playground.
//!
//! DESIGN
//! ======
//! Rendering is a pure function of a [`PlaygroundView`] snapshot; the owning
//! `Playground` re-renders this component whenever the snapshot changes.

#[cfg(test)]
#[path = "agent_output_test.rs"]
mod agent_output_test;

use leptos::prelude::*;

use crate::net::types::{AnalysisReport, Finding, Step};
use crate::state::playground::PlaygroundView;
use crate::util::format::{format_elapsed, format_score, severity_modifier};

/// Exactly one of: idle prompt, loading indicator, error, or report.
#[component]
pub fn AgentOutput(output: PlaygroundView) -> impl IntoView {
    match output {
        PlaygroundView::Idle => view! {
            <p class="agent-output__idle">"Click Run analysis to see the agents work."</p>
        }
        .into_any(),
        PlaygroundView::Loading => view! { <p class="agent-output__loading">"Analyzing..."</p> }.into_any(),
        PlaygroundView::Error(message) => view! { <p class="agent-output__error">{message}</p> }.into_any(),
        PlaygroundView::Report(report) => view! { <ReportBody report=report/> }.into_any(),
    }
}

#[component]
fn ReportBody(report: AnalysisReport) -> impl IntoView {
    let AnalysisReport { score, findings, steps } = report;

    let findings_view = if findings.is_empty() {
        view! { <p class="agent-output__clean">"No issues found"</p> }.into_any()
    } else {
        view! {
            <div class="agent-output__findings">
                <p class="agent-output__heading">"Findings"</p>
                <ul class="finding-list">
                    {findings.into_iter().map(|finding| view! { <FindingRow finding=finding/> }).collect_view()}
                </ul>
            </div>
        }
        .into_any()
    };

    let steps_view = (!steps.is_empty()).then(|| {
        view! {
            <div class="agent-output__steps">
                <p class="agent-output__heading">"Agent steps"</p>
                <ol class="step-list">
                    {steps.into_iter().map(|step| view! { <StepRow step=step/> }).collect_view()}
                </ol>
            </div>
        }
    });

    view! {
        <div class="agent-output__report">
            <div class="agent-output__score">
                <span class="agent-output__score-icon" aria-hidden="true">"🛡"</span>
                "Risk score: "
                <span class="agent-output__score-value">{format_score(score)}</span>
            </div>
            {findings_view}
            {steps_view}
        </div>
    }
}

#[component]
fn FindingRow(finding: Finding) -> impl IntoView {
    let class = format!("finding finding--{}", severity_modifier(&finding.severity));
    let location = finding.line.map(|line| format!("Line {line}: "));
    view! {
        <li class=class>
            <div class="finding__title">
                "["<span class="finding__severity">{finding.severity}</span>"] "{finding.title}
            </div>
            <div class="finding__location">{location}{finding.description}</div>
            <div class="finding__fix">"Fix: "{finding.recommendation}</div>
        </li>
    }
}

#[component]
fn StepRow(step: Step) -> impl IntoView {
    view! {
        <li class="step-row">
            <span class="step-row__agent">{step.agent}</span>
            ": "
            {step.action}
            " — "
            <span class="step-row__elapsed">{format_elapsed(step.elapsed_ms)}</span>
        </li>
    }
}
