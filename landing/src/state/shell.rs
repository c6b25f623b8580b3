//! Page shell display data fetched once at mount.
//!
//! DESIGN
//! ======
//! Both reads are best-effort. Each is tracked as a [`Remote`] so "never
//! answered" and "failed quietly" are distinct states, while the rendered
//! output treats them the same: default counter, no social-proof badge.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use crate::net::types::{Metrics, SocialProof};

/// Counter shown until (and unless) the metrics read succeeds.
pub const DEFAULT_ISSUES_FIXED: u64 = 1247;

/// Lifecycle of a single fire-and-forget read.
#[derive(Clone, Debug, PartialEq)]
pub enum Remote<T> {
    Pending,
    Loaded(T),
    Failed,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<T> Remote<T> {
    /// Fold a read outcome in. Only a pending read accepts one; later
    /// outcomes are ignored.
    pub fn resolve(&mut self, outcome: Option<T>) {
        if !matches!(self, Self::Pending) {
            return;
        }
        *self = match outcome {
            Some(value) => Self::Loaded(value),
            None => Self::Failed,
        };
    }

    #[must_use]
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Display metrics for the landing page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShellState {
    pub issues_fixed: Remote<Metrics>,
    pub social_proof: Remote<SocialProof>,
}

impl ShellState {
    /// Counter value to render.
    #[must_use]
    pub fn issues_fixed_today(&self) -> u64 {
        self.issues_fixed.loaded().map_or(DEFAULT_ISSUES_FIXED, |m| m.count)
    }

    /// Social-proof line to render, if any.
    #[must_use]
    pub fn social_proof_text(&self) -> Option<String> {
        self.social_proof.loaded().and_then(SocialProof::display_text)
    }
}
