//! Shared application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `form` owns the registration card lifecycle and `draw` owns the admin
//! panel. The two are decoupled except for [`RefreshSignal`], bumped by the
//! form after a successful submission so the panel re-queries the endpoint.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod draw;
pub mod form;

use leptos::prelude::*;

/// Monotone counter bumped once per successful submission.
#[derive(Clone, Copy, Debug)]
pub struct RefreshSignal(RwSignal<u64>);

impl RefreshSignal {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    /// Subscribe the current reactive scope to refresh bumps.
    pub fn track(&self) {
        self.0.track();
    }

    /// Signal one completed submission.
    pub fn bump(&self) {
        self.0.update(|n| *n += 1);
    }

    /// Current counter value, without subscribing.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.0.get_untracked()
    }
}

impl Default for RefreshSignal {
    fn default() -> Self {
        Self::new()
    }
}
