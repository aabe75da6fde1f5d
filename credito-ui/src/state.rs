//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`; async actions receive it by value (it is `Copy`).

use credito_core::{Credito, FormState};
use dioxus::prelude::*;

/// Shared state for the créditos page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Records from the last successful list fetch, in backend order
    pub creditos: Signal<Vec<Credito>>,
    /// Create/edit form
    pub form: Signal<FormState>,
    /// True until the first list fetch settles
    pub loading: Signal<bool>,
    /// Page-level error (list fetch failures)
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            creditos: Signal::new(Vec::new()),
            form: Signal::new(FormState::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
