//! Créditos (loans) CRUD page
//!
//! Lists loan records from the REST backend, lets the user create, edit and
//! delete them, and keeps two Chart.js charts (total lent, per-client share)
//! in sync with the list.
//!
//! Data flow:
//! 1. On mount: load the chart glue and fetch `/api/creditos`.
//! 2. The table renders the fetched rows; the charts are redrawn from the
//!    same record set.
//! 3. Every successful create, update or delete re-fetches the whole list.

use credito_ui::actions;
use credito_ui::components::{ChartPanel, CreditoForm, CreditoTable, ErrorDisplay, LoadingSpinner};
use credito_ui::js_bridge;
use credito_ui::state::AppState;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Starting creditos app");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("creditos-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Initial load, once on mount
    use_effect(move || {
        js_bridge::init_charts();
        spawn(actions::refresh(state));
    });

    rsx! {
        document::Script { src: js_bridge::CHART_JS_SRC }
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 { style: "font-size: 22px;", "Créditos" }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay {
                    message: err.clone(),
                    on_dismiss: move |_| state.error_msg.set(None),
                }
            }

            CreditoForm {}

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                CreditoTable {}
            }

            ChartPanel {}
        }
    }
}
