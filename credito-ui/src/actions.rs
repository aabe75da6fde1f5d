//! User-triggered operations: list refresh, submit, edit, cancel, delete.
//!
//! Every mutation ends with a full list re-fetch; the table and the charts
//! are always rebuilt from what the backend returns.

use crate::client;
use crate::js_bridge;
use crate::state::AppState;
use credito_core::api::{ApiRequest, CONFIRM_DELETE};
use credito_core::chart::ChartConfig;
use credito_core::error::Result;
use credito_core::summary::ChartSummary;
use credito_core::Credito;
use dioxus::prelude::*;

/// Canvas for the single-bar total chart.
pub const TOTAL_CANVAS_ID: &str = "chartTotal";
/// Canvas for the per-client pie chart.
pub const CLIENTS_CANVAS_ID: &str = "chartClientes";

/// Fetch all records, replace the table contents, then redraw the charts.
pub async fn refresh(mut state: AppState) {
    let (records, banner) = list_outcome(client::list_creditos().await);
    state.creditos.set(records.clone());
    state.error_msg.set(banner);
    update_charts(&records);
    state.loading.set(false);
}

/// Rows to show and page banner for a finished list fetch. A failed fetch
/// discards the previous rows, so the table and charts come up empty.
fn list_outcome(result: Result<Vec<Credito>>) -> (Vec<Credito>, Option<String>) {
    match result {
        Ok(records) => (records, None),
        Err(e) => {
            log::error!("Failed to load creditos: {}", e);
            (
                Vec::new(),
                Some(format!("No se pudieron cargar los créditos: {}", e)),
            )
        }
    }
}

/// Redraw both charts from `records`, destroying the previous instances.
pub fn update_charts(records: &[Credito]) {
    let summary = ChartSummary::from_records(records);
    js_bridge::render_chart(TOTAL_CANVAS_ID, &ChartConfig::total(&summary).to_json());
    js_bridge::render_chart(CLIENTS_CANVAS_ID, &ChartConfig::by_client(&summary).to_json());
}

/// Validate and send the form. Creates or updates depending on edit mode.
pub async fn submit(mut state: AppState) {
    let request = state.form.write().submit();
    let Some(request) = request else {
        return;
    };

    match client::save_credito(request).await {
        Ok(saved) => {
            match saved {
                Some(credito) => log::info!("Saved credito {}", credito.id),
                None => log::info!("Saved credito"),
            }
            state.form.write().submit_succeeded();
            refresh(state).await;
        }
        Err(e) => state.form.write().submit_failed(e.to_string()),
    }
}

/// Load `id` into the form and switch to edit mode.
pub async fn begin_edit(mut state: AppState, id: i64) {
    match client::list_creditos().await {
        Ok(records) => {
            if state.form.write().begin_edit(id, &records) {
                js_bridge::scroll_to_top();
            }
        }
        Err(e) => state.form.write().show_error(e.to_string()),
    }
}

pub fn cancel_edit(mut state: AppState) {
    state.form.write().cancel_edit();
}

/// Ask for confirmation, delete, and refresh. Failures are reported with a
/// blocking alert and leave the table as it was.
pub async fn delete_record(state: AppState, id: i64) {
    let Some(request) = ApiRequest::delete_if_confirmed(id, js_bridge::confirm(CONFIRM_DELETE))
    else {
        return;
    };

    match client::delete_credito(request).await {
        Ok(()) => {
            log::info!("Deleted credito {}", id);
            refresh(state).await;
        }
        Err(e) => js_bridge::alert(&e.to_string()),
    }
}
