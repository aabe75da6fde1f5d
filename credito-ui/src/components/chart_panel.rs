//! Canvases for the total and per-client charts.

use crate::actions::{CLIENTS_CANVAS_ID, TOTAL_CANVAS_ID};
use crate::js_bridge;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
struct ChartCardProps {
    title: String,
    canvas_id: String,
}

#[component]
fn ChartCard(props: ChartCardProps) -> Element {
    rsx! {
        div {
            style: "flex: 1 1 320px; min-width: 0;",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 16px;",
                "{props.title}"
            }
            canvas { id: "{props.canvas_id}" }
        }
    }
}

/// Chart.js draws into these canvases; see [`crate::actions::update_charts`].
#[component]
pub fn ChartPanel() -> Element {
    use_drop(|| {
        js_bridge::destroy_chart(TOTAL_CANVAS_ID);
        js_bridge::destroy_chart(CLIENTS_CANVAS_ID);
    });

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 24px; margin-top: 24px;",
            ChartCard {
                title: "Total otorgado".to_string(),
                canvas_id: TOTAL_CANVAS_ID.to_string(),
            }
            ChartCard {
                title: "Distribución por cliente".to_string(),
                canvas_id: CLIENTS_CANVAS_ID.to_string(),
            }
        }
    }
}
