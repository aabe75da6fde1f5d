//! Chart.js configuration objects for the two dashboard charts.
//!
//! Configs are serialized to JSON and handed to the JS bridge, which passes
//! them straight to `new Chart(ctx, config)`.

use crate::summary::ChartSummary;
use serde::Serialize;
use serde_json::{json, Value};

/// Label of the single bar in the total chart.
pub const TOTAL_LABEL: &str = "Total otorgado";
/// Dataset label of the total chart (currency).
pub const CURRENCY_LABEL: &str = "MXN";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Everything `new Chart(ctx, ...)` takes besides the context.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: Value,
}

impl ChartConfig {
    /// Single bar with the overall amount lent.
    pub fn total(summary: &ChartSummary) -> Self {
        Self {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: vec![TOTAL_LABEL.to_string()],
                datasets: vec![Dataset {
                    label: Some(CURRENCY_LABEL.to_string()),
                    data: vec![summary.total],
                }],
            },
            options: json!({
                "responsive": true,
                "plugins": { "legend": { "display": true } },
                "scales": { "y": { "beginAtZero": true } },
            }),
        }
    }

    /// One slice per distinct client.
    pub fn by_client(summary: &ChartSummary) -> Self {
        Self {
            kind: ChartKind::Pie,
            data: ChartData {
                labels: summary.labels(),
                datasets: vec![Dataset {
                    label: None,
                    data: summary.values(),
                }],
            },
            options: json!({ "responsive": true }),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
