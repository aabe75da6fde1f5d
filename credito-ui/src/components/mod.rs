//! Dioxus RSX components for the créditos page.

mod chart_panel;
mod credito_form;
mod credito_table;
mod error_display;
mod loading_spinner;

pub use chart_panel::ChartPanel;
pub use credito_form::CreditoForm;
pub use credito_table::{CreditoRowView, CreditoTable};
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
