//! Page-level error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Clears the banner; no close button when absent
    pub on_dismiss: Option<EventHandler<()>>,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            id: "page-error",
            role: "alert",
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            span { "{props.message}" }
            if let Some(on_dismiss) = props.on_dismiss {
                button {
                    r#type: "button",
                    class: "secondary",
                    aria_label: "Cerrar",
                    onclick: move |_| on_dismiss.call(()),
                    "×"
                }
            }
        }
    }
}
