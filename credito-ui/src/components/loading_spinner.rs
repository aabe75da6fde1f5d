//! Loading indicator shown while the list fetch is in flight.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Cargando créditos...".to_string())]
    pub label: String,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            role: "status",
            aria_live: "polite",
            style: "display: flex; justify-content: center; align-items: center; gap: 8px; padding: 40px; color: #666;",
            span {
                style: "width: 14px; height: 14px; border: 2px solid #ccc; border-top-color: #666; border-radius: 50%;",
            }
            "{props.label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn default_label() {
        let html = render(|| rsx! { LoadingSpinner {} });
        assert!(html.contains("Cargando créditos..."), "got: {}", html);
        assert!(html.contains("role=\"status\""), "got: {}", html);
    }

    #[test]
    fn custom_label() {
        let html = render(|| rsx! { LoadingSpinner { label: "Guardando...".to_string() } });
        assert!(html.contains("Guardando..."), "got: {}", html);
        assert!(!html.contains("Cargando"));
    }
}
