//! Create/edit form for a single crédito.

use crate::actions;
use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
struct FormFieldProps {
    /// Input id, also the backend field name
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())]
    input_type: String,
    step: Option<String>,
    on_input: EventHandler<String>,
}

/// Labelled input bound to one form value.
#[component]
fn FormField(props: FormFieldProps) -> Element {
    let on_input = props.on_input;
    rsx! {
        label {
            r#for: "{props.id}",
            style: "display: flex; flex-direction: column; gap: 4px; font-weight: bold;",
            "{props.label}"
            input {
                id: "{props.id}",
                name: "{props.id}",
                r#type: "{props.input_type}",
                step: props.step.clone(),
                value: "{props.value}",
                oninput: move |evt: Event<FormData>| on_input.call(evt.value()),
            }
        }
    }
}

/// The add/edit form. Submitting creates a record, or updates the one being
/// edited; the cancel button only appears in edit mode.
#[component]
pub fn CreditoForm() -> Element {
    let mut state = use_context::<AppState>();
    let current = state.form.read().clone();
    let label = current.submit_label();
    let error_text = current.error().unwrap_or_default().to_string();

    rsx! {
        form {
            id: "form-credito",
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 12px; margin-bottom: 16px;",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                spawn(actions::submit(state));
            },

            FormField {
                id: "cliente".to_string(),
                label: "Cliente".to_string(),
                value: current.values.cliente.clone(),
                on_input: move |v: String| state.form.write().values.cliente = v,
            }
            FormField {
                id: "monto".to_string(),
                label: "Monto".to_string(),
                value: current.values.monto.clone(),
                input_type: "number".to_string(),
                step: "0.01".to_string(),
                on_input: move |v: String| state.form.write().values.monto = v,
            }
            FormField {
                id: "tasa_interes".to_string(),
                label: "Tasa de interés (%)".to_string(),
                value: current.values.tasa_interes.clone(),
                input_type: "number".to_string(),
                step: "0.01".to_string(),
                on_input: move |v: String| state.form.write().values.tasa_interes = v,
            }
            FormField {
                id: "plazo".to_string(),
                label: "Plazo".to_string(),
                value: current.values.plazo.clone(),
                input_type: "number".to_string(),
                step: "1".to_string(),
                on_input: move |v: String| state.form.write().values.plazo = v,
            }
            FormField {
                id: "fecha_otorgamiento".to_string(),
                label: "Fecha de otorgamiento".to_string(),
                value: current.values.fecha_otorgamiento.clone(),
                input_type: "date".to_string(),
                on_input: move |v: String| state.form.write().values.fecha_otorgamiento = v,
            }

            div {
                style: "display: flex; gap: 8px; align-items: end;",
                button {
                    id: "btn-guardar",
                    r#type: "submit",
                    disabled: current.is_pending(),
                    "{label}"
                }
                button {
                    id: "btn-cancelar",
                    r#type: "button",
                    class: "secondary",
                    hidden: !current.cancel_visible(),
                    onclick: move |_| actions::cancel_edit(state),
                    "Cancelar"
                }
            }

            p {
                id: "form-error",
                role: "alert",
                hidden: current.error().is_none(),
                style: "grid-column: 1 / -1; margin: 0; color: #C62828;",
                "{error_text}"
            }
        }
    }
}
