//! Table of créditos with per-row edit/delete actions.

use crate::actions;
use crate::state::AppState;
use credito_core::table::{rows, CreditoRow, HEADERS};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CreditoRowViewProps {
    pub row: CreditoRow,
    pub on_edit: EventHandler<i64>,
    pub on_delete: EventHandler<i64>,
}

/// One table row. Every cell is a text node, so markup in `cliente` is
/// shown literally.
#[component]
pub fn CreditoRowView(props: CreditoRowViewProps) -> Element {
    let id = props.row.id;
    let on_edit = props.on_edit;
    let on_delete = props.on_delete;
    let row = props.row;

    rsx! {
        tr {
            td { "{row.id}" }
            td { "{row.cliente}" }
            td { "{row.monto}" }
            td { "{row.tasa_interes}" }
            td { "{row.plazo}" }
            td { "{row.fecha_otorgamiento}" }
            td {
                div {
                    class: "row-actions",
                    style: "display: flex; gap: 6px;",
                    button {
                        r#type: "button",
                        onclick: move |_| on_edit.call(id),
                        "Editar"
                    }
                    button {
                        r#type: "button",
                        class: "secondary",
                        onclick: move |_| on_delete.call(id),
                        "Eliminar"
                    }
                }
            }
        }
    }
}

/// All records from the last fetch, in backend order.
#[component]
pub fn CreditoTable() -> Element {
    let state = use_context::<AppState>();
    let rendered_rows = rows(&state.creditos.read());

    rsx! {
        table {
            id: "tabla-creditos",
            style: "width: 100%; border-collapse: collapse;",
            thead {
                tr {
                    for header in HEADERS {
                        th { style: "text-align: left;", "{header}" }
                    }
                    th { "Acciones" }
                }
            }
            tbody {
                for row in rendered_rows {
                    CreditoRowView {
                        key: "{row.id}",
                        row: row.clone(),
                        on_edit: move |id: i64| {
                            spawn(actions::begin_edit(state, id));
                        },
                        on_delete: move |id: i64| {
                            spawn(actions::delete_record(state, id));
                        },
                    }
                }
            }
        }
    }
}
