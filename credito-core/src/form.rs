//! Create/edit form state machine.
//!
//! The form is either in create mode (`edit_target == None`) or editing one
//! record. Network calls are not made here: [`FormState::submit`] hands back
//! the request to send, and the caller reports the outcome through
//! [`FormState::submit_succeeded`] or [`FormState::submit_failed`].

use crate::api::ApiRequest;
use crate::credito::Credito;
use crate::validation::{validate, FormValues};

/// Save button label in create mode.
pub const CREATE_LABEL: &str = "Guardar";
/// Save button label while editing.
pub const UPDATE_LABEL: &str = "Actualizar";

#[derive(Debug, Default, PartialEq, Clone)]
pub struct FormState {
    /// Current input values
    pub values: FormValues,
    /// Id of the record being edited, `None` in create mode
    edit_target: Option<i64>,
    /// Inline message area; `None` means hidden
    error: Option<String>,
    /// A create/update request is in flight
    pending: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit_target(&self) -> Option<i64> {
        self.edit_target
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            UPDATE_LABEL
        } else {
            CREATE_LABEL
        }
    }

    /// The cancel button is only shown in edit mode.
    pub fn cancel_visible(&self) -> bool {
        self.is_editing()
    }

    /// Replace the displayed message.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Validate the current values and produce the request to send.
    ///
    /// Returns `None` when validation fails (the message is shown) or when a
    /// previous submission has not settled yet.
    pub fn submit(&mut self) -> Option<ApiRequest> {
        if self.pending {
            log::debug!("submit ignored: previous request still pending");
            return None;
        }
        self.clear_error();
        match validate(&self.values) {
            Ok(payload) => {
                self.pending = true;
                Some(ApiRequest::save(self.edit_target, payload))
            }
            Err(e) => {
                self.show_error(e.to_string());
                None
            }
        }
    }

    /// The backend accepted the create/update: back to an empty create form.
    pub fn submit_succeeded(&mut self) {
        self.pending = false;
        self.reset();
    }

    /// The backend (or the transport) rejected the submission. Values and
    /// edit target are kept so the user can correct and retry.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.pending = false;
        self.show_error(message);
    }

    /// Enter edit mode for `id`, populating the inputs from `records`.
    ///
    /// Returns `false` and leaves the form untouched when `id` is not in the
    /// list.
    pub fn begin_edit(&mut self, id: i64, records: &[Credito]) -> bool {
        let Some(credito) = Credito::find(records, id) else {
            log::info!("credito {} not found, edit ignored", id);
            return false;
        };
        self.values = FormValues {
            cliente: credito.cliente.clone(),
            monto: credito.monto.to_string(),
            tasa_interes: credito.tasa_interes.to_string(),
            plazo: credito.plazo.to_string(),
            fecha_otorgamiento: credito.fecha_otorgamiento.clone(),
        };
        self.edit_target = Some(id);
        true
    }

    /// Leave edit mode without touching any record.
    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.values = FormValues::default();
        self.edit_target = None;
        self.error = None;
    }
}
