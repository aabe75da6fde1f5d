//! End-to-end form flows against an in-memory backend.
//!
//! `FakeBackend` answers request descriptions the way the REST service does
//! (newest record first, `{error}` bodies with 404 for unknown ids), so the
//! create → refresh → edit → update → delete cycle can run without a browser.

use credito_core::api::{self, ApiRequest, Method};
use credito_core::summary::ChartSummary;
use credito_core::validation::FormValues;
use credito_core::{Credito, CreditoError, FormState};
use serde_json::json;

#[derive(Default)]
struct FakeBackend {
    records: Vec<Credito>,
    next_id: i64,
    log: Vec<(Method, String)>,
    /// Replaces the body of successful create/update responses.
    save_body: Option<String>,
}

impl FakeBackend {
    fn handle(&mut self, request: &ApiRequest) -> (u16, String) {
        self.log.push((request.method(), request.path()));
        match request {
            ApiRequest::List => {
                let mut rows = self.records.clone();
                rows.sort_by(|a, b| b.id.cmp(&a.id));
                (200, serde_json::to_string(&rows).unwrap())
            }
            ApiRequest::Create(payload) => {
                self.next_id += 1;
                let credito = Credito {
                    id: self.next_id,
                    cliente: payload.cliente.clone(),
                    monto: payload.monto,
                    tasa_interes: payload.tasa_interes,
                    plazo: payload.plazo,
                    fecha_otorgamiento: payload.fecha_otorgamiento.clone(),
                };
                self.records.push(credito.clone());
                (201, self.saved_body(&credito))
            }
            ApiRequest::Update { id, payload } => {
                match self.records.iter_mut().find(|c| c.id == *id) {
                    Some(credito) => {
                        credito.cliente = payload.cliente.clone();
                        credito.monto = payload.monto;
                        credito.tasa_interes = payload.tasa_interes;
                        credito.plazo = payload.plazo;
                        credito.fecha_otorgamiento = payload.fecha_otorgamiento.clone();
                        let credito = credito.clone();
                        (200, self.saved_body(&credito))
                    }
                    None => not_found(),
                }
            }
            ApiRequest::Delete(id) => {
                let before = self.records.len();
                self.records.retain(|c| c.id != *id);
                if self.records.len() == before {
                    not_found()
                } else {
                    (200, json!({ "ok": true }).to_string())
                }
            }
            ApiRequest::Total | ApiRequest::ByClient => (500, String::new()),
        }
    }

    fn saved_body(&self, credito: &Credito) -> String {
        self.save_body
            .clone()
            .unwrap_or_else(|| serde_json::to_string(credito).unwrap())
    }

    fn list(&mut self) -> Vec<Credito> {
        let (status, body) = self.handle(&ApiRequest::List);
        api::decode_response(&ApiRequest::List, status, &body).unwrap()
    }

    /// Run a submission the way the UI does: send, then report the outcome.
    fn submit(&mut self, form: &mut FormState) -> Option<Vec<Credito>> {
        let request = form.submit()?;
        let (status, body) = self.handle(&request);
        match api::saved_record(&request, status, &body) {
            Ok(_) => {
                form.submit_succeeded();
                Some(self.list())
            }
            Err(e) => {
                form.submit_failed(e.to_string());
                None
            }
        }
    }

    fn delete(&mut self, id: i64, confirmed: bool) -> Result<Option<Vec<Credito>>, CreditoError> {
        let Some(request) = ApiRequest::delete_if_confirmed(id, confirmed) else {
            return Ok(None);
        };
        let (status, body) = self.handle(&request);
        api::check_status(&request, status, &body)?;
        Ok(Some(self.list()))
    }
}

fn not_found() -> (u16, String) {
    (404, json!({ "error": "Crédito no encontrado" }).to_string())
}

fn values(cliente: &str, monto: &str) -> FormValues {
    FormValues {
        cliente: cliente.to_string(),
        monto: monto.to_string(),
        tasa_interes: "10".to_string(),
        plazo: "12".to_string(),
        fecha_otorgamiento: "2024-06-01".to_string(),
    }
}

#[test]
fn create_sends_post_and_refreshes() {
    let mut backend = FakeBackend::default();
    let mut form = FormState::new();
    form.values = values("Ana", "100");

    let rows = backend.submit(&mut form).unwrap();

    assert_eq!(backend.log[0], (Method::Post, "/api/creditos".to_string()));
    assert_eq!(backend.log[1], (Method::Get, "/api/creditos".to_string()));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cliente, "Ana");
    assert_eq!(form.values, FormValues::default());
    assert_eq!(form.edit_target(), None);
}

#[test]
fn invalid_input_never_reaches_backend() {
    let mut backend = FakeBackend::default();
    let mut form = FormState::new();
    form.values = values("Ana", "100");
    form.values.fecha_otorgamiento = "2024/01/01".to_string();

    assert!(backend.submit(&mut form).is_none());
    assert!(backend.log.is_empty());
    assert_eq!(form.error(), Some("Fecha con formato YYYY-MM-DD."));
}

#[test]
fn edit_sends_put_to_edited_id() {
    let mut backend = FakeBackend::default();
    let mut form = FormState::new();
    form.values = values("Ana", "100");
    backend.submit(&mut form);
    form.values = values("Beto", "50");
    let rows = backend.submit(&mut form).unwrap();

    let beto = rows.iter().find(|c| c.cliente == "Beto").unwrap().id;
    assert!(form.begin_edit(beto, &backend.list()));
    form.values.monto = "75".to_string();
    let rows = backend.submit(&mut form).unwrap();

    assert!(backend
        .log
        .contains(&(Method::Put, format!("/api/creditos/{}", beto))));
    assert_eq!(Credito::find(&rows, beto).unwrap().monto, 75.0);
    assert_eq!(form.edit_target(), None);
    assert_eq!(form.submit_label(), "Guardar");
}

#[test]
fn success_status_with_unexpected_body_still_resets_form() {
    let mut backend = FakeBackend {
        save_body: Some(json!({ "id": 1, "cliente": "Ana", "plazo": null }).to_string()),
        ..Default::default()
    };
    let mut form = FormState::new();
    form.values = values("Ana", "100");

    let rows = backend.submit(&mut form).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(form.error(), None);
    assert_eq!(form.values, FormValues::default());
    assert!(!form.is_pending());

    assert!(form.begin_edit(rows[0].id, &rows));
    form.values.monto = "80".to_string();
    let rows = backend.submit(&mut form).unwrap();
    assert_eq!(rows[0].monto, 80.0);
    assert_eq!(form.edit_target(), None);
}

#[test]
fn server_error_keeps_form_for_correction() {
    let mut backend = FakeBackend::default();
    let mut form = FormState::new();
    form.values = values("Ana", "100");
    backend.submit(&mut form);
    let id = backend.list()[0].id;

    form.begin_edit(id, &backend.list());
    backend.delete(id, true).unwrap();
    assert!(backend.submit(&mut form).is_none());

    assert_eq!(form.error(), Some("Crédito no encontrado"));
    assert_eq!(form.edit_target(), Some(id));
    assert_eq!(form.values.cliente, "Ana");
}

#[test]
fn cancel_leaves_records_untouched() {
    let mut backend = FakeBackend::default();
    let mut form = FormState::new();
    form.values = values("Ana", "100");
    backend.submit(&mut form);
    let before = backend.list();

    form.begin_edit(before[0].id, &before);
    form.values.monto = "999".to_string();
    form.cancel_edit();

    assert_eq!(backend.list(), before);
    assert_eq!(form.edit_target(), None);
    assert!(!form.cancel_visible());
}

#[test]
fn declined_delete_makes_no_call() {
    let mut backend = FakeBackend::default();
    let mut form = FormState::new();
    form.values = values("Ana", "100");
    backend.submit(&mut form);
    let calls = backend.log.len();

    assert_eq!(backend.delete(1, false).unwrap(), None);
    assert_eq!(backend.log.len(), calls);
}

#[test]
fn confirmed_delete_removes_row() {
    let mut backend = FakeBackend::default();
    let mut form = FormState::new();
    for name in ["Ana", "Beto"] {
        form.values = values(name, "10");
        backend.submit(&mut form);
    }

    let rows = backend.delete(1, true).unwrap().unwrap();
    assert!(rows.iter().all(|c| c.id != 1));
    assert_eq!(rows.len(), 1);
}

#[test]
fn failed_delete_reports_server_message() {
    let mut backend = FakeBackend::default();
    let err = backend.delete(77, true).unwrap_err();
    assert_eq!(err.to_string(), "Crédito no encontrado");
}

#[test]
fn charts_follow_refreshed_list() {
    let mut backend = FakeBackend::default();
    let mut form = FormState::new();
    for (name, monto) in [("Ana", "100"), ("Beto", "50"), ("Ana", "25")] {
        form.values = values(name, monto);
        backend.submit(&mut form);
    }

    let summary = ChartSummary::from_records(&backend.list());
    assert_eq!(summary.total, 175.0);
    assert_eq!(summary.by_client.len(), 2);
    let ana = summary.by_client.iter().find(|t| t.cliente == "Ana").unwrap();
    let beto = summary.by_client.iter().find(|t| t.cliente == "Beto").unwrap();
    assert_eq!(ana.total, 125.0);
    assert_eq!(beto.total, 50.0);
}
