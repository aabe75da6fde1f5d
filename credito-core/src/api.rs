//! Request descriptions and response decoding for the créditos REST API.
//!
//! Clients (browser `fetch`, native `reqwest`) only move bytes; the route,
//! method, body and the error-body rules all live here so both behave alike.
//!
//! | request | method | path |
//! |---|---|---|
//! | `List` | GET | `/api/creditos` |
//! | `Create` | POST | `/api/creditos` |
//! | `Update` | PUT | `/api/creditos/{id}` |
//! | `Delete` | DELETE | `/api/creditos/{id}` |
//! | `Total` | GET | `/api/creditos/total` |
//! | `ByClient` | GET | `/api/creditos/por_cliente` |

use crate::credito::{Credito, CreditoPayload};
use crate::error::{CreditoError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Collection route for loan records.
pub const COLLECTION_PATH: &str = "/api/creditos";

/// Shown when a failed create/update carries no `error` field.
pub const SERVER_FALLBACK: &str = "Error en el servidor";

/// Shown when a failed delete carries no `error` field.
pub const DELETE_FALLBACK: &str = "Error al eliminar";

/// Question asked before deleting a record.
pub const CONFIRM_DELETE: &str = "¿Eliminar este crédito?";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One call against the backend.
#[derive(Debug, PartialEq, Clone)]
pub enum ApiRequest {
    List,
    Create(CreditoPayload),
    Update { id: i64, payload: CreditoPayload },
    Delete(i64),
    Total,
    ByClient,
}

impl ApiRequest {
    /// Create when no record is being edited, update otherwise.
    pub fn save(edit_target: Option<i64>, payload: CreditoPayload) -> Self {
        match edit_target {
            Some(id) => ApiRequest::Update { id, payload },
            None => ApiRequest::Create(payload),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            ApiRequest::List | ApiRequest::Total | ApiRequest::ByClient => Method::Get,
            ApiRequest::Create(_) => Method::Post,
            ApiRequest::Update { .. } => Method::Put,
            ApiRequest::Delete(_) => Method::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            ApiRequest::List | ApiRequest::Create(_) => COLLECTION_PATH.to_string(),
            ApiRequest::Update { id, .. } | ApiRequest::Delete(id) => {
                format!("{}/{}", COLLECTION_PATH, id)
            }
            ApiRequest::Total => format!("{}/total", COLLECTION_PATH),
            ApiRequest::ByClient => format!("{}/por_cliente", COLLECTION_PATH),
        }
    }

    /// Full URL for `base`, which may be empty (same origin) or carry a
    /// trailing slash.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    /// JSON body, present only for create and update.
    pub fn body(&self) -> Option<String> {
        match self {
            ApiRequest::Create(payload) | ApiRequest::Update { payload, .. } => {
                serde_json::to_string(payload).ok()
            }
            _ => None,
        }
    }

    /// Delete request for `id`, or nothing when the user declined.
    pub fn delete_if_confirmed(id: i64, confirmed: bool) -> Option<Self> {
        if confirmed {
            Some(ApiRequest::Delete(id))
        } else {
            log::info!("delete of credito {} declined", id);
            None
        }
    }

    /// Message used when a failure response has no `error` field.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            ApiRequest::Delete(_) => DELETE_FALLBACK,
            _ => SERVER_FALLBACK,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Extract the server's `error` message from a failure body, or `fallback`.
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Check the status of a finished response and decode its JSON body.
pub fn decode_response<T: DeserializeOwned>(
    request: &ApiRequest,
    status: u16,
    body: &str,
) -> Result<T> {
    check_status(request, status, body)?;
    serde_json::from_str(body).map_err(|e| CreditoError::Decode(e.to_string()))
}

/// Outcome of a create or update. Success is decided by the status alone;
/// the saved record is `None` when a 2xx body is not a [`Credito`].
pub fn saved_record(request: &ApiRequest, status: u16, body: &str) -> Result<Option<Credito>> {
    check_status(request, status, body)?;
    match serde_json::from_str(body) {
        Ok(credito) => Ok(Some(credito)),
        Err(e) => {
            log::warn!(
                "{} {} returned {} with an unexpected body: {}",
                request.method().as_str(),
                request.path(),
                status,
                e
            );
            Ok(None)
        }
    }
}

/// Turn a non-2xx status into [`CreditoError::Server`]; the body is ignored
/// on success.
pub fn check_status(request: &ApiRequest, status: u16, body: &str) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        let message = error_message(body, request.fallback_message());
        log::warn!(
            "{} {} failed with status {}: {}",
            request.method().as_str(),
            request.path(),
            status,
            message
        );
        Err(CreditoError::Server { status, message })
    }
}
