//! Browser HTTP client over `window.fetch`.
//!
//! Requests go to the page's own origin; route, method, body and error-body
//! handling come from [`credito_core::api`].

use credito_core::api::{self, ApiRequest};
use credito_core::error::{CreditoError, Result};
use credito_core::Credito;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Empty base: same origin as the page.
pub const API_BASE: &str = "";

fn js_error(e: JsValue) -> CreditoError {
    let message = match e.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => e.as_string().unwrap_or_else(|| format!("{:?}", e)),
    };
    CreditoError::Transport(message)
}

/// Send one request and return `(status, body)`.
async fn send(request: &ApiRequest) -> Result<(u16, String)> {
    let url = request.url(API_BASE);
    let init = RequestInit::new();
    init.set_method(request.method().as_str());
    if let Some(body) = request.body() {
        init.set_body(&JsValue::from_str(&body));
    }

    let req = Request::new_with_str_and_init(&url, &init).map_err(js_error)?;
    if request.body().is_some() {
        req.headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let window = web_sys::window()
        .ok_or_else(|| CreditoError::Transport("no window available".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;
    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    log::debug!("{} {} -> {}", request.method().as_str(), url, resp.status());
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

async fn fetch_json<T: serde::de::DeserializeOwned>(request: ApiRequest) -> Result<T> {
    let (status, body) = send(&request).await?;
    api::decode_response(&request, status, &body)
}

/// `GET /api/creditos`
pub async fn list_creditos() -> Result<Vec<Credito>> {
    let records: Vec<Credito> = fetch_json(ApiRequest::List).await?;
    log::info!("Fetched {} creditos", records.len());
    Ok(records)
}

/// Send the create or update request produced by the form. A 2xx status is
/// a success even when the body is not a full record.
pub async fn save_credito(request: ApiRequest) -> Result<Option<Credito>> {
    let (status, body) = send(&request).await?;
    api::saved_record(&request, status, &body)
}

/// Send a confirmed `DELETE /api/creditos/{id}`.
pub async fn delete_credito(request: ApiRequest) -> Result<()> {
    let (status, body) = send(&request).await?;
    api::check_status(&request, status, &body)
}
