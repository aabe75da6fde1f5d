//! Native HTTP client for the créditos REST API.

use anyhow::Context;
use credito_core::api::{self, ApiRequest, Method};
use credito_core::credito::{ClientTotal, TotalResponse};
use credito_core::Credito;
use log::debug;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Backend address used when neither `--base-url` nor the env var is set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

pub struct CreditosClient {
    base_url: String,
    http: reqwest::Client,
}

impl CreditosClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            base_url: base_url.to_string(),
            http,
        })
    }

    /// Send one request and return `(status, body)`.
    async fn send(&self, request: &ApiRequest) -> anyhow::Result<(u16, String)> {
        let url = request.url(&self.base_url);
        let builder = match request.method() {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        };
        let builder = match request.body() {
            Some(body) => builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .with_context(|| format!("{} {} failed", request.method().as_str(), url))?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("{} {} -> {}", request.method().as_str(), url, status);
        Ok((status, body))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: ApiRequest) -> anyhow::Result<T> {
        let (status, body) = self.send(&request).await?;
        Ok(api::decode_response(&request, status, &body)?)
    }

    pub async fn list(&self) -> anyhow::Result<Vec<Credito>> {
        self.fetch_json(ApiRequest::List).await
    }

    /// Send a create or update request. The record is `None` when the
    /// backend accepted it but answered with an unexpected body.
    pub async fn save(&self, request: ApiRequest) -> anyhow::Result<Option<Credito>> {
        let (status, body) = self.send(&request).await?;
        Ok(api::saved_record(&request, status, &body)?)
    }

    pub async fn delete(&self, request: ApiRequest) -> anyhow::Result<()> {
        let (status, body) = self.send(&request).await?;
        Ok(api::check_status(&request, status, &body)?)
    }

    pub async fn total(&self) -> anyhow::Result<f64> {
        let response: TotalResponse = self.fetch_json(ApiRequest::Total).await?;
        Ok(response.total)
    }

    pub async fn by_client(&self) -> anyhow::Result<Vec<ClientTotal>> {
        self.fetch_json(ApiRequest::ByClient).await
    }
}
