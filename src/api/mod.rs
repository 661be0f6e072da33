//! Gateway between application intents and the backend REST contract.
//!
//! Every request carries `Content-Type: application/json` and, while a
//! session token exists, `Authorization: Bearer <token>`. Success bodies are
//! decoded into the typed contracts in `crate::models`; rejections become
//! `ClientError::Rejected` carrying the server `detail` or a fixed
//! per-operation fallback. No caching, no retries.

mod auth;
mod categories;
mod certificates;
mod dashboard;
mod documents;
mod profile;
mod resumes;
mod sea_time;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use url::Url;

use crate::config::AppConfig;
use crate::error::ClientError;
use crate::session::SessionService;
use crate::types::Operation;

pub struct ApiGateway {
    client: reqwest::Client,
    base_url: String,
    session: Arc<SessionService>,
    clear_on_unauthorized: bool,
}

/// FastAPI style error body: `{"detail": "..."}` or a list of validation errors
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<Value>,
}

impl ApiGateway {
    pub fn new(base_url: &str, session: Arc<SessionService>) -> Result<Self, ClientError> {
        Url::parse(base_url)?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            clear_on_unauthorized: true,
        })
    }

    pub fn from_config(config: &AppConfig, session: Arc<SessionService>) -> Result<Self, ClientError> {
        Ok(Self::new(&config.api.base_url, session)?
            .with_clear_on_unauthorized(config.session.clear_on_unauthorized))
    }

    /// Whether a 401 from the backend drops the stored token
    pub fn with_clear_on_unauthorized(mut self, enabled: bool) -> Self {
        self.clear_on_unauthorized = enabled;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionService> {
        &self.session
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let mut builder = self
            .client
            .request(method, self.url(path)?)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }

        Ok(builder)
    }

    /// Send and return the raw body of a success response
    async fn execute(&self, operation: Operation, builder: RequestBuilder) -> Result<String, ClientError> {
        let request = builder
            .build()
            .map_err(|e| ClientError::transport(format!("Failed to build request: {}", e)))?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        tracing::debug!("{} {} ({:?})", method, path, operation);

        let response = self.client.execute(request).await.map_err(|e| {
            tracing::error!("{} {} could not reach backend: {}", method, path, e);
            ClientError::transport(format!("Unable to reach backend: {}", e))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("{} {} response could not be read: {}", method, path, e);
            ClientError::transport(format!("Failed to read backend response: {}", e))
        })?;

        tracing::debug!("{} {} -> {}", method, path, status.as_u16());

        if status.is_success() {
            return Ok(body);
        }

        let message = rejection_message(&body).unwrap_or_else(|| operation.fallback_message().to_string());
        tracing::warn!("{} {} rejected with {}: {}", method, path, status.as_u16(), message);

        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
        }

        Err(ClientError::rejected(status.as_u16(), message))
    }

    fn handle_unauthorized(&self) {
        if !self.clear_on_unauthorized || !self.session.is_authenticated() {
            return;
        }

        match self.session.clear() {
            Ok(()) => tracing::warn!("Backend rejected the session token; session cleared"),
            Err(e) => tracing::error!("Failed to clear rejected session: {}", e),
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let builder = self.request(Method::GET, path)?.query(query);
        let body = self.execute(operation, builder).await?;
        decode(operation, &body)
    }

    pub(crate) async fn send<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        payload: Option<&B>,
    ) -> Result<T, ClientError> {
        let mut builder = self.request(method, path)?.query(query);
        if let Some(payload) = payload {
            let body = serde_json::to_vec(payload)
                .map_err(|e| ClientError::decode(format!("Failed to encode request body: {}", e)))?;
            builder = builder.body(body);
        }

        let body = self.execute(operation, builder).await?;
        decode(operation, &body)
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
        payload: &B,
    ) -> Result<T, ClientError> {
        self.send(operation, Method::POST, path, &[], Some(payload)).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
        payload: &B,
    ) -> Result<T, ClientError> {
        self.send(operation, Method::PUT, path, &[], Some(payload)).await
    }

    pub(crate) async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
        payload: &B,
    ) -> Result<T, ClientError> {
        self.send(operation, Method::PATCH, path, &[], Some(payload)).await
    }

    /// DELETE resolves to a success marker; any body is ignored
    pub(crate) async fn delete(&self, operation: Operation, path: &str) -> Result<bool, ClientError> {
        let builder = self.request(Method::DELETE, path)?;
        self.execute(operation, builder).await?;
        Ok(true)
    }
}

fn decode<T: DeserializeOwned>(operation: Operation, body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!("Unexpected response body for {:?}: {}", operation, e);
        ClientError::decode(format!("{}: unexpected response from backend", operation.fallback_message()))
    })
}

/// Human readable reason from an error body, if one can be found
fn rejection_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;

    match parsed.detail? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        // Validation failures: [{"loc": [...], "msg": "...", ...}, ...]
        Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    }
}
