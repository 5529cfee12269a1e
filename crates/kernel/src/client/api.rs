//! Generic JSON request wrapper around the backend REST API.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::{ApiError, TokenStore};

/// Client for the Orderlee backend.
///
/// Cheap to clone; clones share the bearer token.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    base_url: String,
    http: reqwest::Client,
    token: RwLock<Option<String>>,
    store: Box<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client, picking up any token left in `store`.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        store: impl TokenStore + 'static,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;

        let token = store.load()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(%base_url, has_token = token.is_some(), "api client created");

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                base_url,
                http,
                token: RwLock::new(token),
                store: Box::new(store),
            }),
        })
    }

    /// Base URL every endpoint is appended to.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Current bearer token.
    pub fn token(&self) -> Option<String> {
        self.inner.token.read().clone()
    }

    /// True if a bearer token is held.
    pub fn has_token(&self) -> bool {
        self.inner.token.read().is_some()
    }

    /// Store a new bearer token (login/signup).
    pub fn set_token(&self, token: &str) -> Result<(), ApiError> {
        self.inner.store.save(token)?;
        *self.inner.token.write() = Some(token.to_string());
        Ok(())
    }

    /// Drop the bearer token (logout).
    pub fn clear_token(&self) -> Result<(), ApiError> {
        *self.inner.token.write() = None;
        self.inner.store.clear()?;
        Ok(())
    }

    /// Send a request and decode the JSON response.
    ///
    /// Backends wrap payloads as `{"data": ...}`; a non-null `data` field is
    /// unwrapped, otherwise the whole document is decoded. An empty body
    /// decodes as JSON `null`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.inner.base_url, endpoint);

        let mut builder = self
            .inner
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        debug!(%method, endpoint, "api request");

        let response = builder.send().await.inspect_err(|e| {
            warn!(%method, endpoint, error = %e, "api request failed");
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(status.as_u16(), &bytes);
            warn!(
                %method,
                endpoint,
                status = status.as_u16(),
                error = %message,
                "api request failed"
            );
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let document = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok(serde_json::from_value(unwrap_envelope(document))?)
    }

    /// GET `endpoint`.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(Method::GET, endpoint, None).await
    }

    /// POST `endpoint` with an optional JSON body.
    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, endpoint, body).await
    }

    /// PUT `endpoint` with an optional JSON body.
    pub async fn put<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, endpoint, body).await
    }

    /// DELETE `endpoint`.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(Method::DELETE, endpoint, None).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .field("has_token", &self.has_token())
            .finish()
    }
}

/// Message for a failed response: the body's `message` field when present.
fn error_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}

fn unwrap_envelope(document: Value) -> Value {
    match document {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) if !data.is_null() => data,
            Some(data) => {
                map.insert("data".to_string(), data);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    }
}
