use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::core::config::UpstreamConfig;
use crate::modules::upstream::{ApiEnvelope, UpstreamError};

/// A single call against the upstream REST API
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamRequest {
    pub method: Method,
    /// Path below the base URL, starting with `/`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub token: Option<String>,
}

impl UpstreamRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            token: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn bearer(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_string);
        self
    }
}

/// Transport to the upstream API.
///
/// Implementations return the decoded status envelope whenever the response
/// body carries one, regardless of HTTP status. Only transport failures and
/// bodies without an envelope surface as [`UpstreamError`].
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    async fn execute(&self, request: UpstreamRequest) -> Result<ApiEnvelope<Value>, UpstreamError>;
}

/// reqwest-backed [`UpstreamApi`]
pub struct HttpUpstream {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpUpstream {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| UpstreamError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl UpstreamApi for HttpUpstream {
    async fn execute(&self, request: UpstreamRequest) -> Result<ApiEnvelope<Value>, UpstreamError> {
        let url = self.url_for(&request.path);

        tracing::debug!("Upstream {} {}", request.method, url);

        let mut builder = self.http_client.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = request.token.as_deref() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body.as_ref() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("Upstream request failed: {} {} - {}", request.method, url, e);
            UpstreamError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read upstream response body: {}", e);
            UpstreamError::Transport(e.to_string())
        })?;

        match serde_json::from_str::<ApiEnvelope<Value>>(&body) {
            Ok(envelope) => {
                if !envelope.status.is_success() {
                    tracing::debug!(
                        "Upstream status envelope: HTTP {} code={} message={:?}",
                        status,
                        envelope.status.code,
                        envelope.status.message
                    );
                }
                Ok(envelope)
            }
            Err(_) if !status.is_success() => {
                tracing::error!("Upstream API error: HTTP {} - {}", status, body);
                Err(UpstreamError::Http {
                    status: status.as_u16(),
                    body,
                })
            }
            Err(e) => {
                tracing::error!("Failed to parse upstream response: {}", e);
                Err(UpstreamError::Decode(e.to_string()))
            }
        }
    }
}
