// Backend API HTTP client
//
// Wraps `reqwest::Client` with endpoint resolution against a base URL and
// the normalization of every outcome into an `ApiResult`. The endpoint
// helpers (events, stats, health) are inherent methods in their own files
// so this module stays focused on transport mechanics.

use serde_json::Value;
use strum::{Display, EnumString};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::result::{ApiResult, error_message};
use crate::transport::TransportConfig;

// ── Request options ──────────────────────────────────────────────────

/// HTTP method for [`ApiClient::request`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

/// Per-request options. Defaults to a bodiless `GET`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    /// JSON payload. `None` and `Some(Value::Null)` both send no body.
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn new(method: Method) -> Self {
        Self { method, body: None }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// HTTP client for the natsdash backend.
///
/// Cheap to clone; clones share the underlying connection pool. Every
/// request method returns an [`ApiResult`] and never an error.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the backend rooted at `base_url`
    /// (e.g. `http://127.0.0.1:8080`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// The caller is responsible for the `Content-Type: application/json`
    /// default header; [`TransportConfig::build_client`] sets it.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Parse `base_url` and build a client with default transport settings.
    pub fn from_url(base_url: &str) -> Result<Self, Error> {
        Self::new(Url::parse(base_url)?, &TransportConfig::default())
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Perform one request and normalize its outcome.
    ///
    /// `endpoint` is resolved against the base URL without further
    /// validation. 2xx responses become `Success(body)`; everything else,
    /// including connection errors and non-JSON bodies, becomes `Failure`.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> ApiResult {
        match self.send(endpoint, options).await {
            Ok(data) => ApiResult::Success(data),
            Err(err) => {
                debug!(endpoint, status = ?err.status(), error = %err, "request failed");
                ApiResult::from(err)
            }
        }
    }

    async fn send(&self, endpoint: &str, options: RequestOptions) -> Result<Value, Error> {
        let url = self.base_url.join(endpoint)?;
        debug!("{} {}", options.method, url);

        let mut req = self.http.request(options.method.into(), url);
        if let Some(body) = options.body.filter(|b| !b.is_null()) {
            req = req.json(&body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        let data: Value = serde_json::from_str(&text).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: text.clone(),
        })?;

        if status.is_success() {
            Ok(data)
        } else {
            Err(Error::Api {
                status: status.as_u16(),
                message: error_message(&data),
            })
        }
    }
}
