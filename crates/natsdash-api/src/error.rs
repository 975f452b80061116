use thiserror::Error;

/// Top-level error type for the `natsdash-api` crate.
///
/// These never escape [`ApiClient::request`](crate::ApiClient::request):
/// every variant collapses into [`ApiResult::Failure`](crate::ApiResult)
/// there. They surface directly only when building a client or decoding
/// a payload into a typed model.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint could not be resolved against the base URL.
    #[error("Invalid endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or HTTP client construction failed.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-2xx response. `message` is already normalized.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A failed `ApiResult` was asked for its payload.
    #[error("{0}")]
    Failed(String),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON (de)serialization failed, with the raw body for debugging.
    #[error("{message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialization {
            message: err.to_string(),
            body: String::new(),
        }
    }
}
