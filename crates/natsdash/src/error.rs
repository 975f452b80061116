//! CLI error types with miette diagnostics.
//!
//! Maps library errors into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use natsdash_config::ConfigError;
use natsdash_core::FormatError;

/// Process exit codes. Success is 0.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const REQUEST: i32 = 3;
    pub const CONFIG: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Requests ─────────────────────────────────────────────────────

    #[error("Request to {endpoint} failed: {message}")]
    #[diagnostic(
        code(natsdash::request_failed),
        help(
            "Check that the backend is reachable at the configured server URL.\n\
             Try: natsdash health -v"
        )
    )]
    RequestFailed { endpoint: String, message: String },

    #[error("Unexpected response from {endpoint}: {reason}")]
    #[diagnostic(
        code(natsdash::unexpected_payload),
        help("Use --raw (stats) or `natsdash request {endpoint}` to inspect the body.")
    )]
    UnexpectedPayload { endpoint: String, reason: String },

    #[error("Could not set up the HTTP client: {reason}")]
    #[diagnostic(
        code(natsdash::client_setup),
        help("Check the ca_cert path in your profile, or use --insecure (-k) for dev backends.")
    )]
    ClientSetup { reason: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(natsdash::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(
        code(natsdash::date_format),
        help("Pick a supported locale with --locale, e.g. en-US, de-DE or fr-FR.")
    )]
    DateFormat(#[from] FormatError),

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(natsdash::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: natsdash config init --name {name} --server <URL>"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No backend configured")]
    #[diagnostic(
        code(natsdash::no_config),
        help(
            "Pass --server <URL>, set NATSDASH_SERVER, or create a profile with:\n\
             natsdash config init --server <URL>\n\
             Expected config at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(natsdash::config))]
    Config(Box<ConfigError>),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(natsdash::json), help("Check the JSON text and try again."))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(Box::new(other)),
        }
    }
}

impl From<natsdash_api::Error> for CliError {
    fn from(err: natsdash_api::Error) -> Self {
        Self::ClientSetup {
            reason: err.to_string(),
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RequestFailed { .. } | Self::UnexpectedPayload { .. } => exit_code::REQUEST,
            Self::Validation { .. } | Self::DateFormat(_) | Self::Json(_) => exit_code::USAGE,
            Self::ProfileNotFound { .. } | Self::NoConfig { .. } | Self::Config(_) => {
                exit_code::CONFIG
            }
            Self::ClientSetup { .. } | Self::Io(_) | Self::Yaml(_) => exit_code::GENERAL,
        }
    }
}
