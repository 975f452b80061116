//! Shared helpers for command handlers.

use std::path::Path;

use chrono::Local;
use natsdash_api::ApiResult;
use natsdash_core::{DateStyle, FormatOptions, format_date};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(prompt_err)
}

/// Map a dialoguer / interactive I/O failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Read and parse a JSON file for `--from-file` flags.
pub fn read_json_file(path: &Path) -> Result<Value, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: "from-file".into(),
        reason: format!("{}: invalid JSON: {e}", path.display()),
    })
}

/// Parse an inline JSON argument.
pub fn parse_json(field: &str, raw: &str) -> Result<Value, CliError> {
    serde_json::from_str(raw).map_err(|e| CliError::Validation {
        field: field.into(),
        reason: format!("invalid JSON: {e}"),
    })
}

/// Inline JSON or `--from-file`, whichever was given.
pub fn json_input(
    field: &str,
    inline: Option<&str>,
    file: Option<&Path>,
) -> Result<Option<Value>, CliError> {
    match (inline, file) {
        (Some(raw), _) => parse_json(field, raw).map(Some),
        (None, Some(path)) => read_json_file(path).map(Some),
        (None, None) => Ok(None),
    }
}

/// Unwrap a success payload or turn the failure into a `RequestFailed`.
pub fn require_success(endpoint: &str, result: ApiResult) -> Result<Value, CliError> {
    result
        .into_result()
        .map_err(|message| CliError::RequestFailed {
            endpoint: endpoint.into(),
            message,
        })
}

/// Decode a success payload into `T`, keeping request failures and
/// shape mismatches apart.
pub fn decode_payload<T: DeserializeOwned>(
    endpoint: &str,
    result: ApiResult,
) -> Result<T, CliError> {
    result.decode().map_err(|e| match e {
        natsdash_api::Error::Failed(message) => CliError::RequestFailed {
            endpoint: endpoint.into(),
            message,
        },
        other => CliError::UnexpectedPayload {
            endpoint: endpoint.into(),
            reason: other.to_string(),
        },
    })
}

/// Local wall-clock time in the given locale's date+time form.
pub fn now_label(locale: &str) -> Result<String, CliError> {
    let options = FormatOptions::for_locale(locale).with_style(DateStyle::DateTime);
    Ok(format_date(&Local::now(), &options)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    #[test]
    fn inline_json_wins() {
        let value = json_input("data", Some(r#"{"a":1}"#), None).unwrap();
        assert_eq!(value, Some(json!({"a": 1})));
    }

    #[test]
    fn reads_json_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"button":"refresh"}}"#).unwrap();

        let value = json_input("data", None, Some(file.path())).unwrap();
        assert_eq!(value, Some(json!({"button": "refresh"})));
    }

    #[test]
    fn bad_json_is_a_validation_error() {
        let err = parse_json("data", "{nope").unwrap_err();
        assert!(matches!(err, CliError::Validation { ref field, .. } if field == "data"));
    }

    #[test]
    fn failure_becomes_request_failed() {
        let err = require_success("/api/x", ApiResult::failure("boom")).unwrap_err();
        assert_eq!(err.to_string(), "Request to /api/x failed: boom");
    }

    #[test]
    fn unknown_locale_is_reported() {
        assert!(matches!(now_label("xx-YY"), Err(CliError::DateFormat(_))));
    }
}
