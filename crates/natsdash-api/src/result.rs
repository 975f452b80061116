//! Normalized outcome of a single API request.
//!
//! [`ApiResult`] is what every request helper hands back. Transport errors,
//! undecodable bodies and non-2xx responses all become
//! [`ApiResult::Failure`], so callers branch once on success instead of
//! juggling error types.

use serde::de::DeserializeOwned;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

use crate::error::Error;

/// Message used when a failure carries no text of its own.
pub const FALLBACK_ERROR: &str = "Request failed";

/// Tagged success/failure outcome of a network call.
///
/// Serializes to the flat `{ "success", "data", "error" }` shape, with
/// `data` null on failure and `error` null on success.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
    /// 2xx response; the decoded JSON body.
    Success(Value),
    /// Any other outcome; a human-readable message.
    Failure(String),
}

impl ApiResult {
    /// Build a failure, substituting [`FALLBACK_ERROR`] for empty text.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Self::Failure(FALLBACK_ERROR.to_owned())
        } else {
            Self::Failure(message)
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The decoded body, present only on success.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// The failure message, present only on failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    pub fn into_result(self) -> Result<Value, String> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(message) => Err(message),
        }
    }

    /// Interpret a success payload as a typed model.
    ///
    /// A failure yields [`Error::Failed`] with its message; a payload that
    /// doesn't fit `T` yields [`Error::Deserialization`] carrying the body.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, Error> {
        let data = self.into_result().map_err(Error::Failed)?;
        T::deserialize(&data).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: data.to_string(),
        })
    }
}

impl From<Error> for ApiResult {
    fn from(err: Error) -> Self {
        Self::failure(err.to_string())
    }
}

impl Serialize for ApiResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ApiResult", 3)?;
        state.serialize_field("success", &self.is_success())?;
        state.serialize_field("data", &self.data())?;
        state.serialize_field("error", &self.error())?;
        state.end()
    }
}

/// Pick the message for a non-2xx response body.
///
/// Uses the body's `message` field when it is truthy (non-empty string,
/// non-zero number, `true`, object or array), else [`FALLBACK_ERROR`].
pub(crate) fn error_message(body: &Value) -> String {
    match body.get("message") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v != 0.0) => n.to_string(),
        Some(v @ (Value::Bool(true) | Value::Object(_) | Value::Array(_))) => v.to_string(),
        // Includes a bare `null` body, which has no fields to read
        _ => FALLBACK_ERROR.to_owned(),
    }
}
