//! Normalization of upstream responses into payloads or [`FmpError`]s.

use fmp_core::FmpError;
use serde_json::Value;

/// Field FMP uses for error payloads, on both error statuses and some 200s.
const ERROR_MESSAGE_FIELD: &str = "Error Message";
const MESSAGE_FIELD: &str = "message";

/// Pull the upstream's own error message out of a response body, if it has one.
pub(crate) fn upstream_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    error_payload_message(&value)
}

fn error_payload_message(value: &Value) -> Option<String> {
    let obj = value.as_object()?;
    if let Some(msg) = obj.get(ERROR_MESSAGE_FIELD).and_then(Value::as_str) {
        return Some(msg.to_string());
    }
    // A bare `{"message": ..}` is an error; a data object that happens to carry one is not.
    if obj.len() == 1 {
        return obj
            .get(MESSAGE_FIELD)
            .and_then(Value::as_str)
            .map(str::to_string);
    }
    None
}

/// Decode a successful response body.
///
/// - Blank body or JSON `null`: [`FmpError::NoData`].
/// - Error object in place of data: [`FmpError::Api`].
/// - Anything that is not JSON: [`FmpError::Decode`].
pub(crate) fn decode_success(path: &str, body: &str) -> Result<Value, FmpError> {
    if body.trim().is_empty() {
        return Err(FmpError::no_data(path));
    }
    let value: Value =
        serde_json::from_str(body).map_err(|e| FmpError::decode(path, e.to_string()))?;
    if value.is_null() {
        return Err(FmpError::no_data(path));
    }
    if let Some(message) = error_payload_message(&value) {
        return Err(FmpError::Api { message });
    }
    Ok(value)
}
