//! Structural checks on untyped server payloads

use super::error::{ProjectManagementError, Result};
use base64::{prelude::BASE64_STANDARD, Engine};
use serde_json::Value;

/// True for a JSON string with at least one character
pub fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.is_empty())
}

/// True for a JSON object (arrays, null and primitives are rejected)
pub fn is_non_null_object(value: &Value) -> bool {
    value.is_object()
}

/// Decode a string in canonical, padded standard base64
///
/// The empty string counts as valid base64 and decodes to no bytes.
pub fn decode_base64(value: &Value) -> Option<Vec<u8>> {
    value
        .as_str()
        .and_then(|s| BASE64_STANDARD.decode(s).ok())
}

/// True for a string [`decode_base64`] accepts
pub fn is_base64_string(value: &Value) -> bool {
    decode_base64(value).is_some()
}

/// Fail with `InvalidServerResponse` unless `condition` holds
pub fn assert_server_response(condition: bool, response: &Value, message: &str) -> Result<()> {
    if condition {
        return Ok(());
    }

    tracing::warn!("invalid server response: {}", message);
    Err(ProjectManagementError::invalid_server_response(
        message, response,
    ))
}
