//! Turning a transport outcome into a typed result.
//!
//! One request/response cycle ends in exactly one of four ways:
//!
//! - the transport failed, giving [`LastFmError::Http`];
//! - the body carries Last.fm's error envelope
//!   (`{"error": 10, "message": "..."}`), giving [`LastFmError::Service`]
//!   whatever the HTTP status was;
//! - the body matched neither the envelope nor the expected shape, giving
//!   [`LastFmError::Malformed`];
//! - the body decoded into the requested type.
//!
//! Nothing here retries.

use crate::decode::{parse_uint, DecodeResult};
use crate::error::{DecodeError, ServiceErrorKind};
use crate::requester::RawResponse;
use crate::{LastFmError, Result};
use serde_json::{Map, Value};

/// Decode a transport outcome with `decoder`.
pub fn decode_response<T, F>(outcome: Result<RawResponse>, decoder: F) -> Result<T>
where
    F: FnOnce(&Value) -> DecodeResult<T>,
{
    let response = outcome?;
    decode_body(response.status, &response.body, decoder)
}

/// Decode a received body. `status` is only used for logging; the body
/// alone decides between success and a service error.
pub fn decode_body<T, F>(status: u16, body: &[u8], decoder: F) -> Result<T>
where
    F: FnOnce(&Value) -> DecodeResult<T>,
{
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        log::debug!("HTTP {status} body is not JSON: {e}");
        DecodeError::Json(e)
    })?;

    if let Some(error) = service_error(&value)? {
        log::warn!("Last.fm returned an error (HTTP {status}): {error}");
        return Err(error);
    }

    match decoder(&value) {
        Ok(decoded) => Ok(decoded),
        Err(e) => {
            log::debug!("HTTP {status} body did not decode: {e}");
            Err(LastFmError::Malformed(e))
        }
    }
}

/// The error envelope of `value`, if it has one.
///
/// The code is normally a JSON integer. A nested form,
/// `{"error": {"code": "6", "#text": "..."}}`, is accepted too, and so is a
/// string-encoded code.
pub fn service_error(value: &Value) -> DecodeResult<Option<LastFmError>> {
    let root = match value.as_object() {
        Some(root) => root,
        None => return Ok(None),
    };
    let error = match root.get("error") {
        None | Some(Value::Null) => return Ok(None),
        Some(error) => error,
    };

    let (code, message) = match error {
        Value::Object(nested) => (
            error_code(nested.get("code"), "error.code")?,
            message(nested, "#text", "error.#text")?
                .or(message(nested, "message", "error.message")?)
                .or(message(root, "message", "message")?),
        ),
        code => (
            error_code(Some(code), "error")?,
            message(root, "message", "message")?,
        ),
    };

    Ok(Some(LastFmError::Service {
        kind: ServiceErrorKind::from_code(code),
        message: message.unwrap_or_default(),
    }))
}

fn error_code(value: Option<&Value>, field: &str) -> DecodeResult<i64> {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| DecodeError::malformed(field, n.to_string(), "an integer error code")),
        Some(Value::String(raw)) => parse_uint(field, raw).map(i64::from),
        Some(_) => Err(DecodeError::unexpected(field, "an integer error code")),
        None => Err(DecodeError::missing(field)),
    }
}

fn message(obj: &Map<String, Value>, key: &str, field: &str) -> DecodeResult<Option<String>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DecodeError::unexpected(field, "a string message")),
    }
}
