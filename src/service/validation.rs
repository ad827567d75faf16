//! Request body decoding and required-field extraction
//!
//! Bodies are decoded by hand rather than through a typed extractor so that a
//! missing, empty or malformed payload becomes a gateway outcome instead of a
//! framework rejection.

use serde_json::{Map, Value};

/// A decoded request body: the top-level JSON object, if any
pub type RequestBody = Map<String, Value>;

/// Decode a raw request body
///
/// Returns `None` when there is no payload: empty bytes, JSON `null`, or bytes
/// that are not JSON. A JSON value other than an object decodes to an empty
/// body, so every field lookup on it misses.
pub fn decode_body(bytes: &[u8]) -> Option<RequestBody> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Null) | Err(_) => None,
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => Some(RequestBody::new()),
    }
}

/// Look up a required string field
///
/// A field holding anything other than a JSON string counts as missing.
pub fn required_str<'a>(body: &'a RequestBody, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str)
}
