//! The fixed request body sent by the `/cache` workload.
//!
//! Both the payload string and its JSON encoding are built exactly once per process and shared
//! by every simulated user afterwards. Cloning the encoded body only bumps a reference count, so
//! all requests of a run carry the same bytes.

use std::sync::LazyLock;

use bytes::Bytes;
use serde_json::json;

/// The unit the payload is built from.
pub const PAYLOAD_UNIT: &str = "aa";

/// How many times [`PAYLOAD_UNIT`] is repeated.
pub const PAYLOAD_REPEAT: usize = 30_000;

/// Length of the payload in characters.
pub const PAYLOAD_LEN: usize = PAYLOAD_UNIT.len() * PAYLOAD_REPEAT;

static PAYLOAD: LazyLock<String> = LazyLock::new(|| PAYLOAD_UNIT.repeat(PAYLOAD_REPEAT));

static ENCODED_BODY: LazyLock<Bytes> =
    LazyLock::new(|| Bytes::from(json!({ "body": payload() }).to_string()));

/// Builds the payload and its encoding if that has not happened yet.
///
/// Call this during startup so the first request does not pay for it.
pub fn init() {
    LazyLock::force(&ENCODED_BODY);
    tracing::debug!(len = PAYLOAD_LEN, "payload initialized");
}

/// Returns the payload string.
pub fn payload() -> &'static str {
    &PAYLOAD
}

/// Returns the JSON request body `{"body": <payload>}`.
pub fn encoded_body() -> Bytes {
    ENCODED_BODY.clone()
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn payload_is_repeated_unit() {
        let payload = payload();
        assert_eq!(payload.len(), 60_000);
        assert_eq!(payload.chars().count(), PAYLOAD_LEN);
        assert!(payload.as_bytes().chunks(2).all(|c| c == b"aa"));
    }

    #[test]
    fn encoded_body_has_single_body_key() {
        let value: Value = serde_json::from_slice(&encoded_body()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 1);
        assert_eq!(object["body"].as_str(), Some(payload()));
    }

    #[test]
    fn encoded_body_is_shared() {
        init();
        let first = encoded_body();
        let second = encoded_body();

        assert_eq!(first, second);
        assert_eq!(first.as_ptr(), second.as_ptr());
    }
}
