use bytes::Bytes;
use serde::Serialize;

use crate::error::{Error, ErrorKind};

/// Capability that turns one record into its frame body bytes.
///
/// Implementations must never produce raw line breaks: a `\n` or `\r` in
/// the body would terminate the SSE frame early on the wire. Escape them or
/// fail with a serialization error.
pub trait Serializer<T>: Send + Sync {
    fn serialize(&self, record: &T) -> Result<Bytes, Error>;
}

/// Serializes records as compact JSON via serde_json.
///
/// Compact JSON escapes control characters inside strings, so the output
/// naturally satisfies the no-raw-line-break rule; the check below is the
/// contract guard for the frame boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl<T: Serialize> Serializer<T> for JsonSerializer {
    fn serialize(&self, record: &T) -> Result<Bytes, Error> {
        let body = serde_json::to_vec(record).map_err(Error::serialization)?;

        if body.contains(&b'\n') || body.contains(&b'\r') {
            return Err(Error {
                source: None,
                error_kind: ErrorKind::Serialization,
            });
        }

        Ok(Bytes::from(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_compact_json() {
        let body = JsonSerializer.serialize(&json!({"id": 1})).unwrap();
        assert_eq!(&body[..], br#"{"id":1}"#);
    }

    #[test]
    fn test_escapes_line_breaks_inside_strings() {
        let body = JsonSerializer
            .serialize(&json!({"tagline": "line one\nline two"}))
            .unwrap();

        // The line break is escaped, not emitted raw, so the frame stays intact.
        assert!(!body.contains(&b'\n'));
        assert_eq!(&body[..], br#"{"tagline":"line one\nline two"}"#);
    }

    #[test]
    fn test_rejects_unrepresentable_records() {
        // A map with a non-string key cannot be encoded as a JSON object.
        let mut unrepresentable = std::collections::BTreeMap::new();
        unrepresentable.insert(vec![1u8], "value");

        let result = JsonSerializer.serialize(&unrepresentable);
        assert_eq!(result.unwrap_err().error_kind, ErrorKind::Serialization);
    }
}
