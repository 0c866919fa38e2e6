use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use bvam_hash::bvam_hash;

/// A named asset record as served by a BVAM provider.
///
/// Only the fields the validation protocol needs are modeled. Everything
/// else a provider attaches (`uri`, timestamps, ...) rides along in `extra`
/// unexamined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Asset name.
    pub asset: String,

    /// Raw opaque BVAM payload. Absent or empty when the provider has no
    /// record for the asset.
    #[serde(rename = "bvamString", default)]
    pub bvam_string: Option<String>,

    /// CIP-7 hash declared by the provider.
    #[serde(default)]
    pub hash: Option<String>,

    /// Provider metadata passed through unexamined.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AssetRecord {
    /// Structural completeness check.
    ///
    /// A record without a payload cannot be hash-validated and counts as
    /// "not served by this provider".
    pub fn has_payload(&self) -> bool {
        self.bvam_string.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Check a record's declared hash against a recomputation over its payload.
///
/// True iff the CIP-7 hash of `bvam_string` equals `hash` byte-for-byte;
/// false when either field is absent.
pub fn is_valid_bvam(record: &AssetRecord) -> bool {
    match (&record.bvam_string, &record.hash) {
        (Some(payload), Some(declared)) => bvam_hash(payload) == *declared,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{"asset":"SOUP","name":"Soup Token"}"#;
    const PAYLOAD_HASH: &str = "T3KQsCNACpyhNz3tiPqqgUPtepg1X";

    fn record(payload: Option<&str>, hash: Option<&str>) -> AssetRecord {
        AssetRecord {
            asset: "SOUP".to_string(),
            bvam_string: payload.map(str::to_string),
            hash: hash.map(str::to_string),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_decode_passes_metadata_through() {
        let body =
            r#"{"asset":"SOUP","bvamString":"x","hash":"Tabc","uri":"https://bvam.tokenly.com/Tabc.json"}"#;
        let record: AssetRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.asset, "SOUP");
        assert_eq!(record.bvam_string.as_deref(), Some("x"));
        assert_eq!(record.hash.as_deref(), Some("Tabc"));
        assert_eq!(
            record.extra.get("uri").and_then(Value::as_str),
            Some("https://bvam.tokenly.com/Tabc.json")
        );
    }

    #[test]
    fn test_decode_null_payload() {
        let body = r#"{"asset":"SOUP","bvamString":null,"hash":null}"#;
        let record: AssetRecord = serde_json::from_str(body).unwrap();
        assert!(!record.has_payload());
        assert!(!is_valid_bvam(&record));
    }

    #[test]
    fn test_empty_payload_is_incomplete() {
        assert!(!record(Some(""), Some(PAYLOAD_HASH)).has_payload());
        assert!(record(Some(PAYLOAD), None).has_payload());
    }

    #[test]
    fn test_valid_bvam() {
        assert!(is_valid_bvam(&record(Some(PAYLOAD), Some(PAYLOAD_HASH))));
    }

    #[test]
    fn test_invalid_bvam() {
        // Declared hash belongs to a different payload.
        assert!(!is_valid_bvam(&record(
            Some(PAYLOAD),
            Some("T2JAC8ix9g6PhsmKbeiXjtd2yEfCZ")
        )));
        assert!(!is_valid_bvam(&record(Some(PAYLOAD), None)));
        assert!(!is_valid_bvam(&record(None, Some(PAYLOAD_HASH))));
    }
}
