use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Compute the CIP-7 hash of a raw BVAM payload.
///
/// The composition is `"T" + Base58(RIPEMD160(SHA256(payload)))`. The
/// SHA-256 digest feeds RIPEMD-160 as raw bytes, and the 20-byte result is
/// encoded with the Bitcoin Base58 alphabet, no checksum variant.
///
/// The payload is hashed as-is; no normalization is applied.
pub fn bvam_hash(payload: impl AsRef<[u8]>) -> String {
    let sha = Sha256::digest(payload.as_ref());
    let rip = Ripemd160::digest(sha);
    format!("T{}", bs58::encode(rip).into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(bvam_hash(""), "T3Wou4SXgm8Sq9fGKJAhAdn5d6uy4");
        assert_eq!(bvam_hash("hello world"), "T41QPk1SP3NZmiQxd5jY6HWh1tRcD");
        assert_eq!(
            bvam_hash(r#"{"asset":"SOUP","name":"Soup Token"}"#),
            "T3KQsCNACpyhNz3tiPqqgUPtepg1X"
        );
        assert_eq!(
            bvam_hash("The quick brown fox jumps over the lazy dog"),
            "TCUa9gafngQcT3FsahhGwCa158P9"
        );
    }

    #[test]
    fn test_always_t_prefixed() {
        for payload in ["", "a", "{}", "some longer payload with spaces"] {
            assert!(bvam_hash(payload).starts_with('T'));
        }
    }

    #[test]
    fn test_deterministic() {
        let payload = r#"{"asset":"A229152867617021630"}"#;
        assert_eq!(bvam_hash(payload), bvam_hash(payload));
        assert_eq!(bvam_hash(payload), "T3nnDcBdGJQChtHB5uYcDU4o5rE62");
    }

    #[test]
    fn test_raw_bytes_not_normalized() {
        // Trailing whitespace is part of the payload.
        assert_ne!(bvam_hash("hello world"), bvam_hash("hello world\n"));
    }
}
