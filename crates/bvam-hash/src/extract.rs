use once_cell::sync::Lazy;
use regex::Regex;

static HASH_TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[TC][1-9A-HJ-NP-Za-hi-z]{20,}").unwrap());

/// Pull the first BVAM identifier out of a URL or filename.
///
/// An identifier is a `T`- or `C`-prefixed run of at least 20 Base58
/// characters. Returns the matched slice, or `None` when the input carries
/// no identifier. Purely lexical; never touches the network.
pub fn extract_hash(input: &str) -> Option<&str> {
    HASH_TOKEN_REGEX.find(input).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_url() {
        assert_eq!(
            extract_hash("https://bvam.tokenly.com/TtR3AidBhf6pCxKP1jPTaJXGaCay.json"),
            Some("TtR3AidBhf6pCxKP1jPTaJXGaCay")
        );
    }

    #[test]
    fn test_extract_from_filename() {
        assert_eq!(
            extract_hash("TtR3AidBhf6pCxKP1jPTaJXGaCay.json"),
            Some("TtR3AidBhf6pCxKP1jPTaJXGaCay")
        );
    }

    #[test]
    fn test_extract_category_prefix() {
        assert_eq!(
            extract_hash("C7yjyQhk7QV3YrWdNTtSLmWRyr3qU.json"),
            Some("C7yjyQhk7QV3YrWdNTtSLmWRyr3qU")
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_hash("Non validating Test string"), None);
        assert_eq!(extract_hash(""), None);
        // Too short after the prefix.
        assert_eq!(extract_hash("T2JAC8ix9g6"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let input = "TtR3AidBhf6pCxKP1jPTaJXGaCay and T2JAC8ix9g6PhsmKbeiXjtd2yEfCZ";
        assert_eq!(extract_hash(input), Some("TtR3AidBhf6pCxKP1jPTaJXGaCay"));
    }
}
