//! CIP-7 hashing and identifier extraction for BVAM asset records.
//!
//! Provides the integrity primitive the provider-fallback protocol depends
//! on, without any I/O or verification policy. The hash composition must be
//! bit-exact with other CIP-7 implementations for interoperability.
//!
//! # Key Features
//!
//! - **Pure functions**: no hidden state, deterministic across calls
//! - **Bit-exact**: SHA-256 → RIPEMD-160 → Base58, `"T"`-prefixed
//! - **Offline extraction**: pull an identifier out of a URL or filename
//!   without touching the network
//!
//! # Example
//!
//! ```
//! use bvam_hash::{bvam_hash, extract_hash};
//!
//! let hash = bvam_hash(r#"{"asset":"SOUP","name":"Soup Token"}"#);
//! assert!(hash.starts_with('T'));
//!
//! let url = format!("https://bvam.example.com/{hash}.json");
//! assert_eq!(extract_hash(&url), Some(hash.as_str()));
//! ```

pub use self::cip7::bvam_hash;
pub use self::extract::extract_hash;

mod cip7;
mod extract;
