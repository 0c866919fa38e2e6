//! Error types for bvam-client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BvamError {
    #[error("no BVAM provider available")]
    NoProviderAvailable,

    #[error("no provider returned a valid record for asset {asset}")]
    ProvidersExhausted { asset: String },

    #[error("hash mismatch: computed {computed}, declared {declared}")]
    HashMismatch { computed: String, declared: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, BvamError>;
