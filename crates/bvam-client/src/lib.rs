//! BVAM asset-metadata client with sequential provider failover.
//!
//! Retrieves named asset records from one of several redundant HTTP
//! providers, validates each record's CIP-7 hash, and falls over to the next
//! provider when a record is missing or fails validation.
//!
//! # Architecture
//!
//! - [`ClientConfig`] - candidate providers and timeouts
//! - [`HttpApi`] - the HTTP collaborator trait; [`ReqwestApi`] is the
//!   bundled production implementation
//! - [`ProviderRegistry`] - liveness-filtered provider list with a forward
//!   failover cursor
//! - [`BvamClient`] - fetch, validate, and fail over
//!
//! # Key Features
//!
//! - **Startup liveness filtering**: dead candidates are dropped before any
//!   asset query and never block construction
//! - **Sequential failover**: a validation failure rebinds all requests to
//!   the next surviving provider and retries
//! - **Integrity guarantee**: every record returned by the fallback chain
//!   passed a CIP-7 hash recomputation
//!
//! # Example
//!
//! ```rust,no_run
//! use bvam_client::{BvamClient, ClientConfig};
//!
//! # async fn example() -> bvam_client::Result<()> {
//! let config = ClientConfig::with_providers(vec![
//!     "https://bvam.tokenly.com".to_string(),
//!     "https://bvam-stage.tokenly.com".to_string(),
//! ]);
//!
//! let mut client = BvamClient::from_config(&config).await?;
//! let record = client.asset_info("SOUP").await?;
//! println!("{} -> {:?}", record.asset, record.hash);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod net;
mod record;
mod registry;

pub use client::BvamClient;
pub use config::{ClientConfig, DEFAULT_PROVIDER};
pub use error::{BvamError, Result};
pub use net::HttpApi;
pub use record::{AssetRecord, is_valid_bvam};
pub use registry::ProviderRegistry;

#[cfg(feature = "reqwest")]
pub use net::ReqwestApi;

// The hash primitives are part of the public contract.
pub use bvam_hash::{bvam_hash, extract_hash};
