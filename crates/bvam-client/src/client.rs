use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use bvam_hash::bvam_hash;

use crate::config::ClientConfig;
use crate::error::{BvamError, Result};
use crate::net::HttpApi;
use crate::record::{AssetRecord, is_valid_bvam};
use crate::registry::ProviderRegistry;

const BVAM_LIST_PATH: &str = "api/v1/bvam/all";
const CATEGORY_LIST_PATH: &str = "api/v1/category/all";
const ASSET_PATH: &str = "api/v1/asset";
const ASSETS_PATH: &str = "api/v1/assets";
const BVAM_SUBMIT_PATH: &str = "api/v1/bvam";
const CATEGORY_SUBMIT_PATH: &str = "api/v1/category";

/// Only the embedded asset name matters when a payload is handed in
/// directly; the rest of the document stays opaque.
#[derive(Deserialize)]
struct RawPayload {
    asset: String,
}

/// BVAM lookup client with sequential provider failover.
///
/// All requests go to the registry's active provider. Fallback-driving
/// operations take `&mut self` because a validation failure moves the
/// cursor; the rebinding is visible to every subsequent request. The type
/// is single-threaded per instance, matching the strictly sequential
/// protocol.
pub struct BvamClient<A: HttpApi> {
    api: A,
    registry: ProviderRegistry,
}

impl<A: HttpApi> BvamClient<A> {
    /// Probe the configured candidates and bind to the first live provider.
    ///
    /// Construction never fails: an all-dead candidate list yields a client
    /// whose operations report [`BvamError::NoProviderAvailable`].
    pub async fn connect(api: A, config: &ClientConfig) -> Self {
        let registry = ProviderRegistry::probe(&api, &config.providers).await;
        Self { api, registry }
    }

    /// The liveness-filtered provider set, for inspection.
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// All BVAM records known to the active provider.
    pub async fn bvam_list(&self) -> Result<Value> {
        self.get_json(BVAM_LIST_PATH, &[]).await
    }

    /// All categories known to the active provider.
    pub async fn category_list(&self) -> Result<Value> {
        self.get_json(CATEGORY_LIST_PATH, &[]).await
    }

    /// Fetch and validate the record for `asset_name`.
    ///
    /// A record that is structurally incomplete or fails the CIP-7 check
    /// moves the registry to the next provider and the fetch runs again,
    /// until a provider serves a valid record or the chain is exhausted
    /// ([`BvamError::ProvidersExhausted`]). On success the returned record
    /// passed validation against the then-active provider.
    pub async fn asset_info(&mut self, asset_name: &str) -> Result<AssetRecord> {
        loop {
            match self.fetch_asset(asset_name).await {
                Ok(record) if record.has_payload() && is_valid_bvam(&record) => {
                    return Ok(record);
                }
                Ok(_) => {
                    warn!(asset = asset_name, "provider served an invalid record");
                }
                // An empty registry is fatal, not a failover trigger.
                Err(BvamError::NoProviderAvailable) => return Err(BvamError::NoProviderAvailable),
                Err(err) => {
                    warn!(asset = asset_name, error = %err, "fetch failed, failing over");
                }
            }
            self.registry.advance(asset_name)?;
        }
    }

    /// Fetch validated records for several assets with one batch request.
    ///
    /// The batch response is walked in response order; each item that fails
    /// validation independently falls back to the single-asset chain via
    /// [`asset_info`](Self::asset_info), while valid items are used as-is.
    /// The result carries one entry per asset the batch response named.
    pub async fn multiple_assets_info(
        &mut self,
        asset_names: &[&str],
    ) -> Result<BTreeMap<String, AssetRecord>> {
        let csv = asset_names.join(",");
        let value = self.get_json(ASSETS_PATH, &[("assets", csv.as_str())]).await?;
        let batch: Vec<AssetRecord> = serde_json::from_value(value)?;

        let mut output = BTreeMap::new();
        for record in batch {
            if record.has_payload() && is_valid_bvam(&record) {
                output.insert(record.asset.clone(), record);
            } else {
                let name = record.asset;
                let valid = self.asset_info(&name).await?;
                output.insert(name, valid);
            }
        }
        Ok(output)
    }

    /// Validate an already-retrieved raw payload against `expected_hash`
    /// and, on success, fetch the full validated record it names.
    ///
    /// A mismatch is terminal ([`BvamError::HashMismatch`]): the payload is
    /// the untrusted input here, so no provider fallback applies.
    pub async fn asset(&mut self, raw_payload: &str, expected_hash: &str) -> Result<AssetRecord> {
        let computed = bvam_hash(raw_payload);
        if computed != expected_hash {
            return Err(BvamError::HashMismatch {
                computed,
                declared: expected_hash.to_string(),
            });
        }
        let payload: RawPayload = serde_json::from_str(raw_payload)?;
        self.asset_info(&payload.asset).await
    }

    /// Submit a raw BVAM document to the active provider.
    pub async fn add_bvam_json(&self, bvam_json: &str) -> Result<Value> {
        self.post_json(BVAM_SUBMIT_PATH, &[("bvam", bvam_json)]).await
    }

    /// Submit a raw category document to the active provider.
    pub async fn add_category_json(&self, category_json: &str) -> Result<Value> {
        self.post_json(CATEGORY_SUBMIT_PATH, &[("category", category_json)])
            .await
    }

    async fn fetch_asset(&self, asset_name: &str) -> Result<AssetRecord> {
        let value = self
            .get_json(&format!("{ASSET_PATH}/{asset_name}"), &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let url = self.endpoint(path)?;
        let body = self
            .api
            .get(&url, query)
            .await
            .map_err(|source| BvamError::Transport {
                url,
                source: Box::new(source),
            })?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json(&self, path: &str, fields: &[(&str, &str)]) -> Result<Value> {
        let url = self.endpoint(path)?;
        let body = self
            .api
            .post_form(&url, fields)
            .await
            .map_err(|source| BvamError::Transport {
                url,
                source: Box::new(source),
            })?;
        Ok(serde_json::from_str(&body)?)
    }

    fn endpoint(&self, path: &str) -> Result<String> {
        let base = self.registry.active()?;
        Ok(format!("{}/{}", base.trim_end_matches('/'), path))
    }
}

#[cfg(feature = "reqwest")]
impl BvamClient<crate::net::ReqwestApi> {
    /// Probe and connect using the bundled `reqwest` collaborator.
    pub async fn from_config(config: &ClientConfig) -> Result<Self> {
        let api = crate::net::ReqwestApi::new(config)?;
        Ok(Self::connect(api, config).await)
    }
}
