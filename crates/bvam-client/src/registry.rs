use tracing::{debug, warn};

use crate::error::{BvamError, Result};
use crate::net::HttpApi;

/// Ordered set of live BVAM providers with a forward failover cursor.
///
/// The candidate list is filtered once at construction; the survivors define
/// the failover priority for the life of the client instance. The cursor
/// only moves forward, so a provider that failed validation is never
/// revisited within a session.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    providers: Vec<String>,
    active: usize,
}

impl ProviderRegistry {
    /// Probe `candidates` in order and keep the ones that answer a
    /// 200-class status.
    ///
    /// A candidate that answers another status, refuses the connection, or
    /// times out is dropped. Probing never fails: a down provider must not
    /// block startup, and an empty survivor set surfaces later as
    /// [`BvamError::NoProviderAvailable`].
    pub async fn probe<A: HttpApi>(api: &A, candidates: &[String]) -> Self {
        let mut providers = Vec::with_capacity(candidates.len());
        for url in candidates {
            match api.probe(url).await {
                Ok(status) if (200..300).contains(&status) => {
                    debug!(%url, status, "provider is live");
                    providers.push(url.clone());
                }
                Ok(status) => {
                    warn!(%url, status, "dropping provider: unexpected probe status");
                }
                Err(err) => {
                    warn!(%url, error = %err, "dropping provider: probe failed");
                }
            }
        }
        Self {
            providers,
            active: 0,
        }
    }

    /// Base URL of the provider all requests currently go to.
    pub fn active(&self) -> Result<&str> {
        self.providers
            .get(self.active)
            .map(String::as_str)
            .ok_or(BvamError::NoProviderAvailable)
    }

    /// Move the cursor to the next surviving provider.
    ///
    /// `Ok(())` means "rebind and retry". At the last survivor the chain is
    /// exhausted and the error carries the asset that could not be
    /// validated.
    pub fn advance(&mut self, asset: &str) -> Result<()> {
        if self.active + 1 < self.providers.len() {
            self.active += 1;
            debug!(provider = %self.providers[self.active], asset, "failing over to next provider");
            Ok(())
        } else {
            Err(BvamError::ProvidersExhausted {
                asset: asset.to_string(),
            })
        }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Surviving providers in failover order.
    pub fn providers(&self) -> &[String] {
        &self.providers
    }
}
