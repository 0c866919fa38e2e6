use std::time::Duration;

/// Provider consulted when no candidate list is supplied.
pub const DEFAULT_PROVIDER: &str = "https://bvam.tokenly.com";

/// Configuration for a [`BvamClient`](crate::BvamClient).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use bvam_client::ClientConfig;
///
/// let config = ClientConfig::with_providers(vec![
///     "https://bvam.tokenly.com".to_string(),
///     "https://bvam-stage.tokenly.com".to_string(),
/// ])
/// .timeout(Duration::from_secs(30))
/// .probe_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Ordered candidate base URLs; position defines failover priority.
    pub providers: Vec<String>,

    /// Per-request timeout handed to the HTTP collaborator.
    ///
    /// `None` defers to the collaborator's own default.
    pub timeout: Option<Duration>,

    /// Timeout for the construction-time liveness probe.
    pub probe_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            providers: vec![DEFAULT_PROVIDER.to_string()],
            timeout: None,
            probe_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Use `providers` as the candidate list, falling back to
    /// [`DEFAULT_PROVIDER`] when the list is empty.
    pub fn with_providers(providers: Vec<String>) -> Self {
        if providers.is_empty() {
            Self::default()
        } else {
            Self {
                providers,
                ..Self::default()
            }
        }
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the liveness-probe timeout.
    #[must_use]
    pub fn probe_timeout(mut self, probe_timeout: Duration) -> Self {
        self.probe_timeout = Some(probe_timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider() {
        let config = ClientConfig::default();
        assert_eq!(config.providers, vec![DEFAULT_PROVIDER.to_string()]);
        assert!(config.timeout.is_none());
        assert!(config.probe_timeout.is_none());
    }

    #[test]
    fn test_empty_list_falls_back_to_default() {
        let config = ClientConfig::with_providers(Vec::new());
        assert_eq!(config.providers, vec![DEFAULT_PROVIDER.to_string()]);
    }

    #[test]
    fn test_explicit_providers_kept_in_order() {
        let urls = vec![
            "https://a.example.com".to_string(),
            "https://b.example.com".to_string(),
        ];
        let config = ClientConfig::with_providers(urls.clone());
        assert_eq!(config.providers, urls);
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::default()
            .timeout(Duration::from_secs(30))
            .probe_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.probe_timeout, Some(Duration::from_secs(5)));
    }
}
