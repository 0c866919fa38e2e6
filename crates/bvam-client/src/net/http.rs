use std::future::Future;

/// Asynchronous HTTP collaborator abstraction.
///
/// The client core only needs three request shapes: a query-carrying GET
/// against public endpoints, a form POST for submission endpoints, and a
/// liveness probe. Implementations own their redirect following, TLS, and
/// timeout configuration.
///
/// # Implementations
///
/// - [`ReqwestApi`]: production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpApi: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Perform a GET and return the response body.
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure, timeout, or a non-success
    /// status; a body is only returned for 200-class responses.
    fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Submit form fields with a POST and return the response body.
    fn post_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Liveness probe: request `url` and report the status code.
    ///
    /// The body, if any, is discarded. Unlike [`get`](HttpApi::get), a
    /// non-success status is reported as a code, not an error; connection
    /// failures and timeouts still error.
    fn probe(&self, url: &str) -> impl Future<Output = Result<u16, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use std::time::Duration;

    use super::HttpApi;
    use crate::config::ClientConfig;
    use crate::error::{BvamError, Result};

    /// Production HTTP collaborator backed by `reqwest`.
    pub struct ReqwestApi {
        client: reqwest::Client,
        timeout: Option<Duration>,
        probe_timeout: Option<Duration>,
    }

    impl ReqwestApi {
        /// Build a client using the timeouts from `config`.
        pub fn new(config: &ClientConfig) -> Result<Self> {
            let client = reqwest::Client::builder()
                .build()
                .map_err(|e| BvamError::ClientBuild(Box::new(e)))?;
            Ok(Self {
                client,
                timeout: config.timeout,
                probe_timeout: config.probe_timeout,
            })
        }
    }

    impl HttpApi for ReqwestApi {
        type Error = reqwest::Error;

        async fn get(
            &self,
            url: &str,
            query: &[(&str, &str)],
        ) -> std::result::Result<String, Self::Error> {
            let mut request = self.client.get(url);
            if !query.is_empty() {
                request = request.query(query);
            }
            if let Some(timeout) = self.timeout {
                request = request.timeout(timeout);
            }
            let response = request.send().await?.error_for_status()?;
            response.text().await
        }

        async fn post_form(
            &self,
            url: &str,
            fields: &[(&str, &str)],
        ) -> std::result::Result<String, Self::Error> {
            let mut request = self.client.post(url).form(fields);
            if let Some(timeout) = self.timeout {
                request = request.timeout(timeout);
            }
            let response = request.send().await?.error_for_status()?;
            response.text().await
        }

        async fn probe(&self, url: &str) -> std::result::Result<u16, Self::Error> {
            let mut request = self.client.head(url);
            if let Some(timeout) = self.probe_timeout {
                request = request.timeout(timeout);
            }
            let response = request.send().await?;
            Ok(response.status().as_u16())
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestApi;
