//! Client construction and configuration.

use std::time::Duration as StdDuration;

use chrono::Duration;
use reqwest::Client;

use crate::error::{DmeError, Result};
use crate::sign::Signer;

/// Base URL of the production API.
pub const PRODUCTION_API: &str = "https://api.dnsmadeeasy.com/V2.0/";
/// Base URL of the sandbox API. Isolated data, same signing protocol.
pub const SANDBOX_API: &str = "https://api.sandbox.dnsmadeeasy.com/V2.0/";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Typed client for the DNS Made Easy V2.0 REST API.
///
/// Each method performs exactly one signed HTTP call (the
/// `*_and_wait` deletion helpers add visibility polls) and returns either a
/// decoded value or a [`DmeError`]. The client holds no mutable state and
/// the underlying connection pool is shared, so one instance can be used
/// from any number of tasks concurrently.
///
/// # Construction
///
/// ```rust,no_run
/// use dnsmadeeasy::DmeClient;
///
/// # fn main() -> dnsmadeeasy::Result<()> {
/// let client = DmeClient::builder("api-key", "secret-key")
///     .sandbox()
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct DmeClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) signer: Signer,
}

impl DmeClient {
    /// Start building a client against the production endpoint.
    pub fn builder(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> DmeClientBuilder {
        DmeClientBuilder::new(api_key.into(), secret_key.into())
    }

    /// Production client with default settings.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key, secret_key).build()
    }
}

/// Builder for [`DmeClient`].
pub struct DmeClientBuilder {
    base_url: String,
    api_key: String,
    secret_key: String,
    verify_tls: bool,
    clock_offset: Duration,
    http_client: Option<Client>,
}

impl DmeClientBuilder {
    fn new(api_key: String, secret_key: String) -> Self {
        Self {
            base_url: PRODUCTION_API.to_string(),
            api_key,
            secret_key,
            verify_tls: true,
            clock_offset: Duration::zero(),
            http_client: None,
        }
    }

    /// Target the sandbox endpoint instead of production.
    #[must_use]
    pub fn sandbox(mut self) -> Self {
        self.base_url = SANDBOX_API.to_string();
        self
    }

    /// Target an arbitrary base URL. A trailing `/` is added when missing
    /// so endpoint paths can be appended directly.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// Toggle TLS certificate verification. Disabling is intended for the
    /// sandbox endpoint only. Ignored when an HTTP client override is set.
    #[must_use]
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Bias the signed request timestamp by a fixed amount.
    ///
    /// The server enforces a narrow window (roughly ±30 seconds) between
    /// its clock and the request timestamp; hosts with known drift can
    /// compensate here.
    #[must_use]
    pub fn clock_offset(mut self, offset: Duration) -> Self {
        self.clock_offset = offset;
        self
    }

    /// Use a pre-built [`reqwest::Client`] instead of constructing one.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Validate the configuration and build the client.
    ///
    /// Fails with [`DmeError::Config`] when either credential is empty.
    pub fn build(self) -> Result<DmeClient> {
        if self.api_key.trim().is_empty() {
            return Err(DmeError::Config("API key must not be empty".to_string()));
        }
        if self.secret_key.trim().is_empty() {
            return Err(DmeError::Config("secret key must not be empty".to_string()));
        }

        let client = match self.http_client {
            Some(client) => client,
            None => build_http_client(self.verify_tls)?,
        };

        Ok(DmeClient {
            client,
            base_url: self.base_url,
            signer: Signer::new(self.api_key, self.secret_key, self.clock_offset),
        })
    }
}

fn build_http_client(verify_tls: bool) -> Result<Client> {
    let mut builder = Client::builder()
        .connect_timeout(StdDuration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(StdDuration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    if !verify_tls {
        builder = builder.danger_accept_invalid_certs(true);
    }
    builder
        .build()
        .map_err(|e| DmeError::Config(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_with_credentials() {
        let res = DmeClient::builder("key", "secret").build();
        assert!(res.is_ok(), "expected Ok(..), got an error");
    }

    #[test]
    fn empty_api_key_rejected() {
        let res = DmeClient::builder("", "secret").build();
        assert!(matches!(res, Err(DmeError::Config(_))));
    }

    #[test]
    fn whitespace_secret_rejected() {
        let res = DmeClient::builder("key", "   ").build();
        assert!(matches!(res, Err(DmeError::Config(_))));
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = DmeClient::builder("key", "secret")
            .base_url("http://127.0.0.1:8080/V2.0")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:8080/V2.0/");
    }

    #[test]
    fn sandbox_selects_sandbox_base() {
        let client = DmeClient::builder("key", "secret").sandbox().build().unwrap();
        assert_eq!(client.base_url, SANDBOX_API);
    }
}
