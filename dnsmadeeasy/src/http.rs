//! Transport: build, sign, execute and decode one REST call.
//!
//! Exactly one outbound HTTP request per call. Nothing is retried; HTTP
//! 429 and transient 5xx responses surface as [`DmeError::Server`] and the
//! caller decides the policy.

use reqwest::header::{ACCEPT, RETRY_AFTER};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::client::DmeClient;
use crate::error::{DmeError, Result};
use crate::sign::{HEADER_API_KEY, HEADER_HMAC, HEADER_REQUEST_DATE};

/// Error envelope the server sends on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Vec<String>,
}

/// Maximum number of characters of a response body included in logs.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a response body for safe logging.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

impl DmeClient {
    pub(crate) async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// PUT whose response body is ignored. The server answers several
    /// updates (SOA among them) with 2xx and an empty body; both empty and
    /// non-empty bodies count as success.
    pub(crate) async fn put_discard<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let _: serde_json::Value = self.request(Method::PUT, path, Some(body)).await?;
        Ok(())
    }

    /// DELETE whose response body is ignored.
    pub(crate) async fn delete_discard(&self, path: &str) -> Result<()> {
        let _: serde_json::Value = self.request(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    /// Execute one authenticated call.
    ///
    /// A 2xx response with an empty body decodes to `T::default()`; the
    /// service does this for creates-without-content and most updates.
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let operation = format!("{method} {path}");
        log::debug!("{operation}");

        let auth = self.signer.sign_now();
        let mut request = self
            .client
            .request(method, &url)
            .header(HEADER_API_KEY, &auth.api_key)
            .header(HEADER_REQUEST_DATE, &auth.request_date)
            .header(HEADER_HMAC, &auth.hmac)
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            // .json() also sets Content-Type: application/json
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| DmeError::Transport {
            operation: operation.clone(),
            source: e,
        })?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let text = response.text().await.map_err(|e| DmeError::Transport {
            operation: operation.clone(),
            source: e,
        })?;
        log::debug!("{operation} -> {status}: {}", truncate_for_log(&text));

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|envelope| envelope.error.join("; "))
                .unwrap_or_else(|_| text.trim().to_string());
            log::warn!("{operation} failed with HTTP {status}: {message}");
            return Err(DmeError::Server {
                operation,
                status: status.as_u16(),
                message,
                retry_after,
            });
        }

        if text.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&text).map_err(|e| {
            log::error!("{operation}: undecodable body: {}", truncate_for_log(&text));
            DmeError::Decode {
                operation,
                detail: e.to_string(),
            }
        })
    }
}
