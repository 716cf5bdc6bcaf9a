use std::time::Duration;

use thiserror::Error;

use crate::types::RecordType;
use crate::wait::ResourceKind;

/// Unified error type for all DNS Made Easy client operations.
///
/// The `operation` fields carry a `"METHOD path"` string (e.g. `"GET
/// dns/managed"`) so errors can be logged directly without extra context.
/// Error messages never contain the secret key or a computed HMAC token.
///
/// No variant is recovered inside the library: every error reaches the
/// caller, including HTTP 429 and transient 5xx responses. Retrying
/// non-idempotent operations is a policy decision the caller must make.
#[derive(Debug, Error)]
pub enum DmeError {
    /// The client configuration was rejected at construction time
    /// (missing credentials, unbuildable HTTP client).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The request failed before an HTTP response was received: DNS
    /// resolution, TCP or TLS failure, timeout, or malformed framing.
    #[error("transport failure during {operation}: {source}")]
    Transport {
        /// The request that failed, as `"METHOD path"`.
        operation: String,
        /// Underlying cause.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{operation} failed with HTTP {status}: {message}")]
    Server {
        /// The request that failed, as `"METHOD path"`.
        operation: String,
        /// HTTP status code.
        status: u16,
        /// Joined messages from the `{"error": [...]}` envelope, or the
        /// raw response body when the envelope could not be decoded.
        message: String,
        /// The server's `Retry-After` hint in seconds, if it sent one.
        /// Surfaced as-is; the library never retries.
        retry_after: Option<u64>,
    },

    /// A 2xx response body could not be parsed against the expected schema.
    #[error("could not decode response to {operation}: {detail}")]
    Decode {
        /// The request whose response failed to decode.
        operation: String,
        /// Parser error details.
        detail: String,
    },

    /// A record was rejected locally because fields required for its type
    /// are missing or invalid. No request was sent.
    #[error("invalid {record_type} record: {detail}")]
    InvalidRecord {
        /// Type of the offending record.
        record_type: RecordType,
        /// What is missing or wrong.
        detail: String,
    },

    /// An asynchronously deleted resource was still visible when the
    /// deletion deadline expired.
    #[error("{kind} {id} was still visible after the {}s deletion deadline", deadline.as_secs())]
    DeletionTimeout {
        /// Which resource kind was being deleted.
        kind: ResourceKind,
        /// Server-assigned ID of the resource.
        id: i64,
        /// The deadline that expired.
        deadline: Duration,
    },
}

/// Convenience type alias for `Result<T, DmeError>`.
pub type Result<T> = std::result::Result<T, DmeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config() {
        let e = DmeError::Config("API key must not be empty".to_string());
        assert_eq!(
            e.to_string(),
            "invalid configuration: API key must not be empty"
        );
    }

    #[test]
    fn display_server() {
        let e = DmeError::Server {
            operation: "GET dns/managed/123".to_string(),
            status: 404,
            message: "domain not found".to_string(),
            retry_after: None,
        };
        assert_eq!(
            e.to_string(),
            "GET dns/managed/123 failed with HTTP 404: domain not found"
        );
    }

    #[test]
    fn display_decode() {
        let e = DmeError::Decode {
            operation: "GET dns/managed".to_string(),
            detail: "expected value at line 1".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "could not decode response to GET dns/managed: expected value at line 1"
        );
    }

    #[test]
    fn display_invalid_record() {
        let e = DmeError::InvalidRecord {
            record_type: RecordType::Mx,
            detail: "mxLevel is required".to_string(),
        };
        assert_eq!(e.to_string(), "invalid MX record: mxLevel is required");
    }

    #[test]
    fn display_deletion_timeout() {
        let e = DmeError::DeletionTimeout {
            kind: ResourceKind::Domain,
            id: 42,
            deadline: Duration::from_secs(120),
        };
        assert_eq!(
            e.to_string(),
            "domain 42 was still visible after the 120s deletion deadline"
        );
    }

    // Error text must never leak credentials, whatever the server echoes back
    // is the caller's responsibility, but the library adds nothing secret.
    #[test]
    fn display_server_contains_no_auth_material() {
        let e = DmeError::Server {
            operation: "POST dns/managed".to_string(),
            status: 403,
            message: "API key not found".to_string(),
            retry_after: Some(30),
        };
        let text = e.to_string();
        assert!(!text.contains("x-dnsme-hmac"));
        assert!(!text.to_lowercase().contains("secret"));
    }
}
