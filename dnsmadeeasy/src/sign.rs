//! Request signing: the three `x-dnsme-*` authentication headers.

use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

pub(crate) const HEADER_API_KEY: &str = "x-dnsme-apiKey";
pub(crate) const HEADER_REQUEST_DATE: &str = "x-dnsme-requestDate";
pub(crate) const HEADER_HMAC: &str = "x-dnsme-hmac";

/// RFC 1123 / IMF-fixdate in GMT, e.g. `Mon, 15 Jan 2024 08:00:00 GMT`.
const REQUEST_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// The three header values authenticating one request.
#[derive(Debug, Clone)]
pub(crate) struct RequestAuth {
    pub api_key: String,
    pub request_date: String,
    pub hmac: String,
}

/// Derives per-request authentication headers from the API credentials.
///
/// The server rejects requests whose timestamp is more than roughly ±30
/// seconds from its own clock. `clock_offset` is added to the local wall
/// clock before formatting, so operators with known drift can bias the
/// timestamp the server sees.
///
/// Signing is total: given a fixed instant the output is deterministic.
#[derive(Debug, Clone)]
pub(crate) struct Signer {
    api_key: String,
    secret_key: String,
    clock_offset: Duration,
}

impl Signer {
    pub fn new(api_key: String, secret_key: String, clock_offset: Duration) -> Self {
        Self {
            api_key,
            secret_key,
            clock_offset,
        }
    }

    /// Sign with the current wall clock.
    pub fn sign_now(&self) -> RequestAuth {
        self.sign_at(Utc::now())
    }

    /// Sign at an explicit instant. The HMAC token is the lowercase hex
    /// HMAC-SHA1 of the exact timestamp string, keyed by the secret.
    pub fn sign_at(&self, now: DateTime<Utc>) -> RequestAuth {
        let request_date = (now + self.clock_offset)
            .format(REQUEST_DATE_FORMAT)
            .to_string();
        let hmac = hex::encode(hmac_sha1(
            self.secret_key.as_bytes(),
            request_date.as_bytes(),
        ));
        RequestAuth {
            api_key: self.api_key.clone(),
            request_date,
            hmac,
        }
    }
}

fn hmac_sha1(key: &[u8], data: &[u8]) -> Vec<u8> {
    #[allow(clippy::expect_used)]
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
