//! # dnsmadeeasy
//!
//! A typed client for the [DNS Made Easy](https://dnsmadeeasy.com/) V2.0
//! REST API: managed domains and their records, SOA templates, vanity
//! nameserver sets, secondary DNS (IP sets, secondary domains, folders)
//! and bulk export.
//!
//! Every request is individually signed with the account's API key and an
//! HMAC-SHA1 of the request timestamp; the server accepts a timestamp
//! within ±30 seconds of its own clock. The client signs transparently
//! and supports a fixed clock offset for hosts whose clock is known to be
//! skewed.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dnsmadeeasy = "0.1"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dnsmadeeasy::{DmeClient, Record, RecordType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Build a client. `sandbox()` targets the test environment.
//!     let client = DmeClient::builder("api-key", "secret-key")
//!         .sandbox()
//!         .build()?;
//!
//!     // 2. Create a domain. The server assigns the ID.
//!     let domain = client.add_domain("example.org").await?;
//!
//!     // 3. Add a record to it.
//!     let record = client
//!         .add_record(
//!             domain.id,
//!             &Record {
//!                 record_type: RecordType::A,
//!                 name: "www".to_string(),
//!                 value: "203.0.113.10".to_string(),
//!                 ttl: 300,
//!                 gtd_location: "DEFAULT".to_string(),
//!                 ..Record::default()
//!             },
//!         )
//!         .await?;
//!     println!("created record {}", record.id);
//!
//!     // 4. Tear down. Domain deletion is asynchronous on the server
//!     //    side; this call polls until the domain is really gone.
//!     client
//!         .delete_domain_and_wait(domain.id, std::time::Duration::from_secs(120))
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, DmeError>`](DmeError). Server-side
//! failures carry the HTTP status and the service's own error messages:
//!
//! - [`DmeError::Server`] — non-2xx response, with status and message
//! - [`DmeError::InvalidRecord`] — record rejected locally before any request
//! - [`DmeError::DeletionTimeout`] — a deleted resource stayed visible past the deadline
//!
//! Nothing is retried. A rate-limited response (HTTP 429) surfaces its
//! `Retry-After` hint in [`DmeError::Server`] and the caller decides the
//! policy.

mod client;
mod domains;
mod error;
mod export;
mod http;
mod records;
mod secondary;
mod sign;
mod soa;
mod types;
mod vanity;
mod wait;

pub use client::{DmeClient, DmeClientBuilder, PRODUCTION_API, SANDBOX_API};

pub use error::{DmeError, Result};

pub use types::{
    Domain, Folder, IpSet, Record, RecordType, SecondaryDomain, Soa, Vanity,
};

pub use wait::ResourceKind;
