//! Deletion confirmation for resources the server deletes asynchronously.
//!
//! Deleting a domain or secondary domain returns HTTP success immediately
//! while the backend propagates the removal; the resource stays visible in
//! GET/list endpoints for tens of seconds (sandbox: around 50 s). Callers
//! that need a deterministic teardown, or want to recreate a domain of the
//! same name, poll until the resource has disappeared.

use std::time::Duration;

use tokio::time::{sleep, Instant};

use crate::client::DmeClient;
use crate::error::{DmeError, Result};

/// Interval between visibility polls. Empirical; the server documents no
/// propagation guarantee.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// The resource kinds whose deletion completes asynchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// A managed (primary) domain.
    Domain,
    /// A secondary domain.
    SecondaryDomain,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain => f.write_str("domain"),
            Self::SecondaryDomain => f.write_str("secondary domain"),
        }
    }
}

impl DmeClient {
    /// Poll until the resource is no longer observable or `deadline`
    /// elapses.
    ///
    /// "No longer observable" is an HTTP 404 from the GET-by-id endpoint,
    /// or a 2xx whose decoded ID is zero (the empty-body case decodes to
    /// the zero value). A 404 on the very first poll is success — the
    /// resource may already be gone before we look. Transport and other
    /// server errors abort immediately. `deadline` is an absolute bound on
    /// the whole wait, not a per-poll timeout.
    pub(crate) async fn wait_until_deleted(
        &self,
        kind: ResourceKind,
        id: i64,
        deadline: Duration,
    ) -> Result<()> {
        let expires = Instant::now() + deadline;
        loop {
            if !self.is_visible(kind, id).await? {
                log::debug!("{kind} {id} deletion confirmed");
                return Ok(());
            }
            if Instant::now() + POLL_INTERVAL > expires {
                log::warn!("{kind} {id} still visible at deletion deadline");
                return Err(DmeError::DeletionTimeout { kind, id, deadline });
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn is_visible(&self, kind: ResourceKind, id: i64) -> Result<bool> {
        let fetched_id = match kind {
            ResourceKind::Domain => self.domain(id).await.map(|d| d.id),
            ResourceKind::SecondaryDomain => self.secondary_domain(id).await.map(|d| d.id),
        };
        match fetched_id {
            Ok(fetched) => Ok(fetched != 0),
            Err(DmeError::Server { status: 404, .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
