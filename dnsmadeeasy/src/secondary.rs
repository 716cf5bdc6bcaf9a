//! Secondary DNS: IP sets, secondary domains and folders.

use std::time::Duration;

use crate::client::DmeClient;
use crate::error::Result;
use crate::types::{Folder, IpSet, ListEnvelope, SecondaryDomain};
use crate::wait::ResourceKind;

impl DmeClient {
    // ---- IP sets ----

    /// List the account's IP sets.
    pub async fn ip_sets(&self) -> Result<Vec<IpSet>> {
        self.get("dns/secondary/ipSet").await
    }

    /// Create an IP set and return the server's copy.
    pub async fn add_ip_set(&self, ip_set: &IpSet) -> Result<IpSet> {
        self.post("dns/secondary/ipSet", ip_set).await
    }

    /// Update an IP set.
    pub async fn update_ip_set(&self, ip_set: &IpSet) -> Result<()> {
        self.put_discard(&format!("dns/secondary/ipSet/{}", ip_set.id), ip_set)
            .await
    }

    /// Delete an IP set. Synchronous, but fails while a secondary domain
    /// still references the set.
    pub async fn delete_ip_set(&self, id: i64) -> Result<()> {
        self.delete_discard(&format!("dns/secondary/ipSet/{id}")).await
    }

    // ---- Secondary domains ----

    /// List the account's secondary domains.
    pub async fn secondary_domains(&self) -> Result<Vec<SecondaryDomain>> {
        let envelope: ListEnvelope<SecondaryDomain> = self.get("dns/secondary").await?;
        Ok(envelope.data)
    }

    /// Fetch one secondary domain by ID.
    pub async fn secondary_domain(&self, id: i64) -> Result<SecondaryDomain> {
        self.get(&format!("dns/secondary/{id}")).await
    }

    /// Create a secondary domain. The referenced IP set supplies the AXFR
    /// transfer sources.
    pub async fn add_secondary_domain(
        &self,
        domain: &SecondaryDomain,
    ) -> Result<SecondaryDomain> {
        self.post("dns/secondary", domain).await
    }

    /// Request deletion of a secondary domain. Acknowledged before the
    /// deletion completes, like managed domains.
    pub async fn delete_secondary_domain(&self, id: i64) -> Result<()> {
        self.delete_discard(&format!("dns/secondary/{id}")).await
    }

    /// Delete a secondary domain and block until it is no longer
    /// observable, or until `deadline` elapses with
    /// [`DmeError::DeletionTimeout`](crate::DmeError::DeletionTimeout).
    pub async fn delete_secondary_domain_and_wait(
        &self,
        id: i64,
        deadline: Duration,
    ) -> Result<()> {
        self.delete_secondary_domain(id).await?;
        self.wait_until_deleted(ResourceKind::SecondaryDomain, id, deadline)
            .await
    }

    // ---- Folders ----

    /// List the account's folders. Read-only; folders are managed through
    /// the control panel.
    pub async fn folders(&self) -> Result<Vec<Folder>> {
        self.get("dns/secondary/folder").await
    }
}
