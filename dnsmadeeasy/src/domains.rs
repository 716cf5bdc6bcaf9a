//! Managed (primary) domain operations.

use std::time::Duration;

use crate::client::DmeClient;
use crate::error::Result;
use crate::types::{Domain, ListEnvelope, NewDomain};
use crate::wait::ResourceKind;

impl DmeClient {
    /// List every managed domain in the account.
    pub async fn list_domains(&self) -> Result<Vec<Domain>> {
        let envelope: ListEnvelope<Domain> = self.get("dns/managed").await?;
        Ok(envelope.data)
    }

    /// Fetch one domain by its server-assigned ID.
    pub async fn domain(&self, id: i64) -> Result<Domain> {
        self.get(&format!("dns/managed/{id}")).await
    }

    /// Create a domain. Only the name can be chosen; the server assigns
    /// everything else and returns the created value.
    pub async fn add_domain(&self, name: &str) -> Result<Domain> {
        self.post("dns/managed", &NewDomain { name }).await
    }

    /// Update a domain's mutable attributes (vanity set, SOA template,
    /// folder, transfer ACL). The full value is sent back; the name is
    /// immutable.
    pub async fn update_domain(&self, domain: &Domain) -> Result<()> {
        self.put_discard(&format!("dns/managed/{}", domain.id), domain)
            .await
    }

    /// Request deletion of a domain.
    ///
    /// The server acknowledges before the deletion completes; the domain
    /// remains visible for a while afterwards. Use
    /// [`delete_domain_and_wait`](Self::delete_domain_and_wait) when the
    /// caller needs confirmation.
    pub async fn delete_domain(&self, id: i64) -> Result<()> {
        self.delete_discard(&format!("dns/managed/{id}")).await
    }

    /// Delete a domain and block until it is no longer observable, or
    /// until `deadline` elapses with [`DmeError::DeletionTimeout`].
    ///
    /// A failed DELETE short-circuits without polling. Deleting an
    /// already-absent ID confirms immediately.
    ///
    /// [`DmeError::DeletionTimeout`]: crate::DmeError::DeletionTimeout
    pub async fn delete_domain_and_wait(&self, id: i64, deadline: Duration) -> Result<()> {
        self.delete_domain(id).await?;
        self.wait_until_deleted(ResourceKind::Domain, id, deadline)
            .await
    }
}
