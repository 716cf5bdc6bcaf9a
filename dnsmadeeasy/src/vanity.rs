//! Vanity nameserver set operations.

use crate::client::DmeClient;
use crate::error::Result;
use crate::types::{ListEnvelope, Vanity};

impl DmeClient {
    /// List the account's vanity nameserver sets.
    pub async fn vanity_sets(&self) -> Result<Vec<Vanity>> {
        let envelope: ListEnvelope<Vanity> = self.get("dns/vanity").await?;
        Ok(envelope.data)
    }

    /// Create a vanity set and return the server's copy. Assign it to a
    /// domain by setting the domain's `vanity_id` and calling
    /// [`update_domain`](Self::update_domain).
    pub async fn add_vanity(&self, vanity: &Vanity) -> Result<Vanity> {
        self.post("dns/vanity", vanity).await
    }

    /// Update a vanity set.
    pub async fn update_vanity(&self, vanity: &Vanity) -> Result<()> {
        self.put_discard(&format!("dns/vanity/{}", vanity.id), vanity)
            .await
    }

    /// Delete a vanity set. Synchronous.
    pub async fn delete_vanity(&self, id: i64) -> Result<()> {
        self.delete_discard(&format!("dns/vanity/{id}")).await
    }
}
