//! Start-of-authority template operations.

use crate::client::DmeClient;
use crate::error::Result;
use crate::types::{ListEnvelope, Soa};

impl DmeClient {
    /// List the account's SOA templates.
    pub async fn soa_templates(&self) -> Result<Vec<Soa>> {
        let envelope: ListEnvelope<Soa> = self.get("dns/secondary/soa").await?;
        Ok(envelope.data)
    }

    /// Create an SOA template and return the server's copy.
    pub async fn add_soa(&self, soa: &Soa) -> Result<Soa> {
        self.post("dns/secondary/soa", soa).await
    }

    /// Update an SOA template. The server answers this call with an empty
    /// body; that is success.
    pub async fn update_soa(&self, soa: &Soa) -> Result<()> {
        self.put_discard(&format!("dns/secondary/soa/{}", soa.id), soa)
            .await
    }

    /// Delete an SOA template. Synchronous.
    pub async fn delete_soa(&self, id: i64) -> Result<()> {
        self.delete_discard(&format!("dns/secondary/soa/{id}")).await
    }
}
