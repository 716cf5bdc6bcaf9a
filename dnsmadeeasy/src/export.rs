//! Bulk export of the account's managed domains.

use crate::client::DmeClient;
use crate::error::Result;

impl DmeClient {
    /// Export every managed domain with its records, as the server's
    /// native archive JSON. The value is returned without
    /// reinterpretation.
    pub async fn export_all_domains(&self) -> Result<serde_json::Value> {
        self.get("dns/managed/export").await
    }
}
