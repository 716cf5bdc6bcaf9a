//! Record operations within a managed domain.

use crate::client::DmeClient;
use crate::error::{DmeError, Result};
use crate::types::{ListEnvelope, Record, RecordType};

impl DmeClient {
    /// List every record in a domain.
    pub async fn records(&self, domain_id: i64) -> Result<Vec<Record>> {
        let envelope: ListEnvelope<Record> =
            self.get(&format!("dns/managed/{domain_id}/records")).await?;
        Ok(envelope.data)
    }

    /// Create a record and return the server's copy (with ID and
    /// server-managed fields filled in).
    ///
    /// Type-specific required fields are validated locally first; a
    /// failing record produces [`DmeError::InvalidRecord`] and no request.
    pub async fn add_record(&self, domain_id: i64, record: &Record) -> Result<Record> {
        validate_for_write(record)?;
        self.post(&format!("dns/managed/{domain_id}/records"), record)
            .await
    }

    /// Update a record in place. `record.id` selects the record; the type
    /// is immutable. The server returns no body for this call.
    pub async fn update_record(&self, domain_id: i64, record: &Record) -> Result<()> {
        self.put_discard(
            &format!("dns/managed/{domain_id}/records/{}", record.id),
            record,
        )
        .await
    }

    /// Delete a single record. Record deletion is synchronous.
    pub async fn delete_record(&self, domain_id: i64, record_id: i64) -> Result<()> {
        self.delete_discard(&format!("dns/managed/{domain_id}/records/{record_id}"))
            .await
    }

    /// Delete several records with one request, via the comma-separated
    /// `ids` query string. Equivalent in final state to deleting each ID
    /// individually. An empty slice is a no-op.
    pub async fn delete_records(&self, domain_id: i64, record_ids: &[i64]) -> Result<()> {
        if record_ids.is_empty() {
            return Ok(());
        }
        let ids = record_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.delete_discard(&format!("dns/managed/{domain_id}/records?ids={ids}"))
            .await
    }
}

/// Reject records whose type-specific required fields are missing before
/// anything goes on the wire.
fn validate_for_write(record: &Record) -> Result<()> {
    let invalid = |detail: &str| {
        Err(DmeError::InvalidRecord {
            record_type: record.record_type,
            detail: detail.to_string(),
        })
    };

    if record.ttl == 0 {
        return invalid("ttl must be a positive number of seconds");
    }

    match record.record_type {
        RecordType::Mx => {
            if record.mx_level.is_none() {
                return invalid("mxLevel is required");
            }
        }
        RecordType::Srv => {
            if record.priority.is_none() {
                return invalid("priority is required");
            }
            if record.weight.is_none() {
                return invalid("weight is required");
            }
            if record.port.is_none() {
                return invalid("port is required");
            }
        }
        RecordType::Httpred => {
            if record.redirect_type.is_none() {
                return invalid("redirectType is required");
            }
        }
        _ => {}
    }
    Ok(())
}
