//! Repository trait definitions for data access
//!
//! Services take a repository as a parameter; there is no process-wide
//! client.

use frete_types::Error;

use crate::model::RawPricingRecord;

/// A stored pricing record and its identifier, if the source has one
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPricingRecord {
    pub id: Option<String>,
    pub record: RawPricingRecord,
}

/// Read access to freight/proposal pricing records
pub trait PricingRecordRepository {
    /// Load all records, in source order
    fn find_all(&self) -> Result<Vec<StoredPricingRecord>, Error>;

    /// Find a record by identifier
    fn find_by_id(&self, id: &str) -> Result<Option<StoredPricingRecord>, Error> {
        Ok(self
            .find_all()?
            .into_iter()
            .find(|stored| stored.id.as_deref() == Some(id)))
    }
}
