//! File-based implementation of PricingRecordRepository (CSV)

use std::path::Path;

use frete_domain::repository::{PricingRecordRepository, StoredPricingRecord};
use frete_types::Error;

use crate::record_csv::load_records_from_csv;

/// CSV-backed repository, loaded once on open
pub struct CsvPricingRecordRepository {
    records: Vec<StoredPricingRecord>,
}

impl CsvPricingRecordRepository {
    pub fn open(csv_path: &Path) -> Result<Self, Error> {
        let records = load_records_from_csv(csv_path)?;
        Ok(Self { records })
    }
}

impl PricingRecordRepository for CsvPricingRecordRepository {
    fn find_all(&self) -> Result<Vec<StoredPricingRecord>, Error> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_and_find() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fretes.csv");
        std::fs::write(
            &path,
            "id,pricing_type,price_per_km,distance_km\nA,PER_KM,2,100\nB,KM,3,50\n",
        )
        .unwrap();

        let repo = CsvPricingRecordRepository::open(&path).unwrap();
        assert_eq!(repo.find_all().unwrap().len(), 2);
        let b = repo.find_by_id("B").unwrap().unwrap();
        assert_eq!(b.record.price_per_km, Some(3.0));
        assert!(repo.find_by_id("Z").unwrap().is_none());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = CsvPricingRecordRepository::open(&dir.path().join("none.csv"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }
}
