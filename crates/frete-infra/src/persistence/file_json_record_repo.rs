//! File-based implementation of PricingRecordRepository (JSON array)

use std::path::Path;

use frete_domain::repository::{PricingRecordRepository, StoredPricingRecord};
use frete_domain::RawPricingRecord;
use frete_types::Error;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct JsonRecord {
    #[serde(default)]
    id: Option<Value>,
    #[serde(flatten)]
    record: RawPricingRecord,
}

/// JSON-backed repository, loaded once on open
pub struct JsonPricingRecordRepository {
    records: Vec<StoredPricingRecord>,
}

impl JsonPricingRecordRepository {
    pub fn open(json_path: &Path) -> Result<Self, Error> {
        let records = load_records_from_json(json_path)?;
        Ok(Self { records })
    }
}

impl PricingRecordRepository for JsonPricingRecordRepository {
    fn find_all(&self) -> Result<Vec<StoredPricingRecord>, Error> {
        Ok(self.records.clone())
    }
}

fn load_records_from_json(path: &Path) -> Result<Vec<StoredPricingRecord>, Error> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_json_records(&content)
}

fn parse_json_records(content: &str) -> Result<Vec<StoredPricingRecord>, Error> {
    let raw: Vec<JsonRecord> = serde_json::from_str(content)?;
    let records: Vec<StoredPricingRecord> = raw
        .into_iter()
        .map(|entry| StoredPricingRecord {
            id: entry.id.and_then(id_to_string),
            record: entry.record.sanitized(),
        })
        .collect();
    tracing::debug!(count = records.len(), "parsed pricing records from JSON");
    Ok(records)
}

fn id_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_records_with_mixed_ids() {
        let json = r#"[
            {"id": "abc", "pricing_type": "PER_TON", "price_per_ton": 80, "weight": 500000},
            {"id": 7, "pricing_type": "FIXO", "price": "4.500,00"},
            {"pricing_type": null, "price": -1}
        ]"#;
        let records = parse_json_records(json).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id.as_deref(), Some("abc"));
        assert_eq!(records[1].id.as_deref(), Some("7"));
        assert_eq!(records[1].record.price, Some(4500.0));
        assert_eq!(records[2].id, None);
        assert_eq!(records[2].record.price, None);
    }

    #[test]
    fn test_open_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fretes.json");
        std::fs::write(&path, r#"[{"id":"x","pricing_type":"KM","price_per_km":2}]"#).unwrap();
        let repo = JsonPricingRecordRepository::open(&path).unwrap();
        let found = repo.find_by_id("x").unwrap().unwrap();
        assert_eq!(found.record.price_per_km, Some(2.0));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_json_records("{not json"), Err(Error::Json(_))));
    }
}
