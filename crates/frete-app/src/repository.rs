//! Repository adapters for record files

use std::path::Path;

use frete_domain::repository::PricingRecordRepository;
use frete_infra::persistence::{CsvPricingRecordRepository, JsonPricingRecordRepository};
use frete_types::{LoaderError, Result};

/// Open CSV record repository
pub fn open_csv_repo(csv_path: &Path) -> Result<CsvPricingRecordRepository> {
    CsvPricingRecordRepository::open(csv_path)
}

/// Open JSON record repository
pub fn open_json_repo(json_path: &Path) -> Result<JsonPricingRecordRepository> {
    JsonPricingRecordRepository::open(json_path)
}

/// Open a repository chosen by file extension (`.csv` or `.json`)
pub fn open_record_repo(path: &Path) -> Result<Box<dyn PricingRecordRepository>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("csv") => Ok(Box::new(open_csv_repo(path)?)),
        Some("json") => Ok(Box::new(open_json_repo(path)?)),
        _ => Err(LoaderError::UnsupportedFile(path.display().to_string()).into()),
    }
}
