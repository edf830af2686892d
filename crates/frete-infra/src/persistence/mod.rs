//! Persistence implementations
//!
//! File-based implementations of `PricingRecordRepository`.

mod file_csv_record_repo;
mod file_json_record_repo;

pub use file_csv_record_repo::CsvPricingRecordRepository;
pub use file_json_record_repo::JsonPricingRecordRepository;
