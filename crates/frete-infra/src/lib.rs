//! Infrastructure layer - record loaders and file-backed repositories

pub mod persistence;
pub mod record_csv;
