//! Export of priced records

pub mod excel;

pub use excel::export_to_excel;
