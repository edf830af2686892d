//! Pricing use cases

pub mod pricing_service;
pub mod report;

pub use pricing_service::{PricingService, PricingSummary};
pub use report::generate_pricing_report;
