//! Pricing services

pub mod canonical_price;
pub mod price_formatter;
pub mod rate_resolver;
pub mod total_back_solver;

pub use canonical_price::get_canonical_freight_price;
pub use price_formatter::{format_brl, primary_label, secondary_label};
pub use rate_resolver::{resolve_unit_rate, ResolvedRate};
pub use total_back_solver::get_canonical_price_from_total;
