//! Domain model types

pub mod price_display;
pub mod pricing_record;
pub mod pricing_type;

pub use price_display::{
    CanonicalPriceDisplay, PriceDebug, PricingFailure, RateSource, PRICE_UNAVAILABLE,
};
pub use pricing_record::{PricedRecord, PricingContext, RawPricingRecord};
pub use pricing_type::{normalize_pricing_type, PriceUnit, PricingType};
