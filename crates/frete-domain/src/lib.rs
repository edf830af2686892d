//! Freight pricing domain
//!
//! `service` holds the canonical price pipeline (normalize, resolve,
//! format). Everything in it is a pure function of its input.

pub mod model;
pub mod repository;
pub mod service;

pub use model::{
    normalize_pricing_type, CanonicalPriceDisplay, PriceDebug, PriceUnit, PricedRecord,
    PricingContext, PricingFailure, PricingType, RateSource, RawPricingRecord,
    PRICE_UNAVAILABLE,
};
pub use service::{get_canonical_freight_price, get_canonical_price_from_total};
