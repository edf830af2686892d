//! Unit rate resolution per pricing type

use crate::model::pricing_record::positive;
use crate::model::{PricingType, RateSource, RawPricingRecord};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRate {
    pub value: f64,
    pub source: RateSource,
}

impl ResolvedRate {
    fn new(value: f64, source: RateSource) -> Self {
        Self { value, source }
    }
}

/// Pick the unit rate for an already classified record.
///
/// Only positive finite values count. The total `price` is never divided
/// here, and `required_trucks` never touches the rate.
pub fn resolve_unit_rate(record: &RawPricingRecord, pricing_type: PricingType) -> Option<ResolvedRate> {
    match pricing_type {
        PricingType::PerTon => positive(record.price_per_ton)
            .map(|v| ResolvedRate::new(v, RateSource::PricePerTon))
            // TODO: drop once stored PER_TON freights are migrated to price_per_ton
            .or_else(|| {
                positive(record.price_per_km).map(|v| ResolvedRate::new(v, RateSource::PricePerKmLegacy))
            }),
        PricingType::PerKm => {
            positive(record.price_per_km).map(|v| ResolvedRate::new(v, RateSource::PricePerKm))
        }
        PricingType::PerVehicle => {
            positive(record.price).map(|v| ResolvedRate::new(v, RateSource::Price))
        }
    }
}
