//! Canonical freight price: normalize, resolve, format

use crate::model::{
    normalize_pricing_type, CanonicalPriceDisplay, PricingFailure, RawPricingRecord,
};

use super::price_formatter::{primary_label, secondary_label};
use super::rate_resolver::resolve_unit_rate;

/// Resolve the display for a raw freight or proposal record.
///
/// Fails closed: an unknown type or a missing rate yields the
/// unavailability label, never an estimate.
pub fn get_canonical_freight_price(input: &RawPricingRecord) -> CanonicalPriceDisplay {
    let Some(pricing_type) = normalize_pricing_type(input.pricing_type.as_deref()) else {
        warn_unavailable(input, PricingFailure::MissingOrInvalidPricingType);
        return CanonicalPriceDisplay::invalid_type();
    };

    let Some(rate) = resolve_unit_rate(input, pricing_type) else {
        warn_unavailable(input, PricingFailure::MissingUnitRate);
        return CanonicalPriceDisplay::missing_rate(pricing_type);
    };

    let Some(label) = primary_label(pricing_type, rate.value) else {
        warn_unavailable(input, PricingFailure::MissingUnitRate);
        return CanonicalPriceDisplay::missing_rate(pricing_type);
    };

    CanonicalPriceDisplay::priced(
        pricing_type,
        rate.value,
        label,
        secondary_label(pricing_type, input.distance_km, input.weight, input.trucks()),
        rate.source,
    )
}

fn warn_unavailable(input: &RawPricingRecord, reason: PricingFailure) {
    if cfg!(debug_assertions) {
        tracing::warn!(
            reason = %reason,
            pricing_type = ?input.pricing_type,
            price = ?input.price,
            price_per_ton = ?input.price_per_ton,
            price_per_km = ?input.price_per_km,
            "freight price unavailable"
        );
    }
}
