//! Canonical display from a total amount
//!
//! For legacy records that only store a total. The implied unit rate is
//! synthesized here and then priced through the normal pipeline.

use crate::model::pricing_record::positive;
use crate::model::{
    normalize_pricing_type, CanonicalPriceDisplay, PricingContext, PricingType, RawPricingRecord,
};

use super::canonical_price::get_canonical_freight_price;

pub fn get_canonical_price_from_total(
    total_price: f64,
    context: &PricingContext,
) -> CanonicalPriceDisplay {
    let mut record = RawPricingRecord {
        pricing_type: context.pricing_type.clone(),
        price: Some(total_price),
        price_per_ton: None,
        price_per_km: None,
        required_trucks: context.required_trucks,
        weight: context.weight,
        distance_km: context.distance_km,
    };

    match normalize_pricing_type(context.pricing_type.as_deref()) {
        Some(PricingType::PerTon) => {
            record.price_per_ton = positive(context.weight).map(|kg| total_price / (kg / 1000.0));
        }
        Some(PricingType::PerKm) => {
            record.price_per_km = positive(context.distance_km).map(|km| total_price / km);
        }
        Some(PricingType::PerVehicle) | None => {}
    }

    get_canonical_freight_price(&record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PricingFailure, PRICE_UNAVAILABLE};

    #[test]
    fn test_per_ton_from_total() {
        let context = PricingContext {
            weight: Some(500000.0),
            required_trucks: Some(12),
            ..PricingContext::new("PER_TON")
        };
        let display = get_canonical_price_from_total(40000.0, &context);
        assert!(display.ok);
        assert_eq!(display.unit_value, Some(80.0));
        assert_eq!(display.primary_label, "R$ 80,00/ton");
        assert_eq!(display.secondary_label.as_deref(), Some("500.0 ton · 12 carretas"));
    }

    #[test]
    fn test_per_km_from_total() {
        let context = PricingContext {
            distance_km: Some(100.0),
            ..PricingContext::new("KM")
        };
        let display = get_canonical_price_from_total(200.0, &context);
        assert_eq!(display.primary_label, "R$ 2,00/km");
        assert_eq!(display.secondary_label.as_deref(), Some("100 km"));
    }

    #[test]
    fn test_per_vehicle_total_not_divided() {
        let context = PricingContext {
            required_trucks: Some(3),
            ..PricingContext::new("FIXO")
        };
        let display = get_canonical_price_from_total(4500.0, &context);
        assert_eq!(display.primary_label, "R$ 4.500,00/veíc");
        assert_eq!(display.unit_value, Some(4500.0));
    }

    #[test]
    fn test_missing_weight_fails_closed() {
        let context = PricingContext::new("PER_TON");
        let display = get_canonical_price_from_total(40000.0, &context);
        assert!(!display.ok);
        assert_eq!(display.primary_label, PRICE_UNAVAILABLE);
        assert_eq!(display.failure(), Some(PricingFailure::MissingUnitRate));
    }

    #[test]
    fn test_unknown_type_fails_closed() {
        let context = PricingContext {
            weight: Some(1000.0),
            ..PricingContext::new("POR_LITRO")
        };
        let display = get_canonical_price_from_total(100.0, &context);
        assert!(display.is_pricing_type_invalid);
    }
}
