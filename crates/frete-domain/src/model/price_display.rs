//! Canonical price display produced by the pricing pipeline

use serde::{Deserialize, Serialize};

use super::pricing_type::{PriceUnit, PricingType};

/// The only label shown when no price can be resolved
pub const PRICE_UNAVAILABLE: &str = "Preço indisponível";

/// Why a price could not be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingFailure {
    MissingOrInvalidPricingType,
    MissingUnitRate,
}

impl PricingFailure {
    pub fn as_str(self) -> &'static str {
        match self {
            PricingFailure::MissingOrInvalidPricingType => "missing_or_invalid_pricing_type",
            PricingFailure::MissingUnitRate => "missing_unit_rate",
        }
    }
}

impl std::fmt::Display for PricingFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record field a resolved unit rate was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    PricePerTon,
    PricePerKm,
    /// `price_per_km` read as a per-ton rate on PER_TON records
    PricePerKmLegacy,
    Price,
}

impl RateSource {
    pub fn as_str(self) -> &'static str {
        match self {
            RateSource::PricePerTon => "price_per_ton",
            RateSource::PricePerKm => "price_per_km",
            RateSource::PricePerKmLegacy => "price_per_km_legacy",
            RateSource::Price => "price",
        }
    }
}

impl std::fmt::Display for RateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDebug {
    pub reason: Option<PricingFailure>,
    pub rate_source: Option<RateSource>,
}

/// Result of the canonical pricing pipeline.
///
/// `primary_label` is the only value ever shown as "the price".
/// `secondary_label` carries non-monetary context only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalPriceDisplay {
    pub ok: bool,
    pub primary_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<PriceUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_value: Option<f64>,
    pub secondary_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_type: Option<PricingType>,
    pub is_pricing_type_invalid: bool,
    #[serde(default)]
    pub debug: PriceDebug,
}

impl CanonicalPriceDisplay {
    pub(crate) fn priced(
        pricing_type: PricingType,
        unit_value: f64,
        primary_label: String,
        secondary_label: Option<String>,
        rate_source: RateSource,
    ) -> Self {
        Self {
            ok: true,
            primary_label,
            unit: Some(pricing_type.unit()),
            unit_value: Some(unit_value),
            secondary_label,
            pricing_type: Some(pricing_type),
            is_pricing_type_invalid: false,
            debug: PriceDebug {
                reason: None,
                rate_source: Some(rate_source),
            },
        }
    }

    pub(crate) fn invalid_type() -> Self {
        Self::unavailable(None, PricingFailure::MissingOrInvalidPricingType)
    }

    pub(crate) fn missing_rate(pricing_type: PricingType) -> Self {
        Self::unavailable(Some(pricing_type), PricingFailure::MissingUnitRate)
    }

    fn unavailable(pricing_type: Option<PricingType>, reason: PricingFailure) -> Self {
        Self {
            ok: false,
            primary_label: PRICE_UNAVAILABLE.to_string(),
            unit: None,
            unit_value: None,
            secondary_label: None,
            pricing_type,
            is_pricing_type_invalid: reason == PricingFailure::MissingOrInvalidPricingType,
            debug: PriceDebug {
                reason: Some(reason),
                rate_source: None,
            },
        }
    }

    pub fn failure(&self) -> Option<PricingFailure> {
        self.debug.reason
    }

    /// True when the PER_TON rate came from the mislabeled `price_per_km`
    pub fn used_legacy_fallback(&self) -> bool {
        self.debug.rate_source == Some(RateSource::PricePerKmLegacy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_type_shape() {
        let display = CanonicalPriceDisplay::invalid_type();
        assert!(!display.ok);
        assert!(display.is_pricing_type_invalid);
        assert_eq!(display.primary_label, PRICE_UNAVAILABLE);
        assert_eq!(display.pricing_type, None);
        assert_eq!(display.failure(), Some(PricingFailure::MissingOrInvalidPricingType));
    }

    #[test]
    fn test_missing_rate_keeps_type() {
        let display = CanonicalPriceDisplay::missing_rate(PricingType::PerKm);
        assert!(!display.ok);
        assert!(!display.is_pricing_type_invalid);
        assert_eq!(display.pricing_type, Some(PricingType::PerKm));
        assert_eq!(display.unit, None);
        assert_eq!(display.failure(), Some(PricingFailure::MissingUnitRate));
    }

    #[test]
    fn test_json_keys() {
        let display = CanonicalPriceDisplay::priced(
            PricingType::PerVehicle,
            4500.0,
            "R$ 4.500,00/veíc".to_string(),
            None,
            RateSource::Price,
        );
        let json = serde_json::to_value(&display).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["primaryLabel"], "R$ 4.500,00/veíc");
        assert_eq!(json["unit"], "veiculo");
        assert_eq!(json["unitValue"], 4500.0);
        assert!(json["secondaryLabel"].is_null());
        assert_eq!(json["pricingType"], "PER_VEHICLE");
        assert_eq!(json["isPricingTypeInvalid"], false);
        assert_eq!(json["debug"]["rateSource"], "price");
    }

    #[test]
    fn test_unavailable_json_omits_unit() {
        let json = serde_json::to_value(CanonicalPriceDisplay::invalid_type()).unwrap();
        assert!(json.get("unit").is_none());
        assert!(json.get("unitValue").is_none());
        assert_eq!(json["debug"]["reason"], "missing_or_invalid_pricing_type");
    }
}
