//! Canonical pricing types and the legacy token normalizer

use serde::{Deserialize, Serialize};

/// Basis a freight unit rate is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingType {
    /// Rate per metric ton of cargo
    PerTon,
    /// Rate per kilometer of route
    PerKm,
    /// Flat rate per truck (formerly "FIXED")
    PerVehicle,
}

/// Unit shown next to a resolved rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceUnit {
    Ton,
    Km,
    Veiculo,
}

impl PricingType {
    pub const ALL: [PricingType; 3] = [
        PricingType::PerTon,
        PricingType::PerKm,
        PricingType::PerVehicle,
    ];

    pub fn unit(self) -> PriceUnit {
        match self {
            PricingType::PerTon => PriceUnit::Ton,
            PricingType::PerKm => PriceUnit::Km,
            PricingType::PerVehicle => PriceUnit::Veiculo,
        }
    }

    /// Suffix appended to the primary label
    pub fn suffix(self) -> &'static str {
        match self {
            PricingType::PerTon => "/ton",
            PricingType::PerKm => "/km",
            PricingType::PerVehicle => "/veíc",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PricingType::PerTon => "PER_TON",
            PricingType::PerKm => "PER_KM",
            PricingType::PerVehicle => "PER_VEHICLE",
        }
    }
}

impl std::fmt::Display for PricingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for PriceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceUnit::Ton => write!(f, "ton"),
            PriceUnit::Km => write!(f, "km"),
            PriceUnit::Veiculo => write!(f, "veiculo"),
        }
    }
}

/// Map a stored pricing token to its canonical type.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
/// Anything outside the synonym table yields `None`.
pub fn normalize_pricing_type(raw: Option<&str>) -> Option<PricingType> {
    let token = raw?.trim().to_uppercase();
    match token.as_str() {
        "PER_TON" | "POR_TON" | "POR_TONELADA" | "TON" => Some(PricingType::PerTon),
        "PER_KM" | "POR_KM" | "KM" => Some(PricingType::PerKm),
        "FIXED" | "FIXO" | "TOTAL" | "PER_VEHICLE" => Some(PricingType::PerVehicle),
        _ => None,
    }
}
