//! Brazilian Real label formatting

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::PricingType;

/// Format as `R$ 1.234,56`.
///
/// Returns `None` for values a `Decimal` cannot hold (NaN, infinities,
/// magnitudes past ~7.9e28) and for negatives.
pub fn format_brl(value: f64) -> Option<String> {
    let amount = Decimal::from_f64(value)?;
    if amount.is_sign_negative() {
        return None;
    }
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let reais = rounded.trunc();
    let centavos = ((rounded - reais) * Decimal::ONE_HUNDRED).to_u32()?;
    Some(format!("R$ {},{:02}", group_thousands(&reais.to_string()), centavos))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// `None` when the rate cannot be formatted exactly
pub fn primary_label(pricing_type: PricingType, unit_rate: f64) -> Option<String> {
    format_brl(unit_rate).map(|brl| format!("{}{}", brl, pricing_type.suffix()))
}

/// Tons with one decimal, ties rounded up on the exact binary value of
/// `kg / 1000` (same digits as JavaScript `toFixed(1)`)
fn format_tons(weight_kg: f64) -> Option<String> {
    let tons = weight_kg / 1000.0;
    if !tons.is_finite() || tons <= 0.0 {
        return None;
    }
    let mut rounded = Decimal::from_f64_retain(tons)?
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    Some(format!("{} ton", rounded))
}

/// Non-monetary context: distance, weight, vehicle count.
///
/// `weight_kg` is converted to tons. Returns `None` when nothing applies.
pub fn secondary_label(
    pricing_type: PricingType,
    distance_km: Option<f64>,
    weight_kg: Option<f64>,
    trucks: u32,
) -> Option<String> {
    let mut parts = Vec::new();

    if pricing_type == PricingType::PerKm {
        if let Some(km) = distance_km.filter(|d| d.is_finite() && *d > 0.0) {
            parts.push(format!("{} km", km.round()));
        }
    }
    if pricing_type == PricingType::PerTon {
        if let Some(tons) = weight_kg.and_then(format_tons) {
            parts.push(tons);
        }
    }
    if trucks > 1 {
        parts.push(format!("{} carretas", trucks));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}
