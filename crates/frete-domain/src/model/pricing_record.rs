//! Raw freight/proposal records as they arrive from the data layer
//!
//! Stored records are loosely typed: numbers may come as strings, in
//! Brazilian notation, or be garbage. Parsing here never rejects a whole
//! record; a field that cannot be read becomes `None` and the pricing
//! core fails closed on it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::price_display::CanonicalPriceDisplay;

/// Untrusted pricing fields of a freight or proposal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPricingRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub pricing_type: Option<String>,
    /// Total amount; informational, never divided
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price_per_ton: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price_per_km: Option<f64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub required_trucks: Option<i64>,
    /// Cargo weight in kilograms
    #[serde(default, deserialize_with = "lenient_f64")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub distance_km: Option<f64>,
}

impl RawPricingRecord {
    pub fn new(pricing_type: impl Into<String>) -> Self {
        Self {
            pricing_type: Some(pricing_type.into()),
            ..Default::default()
        }
    }

    /// Drop NaN, infinite and negative numbers
    pub fn sanitized(&self) -> Self {
        Self {
            pricing_type: self.pricing_type.clone(),
            price: non_negative(self.price),
            price_per_ton: non_negative(self.price_per_ton),
            price_per_km: non_negative(self.price_per_km),
            required_trucks: self.required_trucks.filter(|n| *n >= 0),
            weight: non_negative(self.weight),
            distance_km: non_negative(self.distance_km),
        }
    }

    /// Vehicle count, clamped to at least one
    pub fn trucks(&self) -> u32 {
        clamp_trucks(self.required_trucks)
    }
}

/// What the back-solver knows besides the total
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingContext {
    #[serde(default, deserialize_with = "lenient_string")]
    pub pricing_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub distance_km: Option<f64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub required_trucks: Option<i64>,
}

impl PricingContext {
    pub fn new(pricing_type: impl Into<String>) -> Self {
        Self {
            pricing_type: Some(pricing_type.into()),
            ..Default::default()
        }
    }
}

/// A record together with its canonical display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricedRecord {
    pub id: Option<String>,
    pub record: RawPricingRecord,
    pub display: CanonicalPriceDisplay,
}

pub(crate) fn clamp_trucks(raw: Option<i64>) -> u32 {
    match raw {
        Some(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 1,
    }
}

/// Finite and strictly positive, or nothing
pub(crate) fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

fn non_negative(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

/// Parse a decimal written either as `1234.56` or Brazilian `1.234,56`.
///
/// A leading `R$` and inner spaces are ignored. When a comma is present
/// it is the decimal separator and dots are thousands separators. Without
/// a comma, a token shaped like `4.500` or `1.234.567` is read as
/// thousands grouping.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix("R$").unwrap_or(trimmed);
    let compact: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
        .collect();
    if compact.is_empty() {
        return None;
    }
    let normalized = if compact.contains(',') {
        compact.replace('.', "").replace(',', ".")
    } else if is_dot_grouped(&compact) {
        tracing::warn!(value = %compact, "reading dotted number as thousands grouping");
        compact.replace('.', "")
    } else {
        compact
    };
    normalized.parse::<f64>().ok()
}

/// `4.500`, `12.000`, `1.234.567`; not `0.500`, `80.5` or `1.2345`
fn is_dot_grouped(token: &str) -> bool {
    let mut groups = token.split('.');
    let Some(head) = groups.next() else {
        return false;
    };
    let head_ok = (1..=3).contains(&head.len())
        && !head.starts_with('0')
        && head.chars().all(|c| c.is_ascii_digit());
    let mut tail_count = 0;
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        tail_count += 1;
    }
    head_ok && tail_count > 0
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64))
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_to_f64)
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        .map(|v| v as i64))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_formats() {
        assert_eq!(parse_decimal("80"), Some(80.0));
        assert_eq!(parse_decimal("80.5"), Some(80.5));
        assert_eq!(parse_decimal("80,50"), Some(80.5));
        assert_eq!(parse_decimal("1.234,56"), Some(1234.56));
        assert_eq!(parse_decimal("R$ 4.500,00"), Some(4500.0));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
    }

    #[test]
    fn test_parse_decimal_thousands_grouping_without_comma() {
        assert_eq!(parse_decimal("4.500"), Some(4500.0));
        assert_eq!(parse_decimal("R$ 12.000"), Some(12000.0));
        assert_eq!(parse_decimal("1.234.567"), Some(1234567.0));
        assert_eq!(parse_decimal("0.500"), Some(0.5));
        assert_eq!(parse_decimal("80.50"), Some(80.5));
        assert_eq!(parse_decimal("1.2345"), Some(1.2345));
    }

    #[test]
    fn test_deserialize_mixed_field_types() {
        let json = r#"{
            "pricing_type": "POR_TON",
            "price_per_ton": "80,00",
            "price": 40000,
            "weight": "500000",
            "required_trucks": 12
        }"#;
        let record: RawPricingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.pricing_type.as_deref(), Some("POR_TON"));
        assert_eq!(record.price_per_ton, Some(80.0));
        assert_eq!(record.price, Some(40000.0));
        assert_eq!(record.weight, Some(500000.0));
        assert_eq!(record.required_trucks, Some(12));
        assert_eq!(record.distance_km, None);
    }

    #[test]
    fn test_deserialize_garbage_becomes_none() {
        let json = r#"{
            "pricing_type": 42,
            "price_per_km": "n/a",
            "required_trucks": 2.5,
            "distance_km": null
        }"#;
        let record: RawPricingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.pricing_type, None);
        assert_eq!(record.price_per_km, None);
        assert_eq!(record.required_trucks, None);
        assert_eq!(record.distance_km, None);
    }

    #[test]
    fn test_sanitized_drops_invalid_numbers() {
        let record = RawPricingRecord {
            pricing_type: Some("PER_KM".to_string()),
            price: Some(f64::NAN),
            price_per_km: Some(-2.0),
            distance_km: Some(f64::INFINITY),
            weight: Some(0.0),
            required_trucks: Some(-3),
            ..Default::default()
        };
        let clean = record.sanitized();
        assert_eq!(clean.price, None);
        assert_eq!(clean.price_per_km, None);
        assert_eq!(clean.distance_km, None);
        assert_eq!(clean.weight, Some(0.0));
        assert_eq!(clean.required_trucks, None);
    }

    #[test]
    fn test_trucks_clamped() {
        let mut record = RawPricingRecord::new("PER_TON");
        assert_eq!(record.trucks(), 1);
        record.required_trucks = Some(0);
        assert_eq!(record.trucks(), 1);
        record.required_trucks = Some(-5);
        assert_eq!(record.trucks(), 1);
        record.required_trucks = Some(12);
        assert_eq!(record.trucks(), 12);
    }
}
