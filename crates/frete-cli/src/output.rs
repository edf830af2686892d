//! Output formatting module
//!
//! Labels are printed exactly as the pricing core returned them.

use frete_domain::{CanonicalPriceDisplay, PricedRecord, PricingType};
use frete_types::{OutputFormat, Result};
use serde_json::json;

pub fn output_display(output_format: OutputFormat, display: &CanonicalPriceDisplay) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(display)?);
    } else {
        print!("{}", render_display(display));
    }
    Ok(())
}

pub fn output_results(output_format: OutputFormat, results: &[PricedRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        print!("{}", render_results_table(results));
    }
    Ok(())
}

pub fn output_normalized(
    output_format: OutputFormat,
    token: &str,
    pricing_type: Option<PricingType>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let value = json!({ "input": token, "pricingType": pricing_type });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        match pricing_type {
            Some(t) => println!("{} -> {}", token, t),
            None => println!("{} -> not recognized", token),
        }
    }
    Ok(())
}

fn render_display(display: &CanonicalPriceDisplay) -> String {
    let mut out = String::new();
    out.push_str("\nFreight Price\n");
    out.push_str("=============\n");
    out.push_str(&format!("Price:           {}\n", display.primary_label));
    if let Some(ref secondary) = display.secondary_label {
        out.push_str(&format!("Context:         {}\n", secondary));
    }
    if let Some(pricing_type) = display.pricing_type {
        out.push_str(&format!("Pricing type:    {}\n", pricing_type));
    }
    if let Some(source) = display.debug.rate_source {
        out.push_str(&format!("Rate source:     {}\n", source));
    }
    if let Some(reason) = display.failure() {
        out.push_str(&format!("Reason:          {}\n", reason));
    }
    out
}

fn render_results_table(results: &[PricedRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<12} {:<12} {:<22} {}\n",
        "ID", "Type", "Price", "Context"
    ));
    out.push_str(&"-".repeat(70));
    out.push('\n');
    for (index, result) in results.iter().enumerate() {
        let display = &result.display;
        let id = result
            .id
            .clone()
            .unwrap_or_else(|| format!("#{}", index + 1));
        let context = match (&display.secondary_label, display.failure()) {
            (Some(secondary), _) => secondary.clone(),
            (None, Some(reason)) => format!("({})", reason),
            (None, None) => "-".to_string(),
        };
        out.push_str(&format!(
            "{:<12} {:<12} {:<22} {}\n",
            id,
            display.pricing_type.map(|t| t.to_string()).unwrap_or_default(),
            display.primary_label,
            context
        ));
    }
    let priced = results.iter().filter(|r| r.display.ok).count();
    out.push_str(&format!("\n{} of {} records priced\n", priced, results.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use frete_domain::{get_canonical_freight_price, RawPricingRecord};

    #[test]
    fn test_render_display_priced() {
        let display = get_canonical_freight_price(&RawPricingRecord {
            price_per_km: Some(2.0),
            distance_km: Some(100.0),
            ..RawPricingRecord::new("PER_KM")
        });
        let text = render_display(&display);
        assert!(text.contains("Price:           R$ 2,00/km"));
        assert!(text.contains("Context:         100 km"));
        assert!(text.contains("Rate source:     price_per_km"));
        assert!(!text.contains("Reason"));
    }

    #[test]
    fn test_render_display_unavailable() {
        let display = get_canonical_freight_price(&RawPricingRecord::new("abc"));
        let text = render_display(&display);
        assert!(text.contains("Preço indisponível"));
        assert!(text.contains("missing_or_invalid_pricing_type"));
    }

    #[test]
    fn test_render_results_table() {
        let results = vec![PricedRecord {
            id: None,
            record: RawPricingRecord::new("FIXO"),
            display: get_canonical_freight_price(&RawPricingRecord::new("FIXO")),
        }];
        let text = render_results_table(&results);
        assert!(text.contains("#1"));
        assert!(text.contains("(missing_unit_rate)"));
        assert!(text.contains("0 of 1 records priced"));
    }
}
