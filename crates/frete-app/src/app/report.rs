//! Text report over a batch of priced records
//!
//! Labels are printed exactly as the pricing core produced them.

use frete_domain::PricedRecord;

use super::pricing_service::PricingSummary;

pub fn generate_pricing_report(results: &[PricedRecord]) -> String {
    let summary = PricingSummary::from_results(results);

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("            Relatório de Preços de Frete          \n");
    report.push_str("            Freight Pricing Report                \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Resumo / Summary]\n");
    report.push_str(&format!("  Registros / Records:           {}\n", summary.total));
    report.push_str(&format!("  Com preço / Priced:            {}\n", summary.priced));
    report.push_str(&format!("  Tipo inválido / Invalid type:  {}\n", summary.invalid_type));
    report.push_str(&format!("  Sem tarifa / Missing rate:     {}\n", summary.missing_rate));
    report.push_str(&format!("  Fallback legado / Legacy:      {}\n", summary.legacy_fallback));
    for (pricing_type, count) in &summary.priced_by_type {
        report.push_str(&format!("    {:<28} {}\n", pricing_type, count));
    }
    if summary.total > 0 {
        let rate = (summary.priced as f64 / summary.total as f64) * 100.0;
        report.push_str(&format!("  Cobertura / Coverage:          {:.1}%\n", rate));
    }
    report.push('\n');

    if summary.priced > 0 {
        report.push_str("[Com preço / Priced]\n");
        report.push_str(&"-".repeat(70));
        report.push('\n');
        report.push_str(&format!(
            "{:<12} {:<12} {:<22} {}\n",
            "ID", "Tipo", "Preço", "Contexto"
        ));
        report.push_str(&"-".repeat(70));
        report.push('\n');
        for (index, result) in results.iter().enumerate().filter(|(_, r)| r.display.ok) {
            let display = &result.display;
            report.push_str(&format!(
                "{:<12} {:<12} {:<22} {}\n",
                truncate_str(&record_label(result, index), 11),
                display.pricing_type.map(|t| t.to_string()).unwrap_or_default(),
                display.primary_label,
                display.secondary_label.as_deref().unwrap_or("-"),
            ));
        }
        report.push('\n');
    } else {
        report.push_str("[Nenhum preço resolvido / No priced records]\n\n");
    }

    if summary.unavailable() > 0 {
        report.push_str("[Indisponíveis / Unavailable]\n");
        report.push_str(&"-".repeat(70));
        report.push('\n');
        report.push_str(&format!("{:<12} {:<20} {}\n", "ID", "Tipo bruto", "Motivo"));
        report.push_str(&"-".repeat(70));
        report.push('\n');
        for (index, result) in results.iter().enumerate().filter(|(_, r)| !r.display.ok) {
            report.push_str(&format!(
                "{:<12} {:<20} {}\n",
                truncate_str(&record_label(result, index), 11),
                truncate_str(result.record.pricing_type.as_deref().unwrap_or("(vazio)"), 19),
                result
                    .display
                    .failure()
                    .map(|f| f.to_string())
                    .unwrap_or_default(),
            ));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}

/// Record id, or its 1-based position when the source has none
fn record_label(result: &PricedRecord, index: usize) -> String {
    result
        .id
        .clone()
        .unwrap_or_else(|| format!("#{}", index + 1))
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
