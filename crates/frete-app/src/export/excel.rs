//! Excel export functionality

use std::path::Path;

use chrono::Local;
use frete_domain::PricedRecord;
use frete_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::app::PricingSummary;

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export priced records to an Excel workbook
pub fn export_to_excel(results: &[PricedRecord], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, results)?;

    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, results)?;

    workbook.save(output_path).map_err(excel_err)?;
    tracing::info!(path = %output_path.display(), rows = results.len(), "exported workbook");
    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, results: &[PricedRecord]) -> Result<()> {
    let summary = PricingSummary::from_results(results);
    let header_format = Format::new().set_bold();

    sheet.set_name("Resumo").map_err(excel_err)?;
    sheet
        .write_string_with_format(0, 0, "Relatório de Preços de Frete", &header_format)
        .map_err(excel_err)?;
    sheet.write_string(2, 0, "Gerado em:").map_err(excel_err)?;
    sheet
        .write_string(2, 1, Local::now().to_rfc3339())
        .map_err(excel_err)?;

    let rows = [
        ("Registros", summary.total),
        ("Com preço", summary.priced),
        ("Tipo inválido", summary.invalid_type),
        ("Sem tarifa", summary.missing_rate),
        ("Fallback legado", summary.legacy_fallback),
    ];
    let mut row = 3;
    for (label, count) in rows {
        sheet.write_string(row, 0, label).map_err(excel_err)?;
        sheet.write_number(row, 1, count as f64).map_err(excel_err)?;
        row += 1;
    }

    row += 1;
    sheet
        .write_string_with_format(row, 0, "Por tipo", &header_format)
        .map_err(excel_err)?;
    for (pricing_type, count) in &summary.priced_by_type {
        row += 1;
        sheet.write_string(row, 0, pricing_type).map_err(excel_err)?;
        sheet.write_number(row, 1, *count as f64).map_err(excel_err)?;
    }

    Ok(())
}

fn write_details_sheet(sheet: &mut Worksheet, results: &[PricedRecord]) -> Result<()> {
    sheet.set_name("Fretes").map_err(excel_err)?;
    let header_format = Format::new().set_bold();

    let headers = [
        "ID",
        "Tipo bruto",
        "Tipo",
        "Preço",
        "Unidade",
        "Valor unitário",
        "Contexto",
        "Motivo",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (index, result) in results.iter().enumerate() {
        let row = (index + 1) as u32;
        let display = &result.display;

        if let Some(ref id) = result.id {
            sheet.write_string(row, 0, id).map_err(excel_err)?;
        }
        if let Some(ref raw_type) = result.record.pricing_type {
            sheet.write_string(row, 1, raw_type).map_err(excel_err)?;
        }
        if let Some(pricing_type) = display.pricing_type {
            sheet
                .write_string(row, 2, pricing_type.as_str())
                .map_err(excel_err)?;
        }
        sheet
            .write_string(row, 3, &display.primary_label)
            .map_err(excel_err)?;
        if let Some(unit) = display.unit {
            sheet.write_string(row, 4, unit.to_string()).map_err(excel_err)?;
        }
        if let Some(value) = display.unit_value {
            sheet.write_number(row, 5, value).map_err(excel_err)?;
        }
        if let Some(ref secondary) = display.secondary_label {
            sheet.write_string(row, 6, secondary).map_err(excel_err)?;
        }
        if let Some(reason) = display.failure() {
            sheet.write_string(row, 7, reason.as_str()).map_err(excel_err)?;
        }
    }

    sheet.autofit();
    Ok(())
}
