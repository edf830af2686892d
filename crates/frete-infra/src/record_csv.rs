//! CSV loader for freight pricing records
//!
//! Spreadsheet exports arrive either as UTF-8 or as Windows-1252, with
//! `,` or `;` delimiters and Brazilian decimal commas.

use std::path::Path;

use encoding_rs::WINDOWS_1252;
use frete_domain::model::pricing_record::parse_decimal;
use frete_domain::repository::StoredPricingRecord;
use frete_domain::RawPricingRecord;
use frete_types::{Error, LoaderError};

const REQUIRED_COLUMN: &str = "pricing_type";

/// Column positions resolved from the header row
#[derive(Debug, Default)]
struct ColumnMap {
    id: Option<usize>,
    pricing_type: usize,
    price: Option<usize>,
    price_per_ton: Option<usize>,
    price_per_km: Option<usize>,
    required_trucks: Option<usize>,
    weight: Option<usize>,
    distance_km: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, LoaderError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let pricing_type = find(REQUIRED_COLUMN)
            .ok_or_else(|| LoaderError::MissingColumn(REQUIRED_COLUMN.to_string()))?;
        Ok(Self {
            id: find("id"),
            pricing_type,
            price: find("price"),
            price_per_ton: find("price_per_ton"),
            price_per_km: find("price_per_km"),
            required_trucks: find("required_trucks"),
            weight: find("weight"),
            distance_km: find("distance_km"),
        })
    }
}

/// Load pricing records from a CSV file with a header row
pub fn load_records_from_csv(path: &Path) -> Result<Vec<StoredPricingRecord>, Error> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    let content = decode_bytes(bytes);
    if content.trim().is_empty() {
        return Err(LoaderError::Empty(path.display().to_string()).into());
    }
    parse_records(&content)
}

/// Parse CSV text into records
pub fn parse_records(content: &str) -> Result<Vec<StoredPricingRecord>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(detect_delimiter(content))
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        if row.iter().all(|field| field.is_empty()) {
            continue;
        }
        records.push(parse_row(&row, &columns));
    }

    tracing::debug!(count = records.len(), "parsed pricing records from CSV");
    Ok(records)
}

fn decode_bytes(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text.trim_start_matches('\u{feff}').to_string(),
        Err(err) => {
            let (decoded, _, had_errors) = WINDOWS_1252.decode(err.as_bytes());
            if had_errors {
                tracing::warn!("some characters could not be decoded from Windows-1252");
            } else {
                tracing::warn!("CSV is not UTF-8, decoded as Windows-1252");
            }
            decoded.into_owned()
        }
    }
}

fn detect_delimiter(content: &str) -> u8 {
    let header = content.lines().next().unwrap_or("");
    if header.contains(';') && !header.contains(',') {
        b';'
    } else {
        b','
    }
}

fn parse_row(row: &csv::StringRecord, columns: &ColumnMap) -> StoredPricingRecord {
    let text = |idx: Option<usize>| {
        idx.and_then(|i| row.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };
    let number = |idx: Option<usize>| text(idx).and_then(parse_decimal);

    let required_trucks = number(columns.required_trucks)
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        .map(|v| v as i64);

    StoredPricingRecord {
        id: text(columns.id).map(str::to_string),
        record: RawPricingRecord {
            pricing_type: text(Some(columns.pricing_type)).map(str::to_string),
            price: number(columns.price),
            price_per_ton: number(columns.price_per_ton),
            price_per_km: number(columns.price_per_km),
            required_trucks,
            weight: number(columns.weight),
            distance_km: number(columns.distance_km),
        }
        .sanitized(),
    }
}
