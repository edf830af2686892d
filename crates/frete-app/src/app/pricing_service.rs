//! Pricing Service - canonical prices for stored records
//!
//! The repository is injected; the service itself holds no state beyond
//! that reference.

use std::collections::BTreeMap;

use frete_domain::repository::{PricingRecordRepository, StoredPricingRecord};
use frete_domain::{get_canonical_freight_price, PricedRecord, PricingFailure, PricingType};
use frete_types::Result;
use serde::{Deserialize, Serialize};

pub struct PricingService<'a, R: PricingRecordRepository + ?Sized> {
    repository: &'a R,
}

impl<'a, R: PricingRecordRepository + ?Sized> PricingService<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// Price every stored record, in source order
    pub fn price_all(&self) -> Result<Vec<PricedRecord>> {
        let records = self.repository.find_all()?;
        let priced: Vec<PricedRecord> = records.into_iter().map(price_stored).collect();
        tracing::info!(
            total = priced.len(),
            unavailable = priced.iter().filter(|p| !p.display.ok).count(),
            "priced records"
        );
        Ok(priced)
    }

    pub fn price_by_id(&self, id: &str) -> Result<Option<PricedRecord>> {
        Ok(self.repository.find_by_id(id)?.map(price_stored))
    }
}

pub fn price_stored(stored: StoredPricingRecord) -> PricedRecord {
    let display = get_canonical_freight_price(&stored.record);
    PricedRecord {
        id: stored.id,
        record: stored.record,
        display,
    }
}

/// Aggregate counts over a batch of priced records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingSummary {
    pub total: usize,
    pub priced: usize,
    pub invalid_type: usize,
    pub missing_rate: usize,
    pub legacy_fallback: usize,
    pub priced_by_type: BTreeMap<String, usize>,
}

impl PricingSummary {
    pub fn from_results(results: &[PricedRecord]) -> Self {
        let mut summary = PricingSummary {
            total: results.len(),
            ..Default::default()
        };
        for pricing_type in PricingType::ALL {
            summary.priced_by_type.insert(pricing_type.to_string(), 0);
        }

        for result in results {
            let display = &result.display;
            match display.failure() {
                Some(PricingFailure::MissingOrInvalidPricingType) => summary.invalid_type += 1,
                Some(PricingFailure::MissingUnitRate) => summary.missing_rate += 1,
                None => {
                    summary.priced += 1;
                    if let Some(pricing_type) = display.pricing_type {
                        *summary
                            .priced_by_type
                            .entry(pricing_type.to_string())
                            .or_insert(0) += 1;
                    }
                    if display.used_legacy_fallback() {
                        summary.legacy_fallback += 1;
                    }
                }
            }
        }
        summary
    }

    pub fn unavailable(&self) -> usize {
        self.invalid_type + self.missing_rate
    }
}
