use crate::domain::errors::FetchError;
use crate::domain::ports::PageSource;
use crate::domain::record::ResaleRecord;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::sync::Mutex;
use tracing::info;

const MOCK_TOWNS: &[(&str, f64)] = &[
    ("ANG MO KIO", 1.00),
    ("BEDOK", 0.97),
    ("BISHAN", 1.22),
    ("PUNGGOL", 1.08),
    ("TAMPINES", 1.02),
    ("YISHUN", 0.90),
];

const MOCK_FLAT_TYPES: &[(&str, f64)] = &[
    ("3 ROOM", 330_000.0),
    ("4 ROOM", 450_000.0),
    ("5 ROOM", 540_000.0),
    ("EXECUTIVE", 660_000.0),
];

/// In-memory page source.
///
/// Serves `records` in order and can be told to fail a given page, or the
/// count request, to exercise the partial-result path.
pub struct MockPageSource {
    records: Vec<ResaleRecord>,
    declared_total: Option<usize>,
    count_failure: Option<FetchError>,
    page_failure: Option<(usize, FetchError)>,
    requests: Mutex<Vec<(usize, usize)>>,
}

impl MockPageSource {
    pub fn new(records: Vec<ResaleRecord>) -> Self {
        Self {
            records,
            declared_total: None,
            count_failure: None,
            page_failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Synthetic resale history: every town/flat type pair, one sale a month
    /// from 2017-01 to 2023-12, rising about 3% a year with seeded noise
    pub fn synthetic(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut records = Vec::new();

        for year in 2017..=2023 {
            for month in 1..=12u32 {
                let elapsed_years = (year - 2017) as f64 + (month - 1) as f64 / 12.0;
                let growth = 1.03_f64.powf(elapsed_years);
                for (town, town_factor) in MOCK_TOWNS {
                    for (flat_type, base_price) in MOCK_FLAT_TYPES {
                        let noise = 1.0 + rng.random_range(-0.04..0.04);
                        let price = (base_price * town_factor * growth * noise / 500.0).round() * 500.0;
                        records.push(ResaleRecord::new(
                            *town,
                            *flat_type,
                            format!("{}-{:02}", year, month),
                            Decimal::from_f64(price).unwrap_or_default(),
                        ));
                    }
                }
            }
        }

        info!("MockPageSource: generated {} synthetic records", records.len());
        Self::new(records)
    }

    /// Reports `total` from the count request instead of the real record count
    pub fn with_declared_total(mut self, total: usize) -> Self {
        self.declared_total = Some(total);
        self
    }

    pub fn with_count_failure(mut self, error: FetchError) -> Self {
        self.count_failure = Some(error);
        self
    }

    /// Fails the request for the page at zero-based `page_index`
    pub fn with_page_failure(mut self, page_index: usize, error: FetchError) -> Self {
        self.page_failure = Some((page_index, error));
        self
    }

    /// (offset, limit) of every page request seen so far
    pub fn requests(&self) -> Vec<(usize, usize)> {
        match self.requests.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn records(&self) -> &[ResaleRecord] {
        &self.records
    }
}

#[async_trait]
impl PageSource for MockPageSource {
    async fn count(&self) -> Result<usize, FetchError> {
        if let Some(error) = &self.count_failure {
            return Err(error.clone());
        }
        Ok(self.declared_total.unwrap_or(self.records.len()))
    }

    async fn page(&self, offset: usize, limit: usize) -> Result<Vec<ResaleRecord>, FetchError> {
        let page_index = {
            let mut requests = match self.requests.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            requests.push((offset, limit));
            requests.len() - 1
        };

        if let Some((failing_index, error)) = &self.page_failure
            && *failing_index == page_index
        {
            return Err(error.clone());
        }

        let start = offset.min(self.records.len());
        let end = offset.saturating_add(limit).min(self.records.len());
        Ok(self.records[start..end].to_vec())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::{Dataset, SegmentIndex};

    #[test]
    fn test_synthetic_dataset_is_deterministic() {
        let a = MockPageSource::synthetic(7);
        let b = MockPageSource::synthetic(7);

        assert_eq!(a.records(), b.records());
        assert_eq!(a.records().len(), 7 * 12 * MOCK_TOWNS.len() * MOCK_FLAT_TYPES.len());
    }

    #[test]
    fn test_synthetic_dataset_covers_every_segment() {
        let dataset = Dataset::new(MockPageSource::synthetic(1).records().to_vec());
        let index = SegmentIndex::build(&dataset);

        assert_eq!(index.town_count(), MOCK_TOWNS.len());
        assert_eq!(index.segment_count(), MOCK_TOWNS.len() * MOCK_FLAT_TYPES.len());
    }

    #[tokio::test]
    async fn test_page_slices_and_logs_requests() {
        let source = MockPageSource::synthetic(3);

        let page = source.page(10, 5).await.unwrap();
        assert_eq!(page, source.records()[10..15].to_vec());

        let past_end = source.page(1_000_000, 5).await.unwrap();
        assert!(past_end.is_empty());
        assert_eq!(source.requests(), vec![(10, 5), (1_000_000, 5)]);
    }
}
