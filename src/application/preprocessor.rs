use crate::application::regression::design_matrix;
use crate::domain::dataset::Dataset;
use crate::domain::errors::PreprocessError;
use crate::domain::forecast::FeatureRow;
use crate::domain::record::Segment;
use chrono::{Datelike, NaiveDate};
use ndarray::{Array1, Array2};
use rust_decimal::prelude::ToPrimitive;

/// Feature rows and price targets for one segment, index-aligned
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentSamples {
    pub features: Vec<FeatureRow>,
    pub targets: Vec<f64>,
}

impl SegmentSamples {
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Design matrix with columns (year, month)
    pub fn feature_matrix(&self) -> Array2<f64> {
        design_matrix(&self.features)
    }

    pub fn target_vector(&self) -> Array1<f64> {
        Array1::from(self.targets.clone())
    }
}

/// Parses "YYYY-MM" (datastore format) or "YYYY-MM-DD" into the first day of that month
pub fn parse_month(value: &str) -> Result<NaiveDate, PreprocessError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .map(|d| d.with_day0(0).unwrap_or(d))
        .map_err(|_| PreprocessError::MalformedMonth {
            value: value.to_string(),
        })
}

/// Filters `dataset` to `segment` and derives (year, month) features and float prices.
///
/// The first malformed month or unrepresentable price fails the whole call.
pub fn preprocess(dataset: &Dataset, segment: &Segment) -> Result<SegmentSamples, PreprocessError> {
    let mut samples = SegmentSamples::default();

    for record in dataset.segment_records(segment) {
        let date = parse_month(&record.month)?;
        let price = record
            .resale_price
            .to_f64()
            .ok_or_else(|| PreprocessError::MalformedPrice {
                value: record.resale_price.to_string(),
            })?;

        samples.features.push(FeatureRow::from_date(date));
        samples.targets.push(price);
    }

    Ok(samples)
}
