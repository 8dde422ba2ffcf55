use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One resale transaction as published by the datastore.
///
/// `month` is kept exactly as received ("2017-01"); it is only parsed when a
/// segment is preprocessed, so a malformed value fails that request and not the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResaleRecord {
    pub town: String,
    pub flat_type: String,
    pub month: String,
    pub resale_price: Decimal,
}

impl ResaleRecord {
    pub fn new(
        town: impl Into<String>,
        flat_type: impl Into<String>,
        month: impl Into<String>,
        resale_price: Decimal,
    ) -> Self {
        Self {
            town: town.into(),
            flat_type: flat_type.into(),
            month: month.into(),
            resale_price,
        }
    }

    pub fn matches(&self, segment: &Segment) -> bool {
        self.town == segment.town && self.flat_type == segment.flat_type
    }
}

/// A (town, flat type) pair used to filter the dataset before fitting
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    pub town: String,
    pub flat_type: String,
}

impl Segment {
    pub fn new(town: impl Into<String>, flat_type: impl Into<String>) -> Self {
        Self {
            town: town.into(),
            flat_type: flat_type.into(),
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in {}", self.flat_type, self.town)
    }
}
