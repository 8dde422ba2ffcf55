//! Wire format of the `datastore_search` action.

use crate::domain::record::ResaleRecord;
use serde::Deserialize;

/// Envelope of the unpaged request; only the total is read
#[derive(Debug, Deserialize)]
pub struct CountResponse {
    pub result: CountResult,
}

#[derive(Debug, Deserialize)]
pub struct CountResult {
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct PageResponse {
    pub result: PageResult,
}

#[derive(Debug, Deserialize)]
pub struct PageResult {
    pub records: Vec<ResaleRecord>,
}
