//! Batch paging of the upstream datastore into a single record collection.
//!
//! One unpaged request learns the declared total, then pages are requested
//! strictly one after another. The first failure stops paging and whatever was
//! accumulated before it is kept.

use crate::domain::dataset::Dataset;
use crate::domain::errors::FetchError;
use crate::domain::ports::PageSource;
use crate::domain::record::ResaleRecord;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Number of page requests issued for a declared total.
///
/// Always `total / page_size + 1`, so an empty upstream still gets one request.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total / page_size + 1
}

/// Result of a full paging run
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub records: Vec<ResaleRecord>,
    pub declared_total: Option<usize>,
    pub pages_requested: usize,
    pub pages_completed: usize,
    /// Set when paging stopped early; the records are then partial
    pub aborted: Option<FetchError>,
}

impl FetchOutcome {
    pub fn is_complete(&self) -> bool {
        self.aborted.is_none()
    }

    pub fn into_dataset(self) -> Dataset {
        Dataset::new(self.records)
    }
}

pub struct PagedFetcher {
    source: Arc<dyn PageSource>,
    page_size: usize,
}

impl PagedFetcher {
    /// A zero page size is bumped to one.
    pub fn new(source: Arc<dyn PageSource>, page_size: usize) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub async fn fetch_all(&self) -> FetchOutcome {
        let mut outcome = FetchOutcome {
            records: Vec::new(),
            declared_total: None,
            pages_requested: 0,
            pages_completed: 0,
            aborted: None,
        };

        let total = match self.source.count().await {
            Ok(total) => total,
            Err(e) => {
                error!("Fetcher: total count request to {} failed: {}", self.source.name(), e);
                outcome.aborted = Some(e);
                return outcome;
            }
        };
        outcome.declared_total = Some(total);

        let pages = page_count(total, self.page_size);
        info!(
            "Fetcher: {} declares {} records, requesting {} page(s) of {}",
            self.source.name(),
            total,
            pages,
            self.page_size
        );

        for page_index in 0..pages {
            let offset = page_index * self.page_size;
            outcome.pages_requested += 1;

            match self.source.page(offset, self.page_size).await {
                Ok(records) => {
                    debug!(
                        "Fetcher: page {} (offset {}) returned {} records",
                        page_index,
                        offset,
                        records.len()
                    );
                    outcome.records.extend(records);
                    outcome.pages_completed += 1;
                }
                Err(e) => {
                    error!("Error fetching data: {} (page {}, offset {})", e, page_index, offset);
                    outcome.aborted = Some(e);
                    break;
                }
            }
        }

        info!(
            "Fetcher: accumulated {} records from {}/{} page(s)",
            outcome.records.len(),
            outcome.pages_completed,
            pages
        );
        outcome
    }
}
