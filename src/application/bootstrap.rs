use crate::application::fetcher::{FetchOutcome, PagedFetcher};
use crate::application::forecaster::{ForecastService, TrendForecaster};
use crate::config::Config;
use crate::domain::dataset::{Dataset, SegmentIndex};
use crate::infrastructure::factory::SourceFactory;
use tracing::{info, warn};

/// Everything the presentation layer needs, built once per process
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub dataset: Dataset,
    pub index: SegmentIndex,
    pub service: ForecastService,
    /// False when paging stopped early and the dataset is partial
    pub complete: bool,
}

impl LoadedData {
    pub fn from_outcome(outcome: FetchOutcome) -> Self {
        let complete = outcome.is_complete();
        let dataset = outcome.into_dataset();
        let index = SegmentIndex::build(&dataset);
        let service = ForecastService::new(dataset.clone(), TrendForecaster::default());

        Self {
            dataset,
            index,
            service,
            complete,
        }
    }
}

/// Runs the one-shot startup load against the configured source
pub async fn load(config: &Config) -> LoadedData {
    let source = SourceFactory::create_source(&config.data_source);
    let fetcher = PagedFetcher::new(source, config.data_source.page_size);

    let outcome = fetcher.fetch_all().await;
    if let Some(reason) = &outcome.aborted {
        warn!(
            "Startup load incomplete ({}); continuing with {} records",
            reason,
            outcome.records.len()
        );
    }

    let loaded = LoadedData::from_outcome(outcome);
    info!(
        "Dataset ready: {} records, {} towns, {} segments",
        loaded.dataset.len(),
        loaded.index.town_count(),
        loaded.index.segment_count()
    );
    loaded
}
