use crate::config::{DataSourceConfig, DataSourceKind};
use crate::domain::ports::PageSource;
use crate::infrastructure::datastore::DatastoreClient;
use crate::infrastructure::mock::MockPageSource;
use std::sync::Arc;
use tracing::info;

/// Seed of the offline dataset, fixed so every mock session sees the same history
pub const MOCK_SEED: u64 = 2024;

pub struct SourceFactory;

impl SourceFactory {
    pub fn create_source(config: &DataSourceConfig) -> Arc<dyn PageSource> {
        match config.kind {
            DataSourceKind::DataGov => {
                info!(
                    "Using datastore {} (resource {})",
                    config.base_url, config.resource_id
                );
                Arc::new(DatastoreClient::new(config))
            }
            DataSourceKind::Mock => {
                info!("Using offline mock datastore (seed {})", MOCK_SEED);
                Arc::new(MockPageSource::synthetic(MOCK_SEED))
            }
        }
    }
}
