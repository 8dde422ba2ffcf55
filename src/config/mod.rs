//! Configuration module for the forecast dashboard.
//!
//! Every key is optional; the defaults reproduce the published data.gov.sg
//! resale dataset with 10,000-record pages.

mod data_source_config;
mod export_config;

pub use data_source_config::{
    DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_RESOURCE_ID, DataSourceConfig, DataSourceKind,
};
pub use export_config::ExportConfig;

use anyhow::{Context, Result};
use std::env;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub data_source: DataSourceConfig,
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads keys through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_source =
            DataSourceConfig::from_lookup(&lookup).context("Failed to load data source config")?;
        let export = ExportConfig::from_lookup(&lookup);

        Ok(Self {
            data_source,
            export,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::time::Duration;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_published_dataset() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.data_source.kind, DataSourceKind::DataGov);
        assert_eq!(config.data_source.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.data_source.resource_id, DEFAULT_RESOURCE_ID);
        assert_eq!(config.data_source.page_size, 10_000);
        assert_eq!(config.data_source.timeout, Duration::from_secs(30));
        assert_eq!(config.export.directory, PathBuf::from("."));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATA_SOURCE", "Mock"),
            ("DATASTORE_RESOURCE_ID", "d_test"),
            ("FETCH_PAGE_SIZE", "250"),
            ("HTTP_TIMEOUT_SECS", "5"),
            ("EXPORT_DIR", "/tmp/exports"),
        ]))
        .unwrap();

        assert_eq!(config.data_source.kind, DataSourceKind::Mock);
        assert_eq!(config.data_source.resource_id, "d_test");
        assert_eq!(config.data_source.page_size, 250);
        assert_eq!(config.data_source.timeout, Duration::from_secs(5));
        assert_eq!(config.data_source.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.export.directory, PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_unparsable_numbers_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("FETCH_PAGE_SIZE", "lots"),
            ("HTTP_CONNECT_TIMEOUT_SECS", "-1"),
        ]))
        .unwrap();

        assert_eq!(config.data_source.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.data_source.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("DATA_SOURCE", "sqlite")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("FETCH_PAGE_SIZE", "0")])).is_err());

        let err = Config::from_lookup(lookup_from(&[("DATASTORE_BASE_URL", "not a url")]))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("DATASTORE_BASE_URL"));
    }
}
