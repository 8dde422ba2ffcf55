//! Upstream datastore configuration parsing from environment variables.

use anyhow::{Context, Result, bail};
use std::str::FromStr;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://data.gov.sg/api/action/datastore_search";
pub const DEFAULT_RESOURCE_ID: &str = "d_8b84c4ee58e3cfc0ece0d773c8ca6abc";
pub const DEFAULT_PAGE_SIZE: usize = 10_000;

/// Where records come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSourceKind {
    DataGov,
    Mock,
}

impl FromStr for DataSourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "datagov" | "data.gov.sg" => Ok(DataSourceKind::DataGov),
            "mock" => Ok(DataSourceKind::Mock),
            _ => bail!("Invalid DATA_SOURCE: {}. Must be 'datagov' or 'mock'", s),
        }
    }
}

impl std::fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSourceKind::DataGov => write!(f, "datagov"),
            DataSourceKind::Mock => write!(f, "mock"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DataSourceConfig {
    pub kind: DataSourceKind,
    pub base_url: Url,
    pub resource_id: String,
    pub page_size: usize,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl DataSourceConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let kind = match lookup("DATA_SOURCE") {
            Some(v) => DataSourceKind::from_str(&v)?,
            None => DataSourceKind::DataGov,
        };

        let base_url_str = lookup("DATASTORE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url_str)
            .with_context(|| format!("Invalid DATASTORE_BASE_URL: {}", base_url_str))?;

        let resource_id = lookup("DATASTORE_RESOURCE_ID")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RESOURCE_ID.to_string());

        let page_size = lookup("FETCH_PAGE_SIZE")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            bail!("FETCH_PAGE_SIZE must be greater than zero");
        }

        let timeout = lookup("HTTP_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);
        let connect_timeout = lookup("HTTP_CONNECT_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(10);

        Ok(Self {
            kind,
            base_url,
            resource_id,
            page_size,
            timeout: Duration::from_secs(timeout),
            connect_timeout: Duration::from_secs(connect_timeout),
        })
    }
}
