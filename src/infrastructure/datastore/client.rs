use super::types::{CountResponse, PageResponse};
use crate::config::DataSourceConfig;
use crate::domain::errors::FetchError;
use crate::domain::ports::PageSource;
use crate::domain::record::ResaleRecord;
use crate::infrastructure::http_client_factory::HttpClientFactory;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

/// Client for a CKAN-style `datastore_search` endpoint
pub struct DatastoreClient {
    client: Client,
    base_url: Url,
    resource_id: String,
}

impl DatastoreClient {
    pub fn new(config: &DataSourceConfig) -> Self {
        Self {
            client: HttpClientFactory::create_client(config.timeout, config.connect_timeout),
            base_url: config.base_url.clone(),
            resource_id: config.resource_id.clone(),
        }
    }

    /// `resource_id` on every call; `limit` and `offset` only when paging
    fn request(&self, paging: Option<(usize, usize)>) -> RequestBuilder {
        let request = self
            .client
            .get(self.base_url.clone())
            .query(&[("resource_id", self.resource_id.as_str())]);
        match paging {
            Some((offset, limit)) => request.query(&[("limit", limit), ("offset", offset)]),
            None => request,
        }
    }

    async fn get<T: DeserializeOwned>(&self, paging: Option<(usize, usize)>) -> Result<T, FetchError> {
        let response = self
            .request(paging)
            .send().await.map_err(|e| FetchError::Transport {
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Transport {
            reason: e.to_string(),
        })?;
        trace!("Datastore: received {} bytes", body.len());
        decode(&body)
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode {
        reason: e.to_string(),
    })
}

#[async_trait]
impl PageSource for DatastoreClient {
    async fn count(&self) -> Result<usize, FetchError> {
        let response: CountResponse = self.get(None).await?;
        debug!("Datastore: {} declares {} records", self.resource_id, response.result.total);
        Ok(response.result.total)
    }

    async fn page(&self, offset: usize, limit: usize) -> Result<Vec<ResaleRecord>, FetchError> {
        let response: PageResponse = self.get(Some((offset, limit))).await?;
        Ok(response.result.records)
    }

    fn name(&self) -> &str {
        &self.resource_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_RESOURCE_ID;

    fn client() -> DatastoreClient {
        let config = DataSourceConfig::from_lookup(|_| None).unwrap();
        DatastoreClient::new(&config)
    }

    #[test]
    fn test_count_request_has_no_paging_params() {
        let request = client().request(None).build().unwrap();

        assert_eq!(request.method(), &reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            format!(
                "https://data.gov.sg/api/action/datastore_search?resource_id={}",
                DEFAULT_RESOURCE_ID
            )
        );
    }

    #[test]
    fn test_page_request_carries_limit_and_offset() {
        let request = client().request(Some((20_000, 10_000))).build().unwrap();

        assert_eq!(
            request.url().as_str(),
            format!(
                "https://data.gov.sg/api/action/datastore_search?resource_id={}&limit=10000&offset=20000",
                DEFAULT_RESOURCE_ID
            )
        );
    }
}
