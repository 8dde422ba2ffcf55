use crate::domain::errors::FetchError;
use crate::domain::record::ResaleRecord;
use async_trait::async_trait;

/// A paginated upstream of resale records
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Issues the unpaged request and returns the declared record total
    async fn count(&self) -> Result<usize, FetchError>;

    /// Returns up to `limit` records starting at `offset`, in upstream order
    async fn page(&self, offset: usize, limit: usize) -> Result<Vec<ResaleRecord>, FetchError>;

    fn name(&self) -> &str;
}
