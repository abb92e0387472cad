use crate::data_transfer::{RegionCode, ScreenTarget, SelectionParams, SubRegionName};
use async_trait::async_trait;
use thiserror::Error;

/// Failure while talking to one of the list services.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Request { url: String, source: anyhow::Error },
    #[error("{url} responded with status {status}")]
    UnexpectedStatus { url: String, status: u16 },
    #[error("failed to decode the response from {url}")]
    MalformedResponse { url: String, source: anyhow::Error },
}

#[async_trait]
pub trait RegionListApi: Send + Sync {
    async fn list_regions(&self) -> Result<Vec<RegionCode>, FetchError>;
}

#[async_trait]
pub trait SubRegionListApi: Send + Sync {
    async fn list_sub_regions(&self, region: &RegionCode)
        -> Result<Vec<SubRegionName>, FetchError>;
}

pub trait LocalityApi: RegionListApi + SubRegionListApi {}

impl<T> LocalityApi for T where T: RegionListApi + SubRegionListApi {}

/// Navigation stack seam. Receives the target screen together with the
/// confirmed selection; nothing is observed back from it.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: ScreenTarget, params: SelectionParams);
}
