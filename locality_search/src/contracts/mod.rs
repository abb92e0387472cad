pub mod regions;
pub mod sub_regions;

use crate::config::SETTINGS_CONFIG;
use async_trait::async_trait;
use region_selector::contracts::{FetchError, RegionListApi, SubRegionListApi};
use region_selector::data_transfer::{RegionCode, SubRegionName};
use serde::de::DeserializeOwned;
use shared_kernel::http_client::HttpClient;
use url::Url;

pub(crate) async fn get_json<DTO: DeserializeOwned>(url: Url) -> Result<DTO, FetchError> {
    let response = HttpClient::get(url.clone())
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    response
        .json()
        .await
        .map_err(|err| FetchError::MalformedResponse {
            url: url.to_string(),
            source: anyhow::Error::new(err),
        })
}

/// Client for the geographic lookup API: region codes at the top level,
/// sub-region names scoped to each region code.
#[derive(Clone)]
pub struct LocalityFinder {
    host: String,
}

impl Default for LocalityFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalityFinder {
    pub fn new() -> Self {
        Self {
            host: SETTINGS_CONFIG.locality.host.clone(),
        }
    }

    /// Points the finder at a different host, e.g. a mock server.
    pub fn with_host(host: String) -> Self {
        Self { host }
    }

    pub(crate) fn host(&self) -> &str {
        &self.host
    }
}

#[async_trait]
impl RegionListApi for LocalityFinder {
    async fn list_regions(&self) -> Result<Vec<RegionCode>, FetchError> {
        regions::fetch_regions(self.host()).await
    }
}

#[async_trait]
impl SubRegionListApi for LocalityFinder {
    async fn list_sub_regions(
        &self,
        region: &RegionCode,
    ) -> Result<Vec<SubRegionName>, FetchError> {
        sub_regions::fetch_sub_regions(self.host(), region).await
    }
}
