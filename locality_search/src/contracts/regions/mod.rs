use region_selector::contracts::FetchError;
use region_selector::data_transfer::RegionCode;
use serde::Deserialize;
use url::Url;

#[derive(Deserialize, Debug)]
struct RegionResponse {
    sigla: String,
}

fn generate_regions_url(host: &str) -> Result<Url, FetchError> {
    let raw = format!("{host}/estados");
    Url::parse(&raw).map_err(|err| FetchError::Request {
        url: raw,
        source: anyhow::Error::new(err),
    })
}

#[tracing::instrument(err, level = "info")]
pub(crate) async fn fetch_regions(host: &str) -> Result<Vec<RegionCode>, FetchError> {
    let url = generate_regions_url(host)?;
    let regions: Vec<RegionResponse> = super::get_json(url).await?;
    Ok(regions
        .into_iter()
        .map(|region| RegionCode::from(region.sigla))
        .collect())
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use region_selector::contracts::{FetchError, RegionListApi};
    use region_selector::data_transfer::RegionCode;
    use serde_json::json;

    use crate::contracts::LocalityFinder;

    #[tokio::test]
    async fn test_region_codes_are_read_from_the_sigla_field() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/estados");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!([
                        { "id": 35, "sigla": "SP", "nome": "São Paulo" },
                        { "id": 33, "sigla": "RJ", "nome": "Rio de Janeiro" },
                        { "id": 12, "sigla": "AC", "nome": "Acre" }
                    ]));
            })
            .await;

        let finder = LocalityFinder::with_host(server.base_url());
        let regions = finder.list_regions().await.unwrap();

        assert_eq!(
            regions,
            vec![
                RegionCode::from("SP"),
                RegionCode::from("RJ"),
                RegionCode::from("AC"),
            ]
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_a_non_success_status_is_reported_with_the_status_code() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/estados");
                then.status(404);
            })
            .await;

        let finder = LocalityFinder::with_host(server.base_url());
        let result = finder.list_regions().await;

        assert!(matches!(
            result,
            Err(FetchError::UnexpectedStatus { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_a_body_that_is_not_json_is_reported_as_malformed() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/estados");
                then.status(200)
                    .header("content-type", "application/json")
                    .body("surprise");
            })
            .await;

        let finder = LocalityFinder::with_host(server.base_url());
        let result = finder.list_regions().await;

        assert!(matches!(
            result,
            Err(FetchError::MalformedResponse { .. })
        ));
    }
}
