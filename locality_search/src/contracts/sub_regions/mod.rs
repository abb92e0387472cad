use region_selector::contracts::FetchError;
use region_selector::data_transfer::{RegionCode, SubRegionName};
use serde::Deserialize;
use url::Url;

#[derive(Deserialize, Debug)]
struct SubRegionResponse {
    nome: String,
}

fn generate_sub_regions_url(host: &str, region: &RegionCode) -> Result<Url, FetchError> {
    let raw = format!("{host}/estados/{region}/municipios");
    Url::parse(&raw).map_err(|err| FetchError::Request {
        url: raw,
        source: anyhow::Error::new(err),
    })
}

#[tracing::instrument(err, level = "info")]
pub(crate) async fn fetch_sub_regions(
    host: &str,
    region: &RegionCode,
) -> Result<Vec<SubRegionName>, FetchError> {
    let url = generate_sub_regions_url(host, region)?;
    let sub_regions: Vec<SubRegionResponse> = super::get_json(url).await?;
    Ok(sub_regions
        .into_iter()
        .map(|sub_region| SubRegionName::from(sub_region.nome))
        .collect())
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use region_selector::contracts::{FetchError, SubRegionListApi};
    use region_selector::data_transfer::SubRegionName;
    use serde_json::json;

    use crate::contracts::LocalityFinder;

    #[tokio::test]
    async fn test_sub_region_names_are_read_from_the_nome_field() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/estados/SP/municipios");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!([
                        { "id": 3550308, "nome": "São Paulo" },
                        { "id": 3509502, "nome": "Campinas" }
                    ]));
            })
            .await;

        let finder = LocalityFinder::with_host(server.base_url());
        let sub_regions = finder.list_sub_regions(&"SP".into()).await.unwrap();

        assert_eq!(
            sub_regions,
            vec![
                SubRegionName::from("São Paulo"),
                SubRegionName::from("Campinas"),
            ]
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_the_request_is_scoped_to_the_selected_region() {
        let server = MockServer::start_async().await;
        let rj_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/estados/RJ/municipios");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!([{ "nome": "Niterói" }]));
            })
            .await;

        let finder = LocalityFinder::with_host(server.base_url());
        let sub_regions = finder.list_sub_regions(&"RJ".into()).await.unwrap();

        assert_eq!(sub_regions, vec![SubRegionName::from("Niterói")]);
        rj_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_a_non_success_status_is_reported_with_the_status_code() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/estados/SP/municipios");
                then.status(404);
            })
            .await;

        let finder = LocalityFinder::with_host(server.base_url());
        let result = finder.list_sub_regions(&"SP".into()).await;

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
                when.method(GET).path("/estados/SP/municipios");
                then.status(200)
                    .header("content-type", "application/json")
                    .body("<html>maintenance</html>");
            })
            .await;

        let finder = LocalityFinder::with_host(server.base_url());
        let result = finder.list_sub_regions(&"SP".into()).await;

        assert!(matches!(
            result,
            Err(FetchError::MalformedResponse { .. })
        ));
    }
}
