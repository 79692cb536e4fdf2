//! Integration tests for the countries API client

mod helpers;

use assert_matches::assert_matches;
use serde_json::json;
use GeoBuddy::models::MISSING_FIELD;
use GeoBuddy::services::CountryService;
use GeoBuddy::{CountryError, Settings};

use helpers::CountriesMockServer;

fn service_for(mock: &CountriesMockServer) -> CountryService {
    let mut settings = Settings::default();
    settings.countries.api_url = mock.uri();
    CountryService::new(&settings).unwrap()
}

#[tokio::test]
async fn test_lookup_uses_first_result() {
    let mock = CountriesMockServer::new().await;
    mock.mock_france().await;

    let record = service_for(&mock).lookup("France").await.unwrap();

    assert_eq!(record.name, "France");
    assert_eq!(record.capital, "Paris");
    assert_eq!(record.region, "Europe");
    assert_eq!(record.population, "67391582");
    assert_eq!(record.languages, "French");
}

#[tokio::test]
async fn test_name_is_percent_encoded() {
    let mock = CountriesMockServer::new().await;
    mock.mock_lookup(
        "United%20Kingdom",
        200,
        json!([{"name": {"common": "United Kingdom"}, "capital": ["London"], "languages": {"eng": "English"}}]),
    )
    .await;

    let record = service_for(&mock).lookup("United Kingdom").await.unwrap();
    assert_eq!(record.capital, "London");
    assert_eq!(record.region, MISSING_FIELD);
}

#[tokio::test]
async fn test_client_error_is_not_found() {
    let mock = CountriesMockServer::new().await;
    mock.mock_not_found("Narnia").await;

    let result = service_for(&mock).lookup("Narnia").await;
    assert_matches!(result, Err(CountryError::NotFound(name)) if name == "Narnia");
}

#[tokio::test]
async fn test_server_error_is_lookup_failure() {
    let mock = CountriesMockServer::new().await;
    mock.mock_lookup("France", 503, json!({"message": "down"})).await;

    assert_matches!(service_for(&mock).lookup("France").await, Err(CountryError::LookupFailed(_)));
}

#[tokio::test]
async fn test_malformed_body_is_lookup_failure() {
    let mock = CountriesMockServer::new().await;
    mock.mock_raw_lookup("France", 200, "<html>oops</html>").await;

    assert_matches!(service_for(&mock).lookup("France").await, Err(CountryError::LookupFailed(_)));
}

#[tokio::test]
async fn test_empty_result_is_lookup_failure() {
    let mock = CountriesMockServer::new().await;
    mock.mock_lookup("France", 200, json!([])).await;

    assert_matches!(service_for(&mock).lookup("France").await, Err(CountryError::LookupFailed(_)));
}

#[tokio::test]
async fn test_unreachable_api_is_lookup_failure() {
    let mut settings = Settings::default();
    settings.countries.api_url = "http://127.0.0.1:1".to_string();
    let service = CountryService::new(&settings).unwrap();

    assert_matches!(service.lookup("France").await, Err(CountryError::LookupFailed(_)));
}
