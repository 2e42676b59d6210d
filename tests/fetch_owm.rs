mod common;

use skydash::data::owm::WeatherClient;
use skydash::domain::weather::{Condition, LocationQuery};
use skydash::error::WeatherError;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> WeatherClient {
    WeatherClient::with_base_urls(
        "test-key",
        format!("{}/weather", server.uri()),
        format!("{}/forecast", server.uri()),
    )
}

#[tokio::test]
async fn fetch_report_parses_both_payloads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::current_payload("New Delhi", "Clear", 28.4)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::five_day_forecast_payload()),
        )
        .mount(&server)
        .await;

    let report = client_for(&server)
        .fetch_report(&LocationQuery::place("New Delhi"))
        .await
        .expect("fetch succeeds");

    assert_eq!(report.current.name, "New Delhi");
    assert_eq!(report.current.condition, Condition::Clear);
    assert_eq!(report.samples.len(), 40);
    assert_eq!(report.samples[0].condition, Condition::Clouds);
}

#[tokio::test]
async fn non_success_current_status_is_data_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_report(&LocationQuery::place("Atlantis"))
        .await
        .expect_err("expected failure");

    assert!(matches!(err, WeatherError::DataUnavailable(status) if status.as_u16() == 404));

    // The forecast request is never issued once current conditions fail.
    let requests = server.received_requests().await.expect("request log");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    // A pooled server (MockServer::start) keeps its port alive after drop;
    // use a bare server so dropping it actually closes the listener.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let client =
        WeatherClient::with_base_urls("test-key", format!("{uri}/weather"), format!("{uri}/forecast"));
    let err = client
        .fetch_report(&LocationQuery::place("New Delhi"))
        .await
        .expect_err("expected failure");

    assert!(matches!(err, WeatherError::Network(_)));
}

#[tokio::test]
async fn requests_carry_metric_units_and_credential() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "New Delhi"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::current_payload("New Delhi", "Clear", 28.4)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "New Delhi"))
        .and(query_param("units", "metric"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::five_day_forecast_payload()),
        )
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .fetch_report(&LocationQuery::place("New Delhi"))
        .await
        .expect("fetch succeeds");
}

#[tokio::test]
async fn missing_visibility_defaults_to_ten_km() {
    let server = MockServer::start().await;
    let mut item = common::forecast_item(common::BASE_TS, 12.0, "Rain");
    item.as_object_mut().expect("object").remove("visibility");

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::current_payload("New Delhi", "Rain", 20.0)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "list": [item] })),
        )
        .mount(&server)
        .await;

    let report = client_for(&server)
        .fetch_report(&LocationQuery::place("New Delhi"))
        .await
        .expect("fetch succeeds");

    assert!((report.samples[0].visibility_m - 10_000.0).abs() < f64::EPSILON);
}
