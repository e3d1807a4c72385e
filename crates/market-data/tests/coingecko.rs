use configuration::MarketDataSettings;
use market_data::{
    fetch_pair, fetch_pair_or_simulate, CoinGeckoClient, MarketDataError, MarketDataSource,
    SimulatedSource,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> MarketDataSettings {
    MarketDataSettings {
        base_url: server.uri(),
        timeout_secs: 5,
        ..MarketDataSettings::default()
    }
}

fn chart(start_ms: i64, closes: &[f64]) -> serde_json::Value {
    let prices: Vec<_> = closes
        .iter()
        .enumerate()
        .map(|(i, c)| json!([start_ms + i as i64 * 86_400_000, c]))
        .collect();
    let volumes: Vec<_> = closes
        .iter()
        .enumerate()
        .take(closes.len().saturating_sub(1))
        .map(|(i, _)| json!([start_ms + i as i64 * 86_400_000, 1_000.0 + i as f64]))
        .collect();
    json!({ "prices": prices, "market_caps": [], "total_volumes": volumes })
}

#[tokio::test]
async fn parses_market_chart_into_bars() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .and(query_param("vs_currency", "usd"))
        .and(query_param("days", "3"))
        .and(query_param("interval", "daily"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart(1_700_000_000_000, &[10.0, 11.0, 12.0])))
        .expect(1)
        .mount(&server)
        .await;

    let client = CoinGeckoClient::new(&settings(&server)).unwrap();
    let series = client.fetch_series("bitcoin", 3).await.unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series[0].price, 10.0);
    assert_eq!(series[0].volume, 1_000.0);
    assert_eq!(series[0].time, "11/14");
    // The last close has no matching volume entry.
    assert_eq!(series[2].volume, 0.0);
    assert!(series.iter().all(|p| p.low <= p.price && p.price <= p.high));
}

#[tokio::test]
async fn api_key_is_sent_as_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("x-cg-pro-api-key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart(0, &[1.0])))
        .expect(1)
        .mount(&server)
        .await;

    let mut settings = settings(&server);
    settings.api_key = Some("secret".to_string());
    let client = CoinGeckoClient::new(&settings).unwrap();
    assert_eq!(client.fetch_series("bitcoin", 1).await.unwrap().len(), 1);
}

#[tokio::test]
async fn rate_limit_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&server)
        .await;

    let client = CoinGeckoClient::new(&settings(&server)).unwrap();
    let result = client.fetch_series("bitcoin", 30).await;
    assert!(matches!(result, Err(MarketDataError::Api(_))));
}

#[tokio::test]
async fn malformed_body_is_a_deserialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"error\": true}"))
        .mount(&server)
        .await;

    let client = CoinGeckoClient::new(&settings(&server)).unwrap();
    let result = client.fetch_series("bitcoin", 30).await;
    assert!(matches!(result, Err(MarketDataError::Deserialization(_))));
}

#[tokio::test]
async fn pair_fetches_target_and_reference() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/solana/market_chart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart(0, &[1.0, 2.0])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart(0, &[100.0, 200.0, 300.0])))
        .mount(&server)
        .await;

    let client = CoinGeckoClient::new(&settings(&server)).unwrap();
    let (target, reference) = fetch_pair(&client, "solana", "bitcoin", 3).await.unwrap();
    assert_eq!(target.len(), 2);
    assert_eq!(reference.len(), 3);
}

#[tokio::test]
async fn same_coin_is_fetched_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart(0, &[1.0, 2.0])))
        .expect(1)
        .mount(&server)
        .await;

    let client = CoinGeckoClient::new(&settings(&server)).unwrap();
    let (target, reference) = fetch_pair(&client, "bitcoin", "bitcoin", 2).await.unwrap();
    assert_eq!(target, reference);
}

#[tokio::test]
async fn failed_fetch_falls_back_to_one_simulated_series() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = CoinGeckoClient::new(&settings(&server)).unwrap();
    let snapshot =
        fetch_pair_or_simulate(&client, &SimulatedSource::seeded(5), "solana", "bitcoin", 45).await;

    assert!(snapshot.simulated);
    assert_eq!(snapshot.target.len(), 45);
    assert_eq!(snapshot.target, snapshot.reference);
}
