mod utils;

use httpmock::prelude::*;
use oneinch_calldata::{
    Config, FetchError, OneInchSwapFetcher, SwapQuoteFetcher, SwapRequest, USDC_ARBITRUM,
    WETH_ARBITRUM,
};
use rust_decimal::Decimal;
use serde_json::json;
use utils::has_exactly_swap_keys;

const SWAP_PATH: &str = "/swap/v5.2/42161/swap";
const TOKEN: &str = "test-token";
const WALLET: &str = "0x35f0DB0b238D3d0653d75FB67Cd64eE65C32DeFc";

fn usdc_to_weth() -> SwapRequest {
    SwapRequest::new(USDC_ARBITRUM, WETH_ARBITRUM, "100000000")
        .with_wallet(WALLET)
        .with_slippage(Decimal::from(5))
        .with_protocols("ARBITRUM_UNISWAP_V3")
}

fn fetcher_for(server: &MockServer, api_token: Option<&str>) -> OneInchSwapFetcher {
    let config = Config {
        api_url: server.base_url(),
        api_token: api_token.map(str::to_string),
        ..Config::default()
    };
    OneInchSwapFetcher::new(config).unwrap()
}

#[tokio::test]
async fn prints_payload_after_selector() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(SWAP_PATH)
                .header("authorization", "Bearer test-token")
                .query_param("src", USDC_ARBITRUM)
                .query_param("dst", WETH_ARBITRUM)
                .query_param("amount", "100000000")
                .query_param("from", WALLET)
                .query_param("slippage", "5")
                .query_param("receiver", WALLET)
                .query_param("disableEstimate", "true")
                .query_param("compatibility", "true")
                .query_param("protocols", "ARBITRUM_UNISWAP_V3")
                .matches(has_exactly_swap_keys);
            then.status(200)
                .json_body(json!({ "tx": { "data": "0x12345678deadbeef" } }));
        })
        .await;

    let calldata = fetcher_for(&server, Some(TOKEN))
        .fetch(&usdc_to_weth(), TOKEN)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(calldata.to_hex_string(false), "deadbeef");
    assert_eq!(calldata.to_hex_string(true), "0xdeadbeef");
}

#[tokio::test]
async fn sends_disabled_flags_as_false() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(SWAP_PATH)
                .query_param("disableEstimate", "false")
                .query_param("compatibility", "false")
                .matches(has_exactly_swap_keys);
            then.status(200)
                .json_body(json!({ "tx": { "data": "0x12345678cafe" } }));
        })
        .await;

    let request = usdc_to_weth()
        .with_disable_estimate(false)
        .with_compatibility(false);
    let calldata = fetcher_for(&server, Some(TOKEN))
        .fetch(&request, TOKEN)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(calldata.as_str(), "cafe");
}

#[tokio::test]
async fn missing_data_is_malformed_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(SWAP_PATH);
            then.status(200).json_body(json!({ "tx": {} }));
        })
        .await;

    let err = fetcher_for(&server, Some(TOKEN))
        .fetch(&usdc_to_weth(), TOKEN)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::MalformedResponse(_)), "{:?}", err);
}

#[tokio::test]
async fn short_data_is_malformed_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(SWAP_PATH);
            then.status(200).json_body(json!({ "tx": { "data": "0x1234" } }));
        })
        .await;

    let err = fetcher_for(&server, Some(TOKEN))
        .fetch(&usdc_to_weth(), TOKEN)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::MalformedResponse(_)), "{:?}", err);
}

#[tokio::test]
async fn non_json_error_body_is_reported_raw() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(SWAP_PATH);
            then.status(502).body("Bad Gateway");
        })
        .await;

    let err = fetcher_for(&server, Some(TOKEN))
        .fetch(&usdc_to_weth(), TOKEN)
        .await
        .unwrap_err();

    match err {
        FetchError::Api(payload) => {
            assert_eq!(payload.status, 502);
            assert_eq!(payload.body, "Bad Gateway");
            assert_eq!(payload.description, None);
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn json_error_body_keeps_description() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(SWAP_PATH);
            then.status(400).json_body(json!({
                "error": "Bad Request",
                "description": "insufficient liquidity",
                "statusCode": 400
            }));
        })
        .await;

    let err = fetcher_for(&server, Some(TOKEN))
        .fetch(&usdc_to_weth(), TOKEN)
        .await
        .unwrap_err();

    match err {
        FetchError::Api(payload) => {
            assert_eq!(payload.status, 400);
            assert!(payload.body.contains("insufficient liquidity"));
            assert_eq!(payload.description.as_deref(), Some("insufficient liquidity"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_token_fails_before_any_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(SWAP_PATH);
            then.status(200)
                .json_body(json!({ "tx": { "data": "0x12345678deadbeef" } }));
        })
        .await;

    let fetcher = fetcher_for(&server, None);

    let err = fetcher.fetch_configured(&usdc_to_weth()).await.unwrap_err();
    assert!(matches!(err, FetchError::Configuration(_)), "{:?}", err);

    let err = fetcher.fetch(&usdc_to_weth(), "").await.unwrap_err();
    assert!(matches!(err, FetchError::Configuration(_)), "{:?}", err);

    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn invalid_request_fails_before_any_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(SWAP_PATH);
            then.status(200)
                .json_body(json!({ "tx": { "data": "0x12345678deadbeef" } }));
        })
        .await;

    let request = usdc_to_weth().with_receiver("not-an-address");
    let err = fetcher_for(&server, Some(TOKEN))
        .fetch(&request, TOKEN)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::InvalidRequest(_)), "{:?}", err);
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn unreachable_endpoint_is_network_error() {
    // Nothing listens on port 1
    let config = Config {
        api_url: "http://127.0.0.1:1".to_string(),
        api_token: Some(TOKEN.to_string()),
        ..Config::default()
    };
    let fetcher = OneInchSwapFetcher::new(config).unwrap();

    let err = fetcher.fetch_configured(&usdc_to_weth()).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)), "{:?}", err);
}
