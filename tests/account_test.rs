mod mock_transport;

use bithumb_global_rs::WithdrawRequest;
use mock_transport::{TEST_BASE, ok, signed_client, text};
use serde_json::json;

#[tokio::test]
async fn balance_for_all_coins_and_one_coin() {
    let assets = json!([{"coinType": "BTC", "count": "1.5", "frozen": "0.1", "type": "spot"}]);
    let client = signed_client(vec![ok(assets.clone()), ok(assets.clone())]);

    assert_eq!(client.balance(None).await.unwrap(), assets);
    client.balance(Some("BTC")).await.unwrap();

    let calls = client.transport().calls();
    assert_eq!(calls[0].url, format!("{}/openapi/v1/spot/assetList", TEST_BASE));
    assert_eq!(calls[0].param("assetType"), Some(&text("spot")));
    assert!(calls[0].param("coinType").is_none());
    assert_eq!(calls[1].param("coinType"), Some(&text("BTC")));
}

#[tokio::test]
async fn market_includes_only_provided_filters() {
    let client = signed_client(vec![ok(json!([])), ok(json!([]))]);

    client.market(None, None).await.unwrap();
    client.market(Some("BTC"), Some("USDT")).await.unwrap();

    let calls = client.transport().calls();
    assert_eq!(calls[0].url, format!("{}/openapi/v1/spot/MARKET_SPOT", TEST_BASE));
    assert_eq!(calls[0].param("bizCode"), Some(&text("MARKET_SPOT")));
    assert!(calls[0].param("fcoinId").is_none());
    assert!(calls[0].param("fmarketId").is_none());
    assert_eq!(calls[1].param("fcoinId"), Some(&text("BTC")));
    assert_eq!(calls[1].param("fmarketId"), Some(&text("USDT")));
}

#[tokio::test]
async fn withdraw_posts_to_withdraw_endpoint() {
    let client = signed_client(vec![ok(json!({"id": "w-1"})), ok(json!({"id": "w-2"}))]);

    let data = client
        .withdraw(&WithdrawRequest::new("USDT", "0xabc", "100"))
        .await
        .unwrap();
    assert_eq!(data, json!({"id": "w-1"}));

    client
        .withdraw(
            &WithdrawRequest::new("XRP", "rXYZ", "25.5")
                .with_memo("998877")
                .with_mark("manual"),
        )
        .await
        .unwrap();

    let calls = client.transport().calls();
    assert_eq!(calls[0].url, format!("{}/openapi/v1/withdraw", TEST_BASE));
    assert_eq!(calls[0].param("bizCode"), Some(&text("withdraw")));
    assert_eq!(calls[0].param("coinType"), Some(&text("USDT")));
    assert_eq!(calls[0].param("address"), Some(&text("0xabc")));
    assert_eq!(calls[0].param("quantity"), Some(&text("100")));
    assert_eq!(calls[0].param("mark"), Some(&text("AUTO")));
    assert!(calls[0].param("extendParam").is_none());

    assert_eq!(calls[1].param("extendParam"), Some(&text("998877")));
    assert_eq!(calls[1].param("mark"), Some(&text("manual")));
}
