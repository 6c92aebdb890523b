use bithumb_global_rs::BithumbGlobal;

// Hits the production public endpoints: cargo test -- --ignored

#[tokio::test]
#[ignore]
async fn test_live_depth() {
    let client = BithumbGlobal::public().unwrap();
    println!("Testing Bithumb Global depth for BTC/USDT");
    let depth = client.depth("BTC/USDT", 10).await.unwrap();

    assert!(!depth.asks.is_empty(), "Asks should not be empty");
    assert!(!depth.bids.is_empty(), "Bids should not be empty");
    assert!(depth.asks.len() <= 10);

    let (best_ask, _) = depth.asks[0];
    let (best_bid, _) = depth.bids[0];
    println!("   Best ask: {}", best_ask);
    println!("   Best bid: {}", best_bid);
    assert!(best_ask > 0.0 && best_bid > 0.0, "Prices should be positive");
}

#[tokio::test]
#[ignore]
async fn test_live_all_pairs() {
    let client = BithumbGlobal::public().unwrap();
    let pairs = client.all_pairs().await.unwrap();

    let pairs = pairs.as_array().expect("spotConfig should be a list");
    assert!(!pairs.is_empty());
    println!("   {} spot pairs", pairs.len());
}
