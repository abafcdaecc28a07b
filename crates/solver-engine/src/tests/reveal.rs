use {super::*, reqwest::StatusCode};

async fn solve(engine: &SolverEngine, auction_id: i64, seconds: i64) -> u64 {
    let solution = engine
        .solve(auction(auction_id, vec![order(1)], vec![liquidity()], seconds))
        .await;
    solution["solutions"][0]["id"].as_u64().unwrap()
}

#[tokio::test]
async fn reveal_solution() {
    let engine = SolverEngine::new(Config::None).await;
    let solution_id = solve(&engine, 42, 60).await;

    let (status, body) = engine
        .post(
            "/reveal",
            json!({ "solutionId": solution_id.to_string(), "auctionId": 42 }),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let internalized = body["calldata"]["internalized"].as_str().unwrap();
    let uninternalized = body["calldata"]["uninternalized"].as_str().unwrap();
    // `settle` selector followed by the encoded arguments and the auction ID.
    assert!(uninternalized.starts_with("0x13d79a0b"), "{uninternalized}");
    assert!(uninternalized.ends_with("000000000000002a"), "{uninternalized}");
    assert!(internalized.ends_with("000000000000002a"), "{internalized}");
    // The swap is internalizable since both tokens are trusted.
    assert!(internalized.len() < uninternalized.len());
}

#[tokio::test]
async fn unknown_solution() {
    let engine = SolverEngine::new(Config::None).await;

    let (status, body) = engine
        .post("/reveal", json!({ "solutionId": 1234, "auctionId": "1" }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "SolutionNotFound");
}

#[tokio::test]
async fn different_auction() {
    let engine = SolverEngine::new(Config::None).await;
    let solution_id = solve(&engine, 1, 60).await;

    let (status, body) = engine
        .post("/reveal", json!({ "solutionId": solution_id, "auctionId": 2 }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "SolutionNotFound");
}

#[tokio::test]
async fn expired_solution() {
    let engine =
        SolverEngine::new(Config::String("solution-retention = \"0s\"".to_owned())).await;
    let solution_id = solve(&engine, 1, -1).await;

    let (status, body) = engine
        .post("/reveal", json!({ "solutionId": solution_id, "auctionId": 1 }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "SolutionNotFound");
}

#[tokio::test]
async fn invalid_request() {
    let engine = SolverEngine::new(Config::None).await;

    let (status, body) = engine
        .post("/reveal", json!({ "solutionId": "one", "auctionId": 1 }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "InvalidRequest");
}
