use std::process::Command;
use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use transaction_aggregation_service::api::{build_router, AppState};
use transaction_aggregation_service::engine::AggregationEngine;
use transaction_aggregation_service::storage::TransactionStorage;

async fn call(router: &Router, method: Method, uri: &str, body: Option<Value>) -> Result<(StatusCode, Value)> {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?,
        None => Request::builder().method(method).uri(uri).body(Body::empty())?
    };

    let response = router.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok((status, serde_json::from_slice(&bytes)?))
}

#[tokio::test]
async fn test_cars_and_shopping_scenario_over_http() -> Result<()> {
    let engine = Arc::new(AggregationEngine::new(Arc::new(TransactionStorage::new())));
    let router = build_router(AppState::new(engine));

    let creates = [
        (10, json!({"amount": 5000.0, "type": "cars"})),
        (11, json!({"amount": 10000.0, "type": "shopping", "parentId": 10})),
        (12, json!({"amount": 5000.0, "type": "shopping", "parentId": 11}))
    ];

    for (transaction_id, body) in creates {
        let (status, response) = call(&router, Method::PUT, &format!("/transactions/{transaction_id}"), Some(body)).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response, json!({"status": "ok"}));
    }

    let (status, response) = call(&router, Method::GET, "/transactions/types/cars", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, json!({"transactionIds": [10]}));

    let (_, response) = call(&router, Method::GET, "/transactions/sum/10", None).await?;

    assert_eq!(response["sum"].as_f64(), Some(20000.0));

    let (_, response) = call(&router, Method::GET, "/transactions/sum/11", None).await?;

    assert_eq!(response["sum"].as_f64(), Some(15000.0));

    let (status, response) = call(&router, Method::PUT, "/transactions/10", Some(json!({"amount": 1.0, "type": "cars"}))).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["status"], json!(400));

    Ok(())
}

#[test]
fn test_cli_prints_usage_on_help() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-aggregation-service");

    let output = Command::new(binary_path)
        .arg("--help")
        .output()?;

    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.starts_with("Usage: transaction-aggregation-service"));

    Ok(())
}

#[test]
fn test_cli_rejects_invalid_bind_address() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-aggregation-service");

    let output = Command::new(binary_path)
        .arg("not-an-address")
        .output()?;

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("Invalid bind address 'not-an-address'"));

    Ok(())
}
