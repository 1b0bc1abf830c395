//! # API Client Integration Tests
//!
//! Runs [`ApiClient`] against an in-process axum server speaking the wallet
//! service's envelope format.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use lib_core::api::{ApiClient, WalletApi};
use lib_core::config::ClientConfig;
use lib_core::error::ApiError;
use lib_core::notify::{RecordingNotifier, GENERIC_ERROR_MESSAGE};
use lib_core::pagination::CancelToken;
use shared::{ErrorCode, SortField, SortOrder, SortSpec, TransactionsRequest, WalletInput};

fn envelope(data: Value) -> Json<Value> {
    Json(json!({ "success": true, "statusCode": 200, "message": "ok", "data": data }))
}

fn failure(status: StatusCode, message: &str, code: &str) -> impl IntoResponse {
    (
        status,
        Json(json!({ "statusCode": status.as_u16(), "message": message, "error": { "code": code } })),
    )
}

async fn get_wallet(Path(id): Path<String>) -> axum::response::Response {
    match id.as_str() {
        "w1" => envelope(json!({ "id": "w1", "name": "alice", "balance": 10.5 })).into_response(),
        "nameless" => envelope(json!({ "id": "nameless", "name": "", "balance": 1 })).into_response(),
        "w 2/b" => envelope(json!({ "id": "w 2/b", "name": "bob", "balance": 3 })).into_response(),
        _ => failure(StatusCode::NOT_FOUND, "Wallet not found", "NOT_FOUND").into_response(),
    }
}

async fn setup(Json(body): Json<Value>) -> Json<Value> {
    envelope(json!({
        "id": "w9",
        "name": body["name"],
        "balance": body["balance"],
        "transactionId": "t0",
        "date": "2024-03-01T10:00:00.000Z"
    }))
}

async fn transact(Path(id): Path<String>, Json(body): Json<Value>) -> axum::response::Response {
    let amount = body["amount"].as_f64().unwrap_or_default();
    if amount < -10.0 {
        return failure(StatusCode::BAD_REQUEST, "Insufficient balance", "VALIDATION_ERROR").into_response();
    }
    envelope(json!({ "balance": 10.0 + amount, "transactionId": format!("{}-t1", id) })).into_response()
}

async fn transactions(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let skip: u32 = params.get("skip").and_then(|s| s.parse().ok()).unwrap_or(0);
    let limit: u32 = params.get("limit").and_then(|s| s.parse().ok()).unwrap_or(10);
    let items: Vec<Value> = (skip..(skip + limit).min(12))
        .map(|n| {
            json!({
                "id": format!("t{}", n),
                "walletId": params.get("walletId"),
                "amount": n,
                "description": format!("{} {}", params["sortBy"], params["sortOrder"]),
                "balance": n,
                "date": "2024-03-01T10:00:00Z",
                "type": "CREDIT"
            })
        })
        .collect();
    envelope(json!({
        "items": items,
        "metadata": { "total": 12, "page": skip / limit + 1, "limit": limit, "hasMore": skip + limit < 12 }
    }))
}

async fn export(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/csv")],
        format!("id,amount\n# {} {}\n", params["walletId"], params["sortBy"]),
    )
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(30)).await;
    envelope(json!(null))
}

async fn spawn_server() -> String {
    let app = Router::new()
        .route("/wallet/{id}", get(get_wallet))
        .route("/setup", post(setup))
        .route("/transact/{id}", post(transact))
        .route("/transactions", get(transactions))
        .route("/transactions/export", get(export))
        .route("/slow", get(slow))
        .route("/bare", get(|| async { Json(json!({ "id": "w1" })) }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn test_client() -> (ApiClient, Arc<RecordingNotifier>) {
    let base_url = spawn_server().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let config = ClientConfig::default().with_api_base_url(base_url);
    (ApiClient::new(&config, notifier.clone()).unwrap(), notifier)
}

#[tokio::test]
async fn test_get_wallet_unwraps_envelope() {
    // Arrange
    let (client, notifier) = test_client().await;

    // Act
    let wallet = client.get_wallet("w1").await.unwrap();

    // Assert
    assert_eq!(wallet.name, "alice");
    assert_eq!(wallet.balance, 10.5);
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn test_wallet_id_sent_as_single_path_segment() {
    // Arrange
    let (client, notifier) = test_client().await;

    // Act
    let wallet = client.get_wallet("w 2/b").await.unwrap();
    let tx = client.transact("w 2/b", 1.0, "tip").await.unwrap();

    // Assert
    assert_eq!(wallet.id, "w 2/b");
    assert_eq!(wallet.name, "bob");
    assert_eq!(tx.transaction_id, "w 2/b-t1");
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn test_not_found_is_server_error_and_notified_once() {
    let (client, notifier) = test_client().await;

    let err = client.get_wallet("missing").await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Server {
            status: 404,
            message: "Wallet not found".to_string(),
            code: Some(ErrorCode::NotFound),
        }
    );
    assert_eq!(notifier.messages(), vec!["The requested resource was not found".to_string()]);
}

#[tokio::test]
async fn test_validator_rejection_is_validation_error() {
    let (client, notifier) = test_client().await;

    let err = client.get_wallet("nameless").await.unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(notifier.messages(), vec![GENERIC_ERROR_MESSAGE.to_string()]);
}

#[tokio::test]
async fn test_body_without_envelope_is_validation_error() {
    let (client, _notifier) = test_client().await;

    let err = client
        .get::<shared::Wallet, ()>("/bare", None, None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_validation_error_uses_server_message() {
    let (client, notifier) = test_client().await;

    let err = client.transact("w1", -50.0, "rent").await.unwrap_err();

    assert_eq!(err.code(), Some(ErrorCode::ValidationError));
    assert_eq!(notifier.messages(), vec!["Insufficient balance".to_string()]);
}

#[tokio::test]
async fn test_setup_and_transact() {
    let (client, _notifier) = test_client().await;

    let created = client
        .setup(&WalletInput { name: "bob".to_string(), balance: Some(3.0) })
        .await
        .unwrap();
    let receipt = client.transact(&created.id, -5.0, "coffee").await.unwrap();

    assert_eq!(created.name, "bob");
    assert_eq!(created.transaction_id, "t0");
    assert_eq!(receipt.balance, 5.0);
    assert_eq!(receipt.transaction_id, "w9-t1");
}

#[tokio::test]
async fn test_transactions_query_string() {
    let (client, _notifier) = test_client().await;
    let request = TransactionsRequest {
        wallet_id: "w1".to_string(),
        skip: 10,
        limit: 10,
        sort_by: SortField::Amount,
        sort_order: SortOrder::Asc,
    };

    let page = client.get_transactions(&request, None).await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id, "t10");
    assert_eq!(page.items[0].wallet_id, "w1");
    assert_eq!(page.items[0].description, "amount asc");
    assert!(!page.metadata.has_more);
}

#[tokio::test]
async fn test_export_returns_csv_bytes() {
    let (client, _notifier) = test_client().await;

    let bytes = client
        .export_transactions("w1", SortSpec::new(SortField::Date, SortOrder::Desc))
        .await
        .unwrap();

    assert_eq!(String::from_utf8(bytes).unwrap(), "id,amount\n# w1 date\n");
}

#[tokio::test]
async fn test_cancelled_request_is_silent() {
    let (client, notifier) = test_client().await;
    let (handle, token) = CancelToken::new();

    let (outcome, _) = tokio::join!(
        client.get::<Value, ()>("/slow", None, None, Some(token)),
        async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            handle.cancel();
        }
    );

    assert_eq!(outcome, Err(ApiError::Cancelled));
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let notifier = Arc::new(RecordingNotifier::new());
    // port 9 (discard) is not listening
    let config = ClientConfig::default().with_api_base_url("http://127.0.0.1:9");
    let client = ApiClient::new(&config, notifier.clone()).unwrap();

    let err = client.get_wallet("w1").await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(notifier.messages(), vec![GENERIC_ERROR_MESSAGE.to_string()]);
}
