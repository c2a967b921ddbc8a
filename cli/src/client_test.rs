use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use bank_types::{Decimal, SortDirection};
use serde_json::json;

use super::*;

async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn account_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "userId": "u1",
        "accountNumber": "ACC0001234",
        "accountType": "SAVINGS",
        "balance": 100.5,
        "currency": "USD",
        "active": true,
        "createdAt": "2024-03-01T09:00:00"
    })
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers.get("authorization").and_then(|v| v.to_str().ok())
}

#[test]
fn new_rejects_non_http_base_url() {
    assert!(matches!(
        BankClient::new("ftp://bank.test", None),
        Err(CliError::InvalidBaseUrl(_))
    ));
    assert!(matches!(BankClient::new("not a url", None), Err(CliError::InvalidBaseUrl(_))));
}

#[test]
fn new_ignores_blank_token() {
    let client = BankClient::new("http://localhost:8080/api/", Some("  ".to_owned())).unwrap();
    assert_eq!(client.token, None);
    assert_eq!(client.url("/accounts"), "http://localhost:8080/api/accounts");
}

#[tokio::test]
async fn authed_call_without_token_fails_before_sending() {
    let client = BankClient::new("http://127.0.0.1:9/api", None).unwrap();
    let err = client.account("a1").await.unwrap_err();
    assert!(matches!(err, CliError::MissingToken));
}

#[tokio::test]
async fn login_decodes_body_and_keeps_raw_json() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|Json(body): Json<serde_json::Value>| async move {
            assert_eq!(body["username"], "alice");
            Json(json!({
                "token": "t0k",
                "id": "u1",
                "username": "alice",
                "email": "alice@example.com",
                "roles": ["ROLE_USER"]
            }))
        }),
    );
    let client = BankClient::new(&spawn_stub(router).await, None).unwrap();

    let reply = client
        .login(&LoginRequest {
            username: "alice".to_owned(),
            password: "pw".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(reply.body.token, "t0k");
    assert_eq!(reply.body.token_type, "Bearer");
    assert_eq!(reply.raw["email"], "alice@example.com");
}

#[tokio::test]
async fn accounts_by_user_sends_bearer_token() {
    let router = Router::new().route(
        "/api/accounts/user/{id}",
        get(|headers: HeaderMap, Path(id): Path<String>| async move {
            if bearer(&headers) != Some("Bearer t0k") {
                return StatusCode::UNAUTHORIZED.into_response();
            }
            assert_eq!(id, "u1");
            Json(json!([account_json("a1"), account_json("a2")])).into_response()
        }),
    );
    let client = BankClient::new(&spawn_stub(router).await, Some("t0k".to_owned())).unwrap();

    let reply = client.accounts_by_user("u1").await.unwrap();

    let ids: Vec<&str> = reply.body.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2"]);
    assert_eq!(reply.body[0].balance, Decimal::new(1005, 1));
}

#[tokio::test]
async fn backend_message_is_surfaced_on_error() {
    let router = Router::new().route(
        "/api/transactions/withdraw",
        post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "message": "Insufficient balance" }))) }),
    );
    let client = BankClient::new(&spawn_stub(router).await, Some("t0k".to_owned())).unwrap();

    let err = client
        .withdraw(&TransactionRequest {
            account_id: "a1".to_owned(),
            amount: Decimal::new(500, 0),
            description: None,
        })
        .await
        .unwrap_err();

    match err {
        CliError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Insufficient balance");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn error_without_body_falls_back_to_status_reason() {
    let router = Router::new().route(
        "/api/accounts/{id}/balance",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = BankClient::new(&spawn_stub(router).await, Some("t0k".to_owned())).unwrap();

    let err = client.balance("a1").await.unwrap_err();

    assert!(matches!(
        err,
        CliError::Api { status: 500, ref message } if message == "Internal Server Error"
    ));
}

#[tokio::test]
async fn balance_decodes_bare_number() {
    let router = Router::new().route("/api/accounts/{id}/balance", get(|| async { Json(json!(250.75)) }));
    let client = BankClient::new(&spawn_stub(router).await, Some("t0k".to_owned())).unwrap();

    let reply = client.balance("a1").await.unwrap();

    assert_eq!(reply.body.0, Decimal::new(25075, 2));
}

#[tokio::test]
async fn history_sends_paging_query() {
    let router = Router::new().route(
        "/api/transactions/account/{id}",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            Json(json!({
                "content": [],
                "totalElements": 0,
                "totalPages": 0,
                "number": params["page"].parse::<u32>().unwrap(),
                "size": params["size"].parse::<u32>().unwrap(),
                "echo": params,
            }))
        }),
    );
    let client = BankClient::new(&spawn_stub(router).await, Some("t0k".to_owned())).unwrap();
    let query = HistoryQuery {
        page: 2,
        size: 5,
        sort_by: "amount".to_owned(),
        direction: SortDirection::Asc,
    };

    let reply = client.history("a1", &query).await.unwrap();

    assert_eq!(reply.body.number, 2);
    assert_eq!(reply.body.size, 5);
    assert_eq!(reply.raw["echo"]["sortBy"], "amount");
    assert_eq!(reply.raw["echo"]["direction"], "ASC");
}

#[tokio::test]
async fn create_account_posts_type_and_default_currency() {
    let router = Router::new().route(
        "/api/accounts",
        post(|Json(body): Json<serde_json::Value>| async move {
            let mut account = account_json("a9");
            account["userId"] = body["userId"].clone();
            account["accountType"] = body["accountType"].clone();
            account["currency"] = body["currency"].clone();
            Json(account)
        }),
    );
    let client = BankClient::new(&spawn_stub(router).await, Some("t0k".to_owned())).unwrap();

    let reply = client.create_account("u7", AccountType::Checking).await.unwrap();

    assert_eq!(reply.body.user_id, "u7");
    assert_eq!(reply.body.account_type, AccountType::Checking);
    assert_eq!(reply.body.currency, "USD");
}
