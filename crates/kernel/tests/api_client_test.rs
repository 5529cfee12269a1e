#![allow(clippy::unwrap_used, clippy::expect_used)]
//! API client tests against a local mock backend.

use std::time::Duration;

use orderlee_kernel::client::models::OrderStatus;
use orderlee_kernel::client::{
    ApiPaymentProcessor, MemoryTokenStore, PaymentOutcome, TokenStore, process_logistics_payment,
};
use orderlee_kernel::{ApiClient, ApiError, AuthSession};
use orderlee_test_utils::mock_api::{MockApi, spawn_unresponsive};
use serde_json::{Value, json};

fn client(base_url: &str, token: Option<&str>) -> ApiClient {
    let store = match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    };
    ApiClient::new(base_url, Duration::from_secs(5), store).unwrap()
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let mock = MockApi::new().respond("GET", "/users/me", 200, json!({"id": 7}));
    let base = mock.spawn().await;

    let user = client(&base, Some("abc123")).current_user().await.unwrap();

    assert_eq!(user["id"], 7);
    let request = mock.only_request();
    assert_eq!(request.authorization.as_deref(), Some("Bearer abc123"));
}

#[tokio::test]
async fn test_no_token_no_authorization_header() {
    let mock = MockApi::new().respond("GET", "/products", 200, json!([]));
    let base = mock.spawn().await;

    client(&base, None).products().await.unwrap();

    assert!(mock.only_request().authorization.is_none());
}

#[tokio::test]
async fn test_data_envelope_is_unwrapped() {
    let mock = MockApi::new()
        .respond("GET", "/orders", 200, json!({"data": [{"id": 1}], "total": 1}))
        .respond("GET", "/notifications", 200, json!({"data": null, "count": 0}));
    let base = mock.spawn().await;
    let client = client(&base, Some("t"));

    let orders = client.orders().await.unwrap();
    assert_eq!(orders, json!([{"id": 1}]));

    let notifications = client.notifications().await.unwrap();
    assert_eq!(notifications, json!({"data": null, "count": 0}));
}

#[tokio::test]
async fn test_error_message_from_body() {
    let mock = MockApi::new().respond(
        "POST",
        "/orders",
        400,
        json!({"message": "Customer name is required"}),
    );
    let base = mock.spawn().await;

    let err = client(&base, Some("t"))
        .create_order(&json!({"items": []}))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "Customer name is required");
    assert_eq!(mock.only_request().json(), json!({"items": []}));
}

#[tokio::test]
async fn test_error_without_message() {
    let mock = MockApi::new().respond_raw("GET", "/payments", 500, "oops");
    let base = mock.spawn().await;

    let err = client(&base, Some("t")).payments().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn test_unregistered_endpoint_is_http_error() {
    let mock = MockApi::new();
    let base = mock.spawn().await;

    let err = client(&base, None).shipments().await.unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 404, .. }));
}

#[tokio::test]
async fn test_empty_body_decodes_as_null() {
    let mock = MockApi::new().respond_raw("DELETE", "/products/9", 204, "");
    let base = mock.spawn().await;

    let value = client(&base, Some("t")).delete_product(9).await.unwrap();
    assert_eq!(value, Value::Null);
    assert_eq!(mock.only_request().method, "DELETE");
}

#[tokio::test]
async fn test_query_parameters() {
    let mock = MockApi::new()
        .respond("PUT", "/orders/3/status?status=SHIPPED", 200, json!({"id": 3}))
        .respond("GET", "/products/search?query=red%20shoes", 200, json!([]));
    let base = mock.spawn().await;
    let client = client(&base, Some("t"));

    client
        .update_order_status(3, OrderStatus::Shipped)
        .await
        .unwrap();
    client.search_products("red shoes").await.unwrap();

    assert_eq!(mock.requests().len(), 2);
}

#[tokio::test]
async fn test_login_restore_logout() {
    let mock = MockApi::new()
        .respond(
            "POST",
            "/auth/login",
            200,
            json!({"accessToken": "tok-1", "userId": 42, "email": "ada@shop.ng"}),
        )
        .respond("GET", "/users/me", 200, json!({"data": {"id": 42}}));
    let base = mock.spawn().await;
    let session = AuthSession::new(client(&base, None));

    assert!(session.restore().await.unwrap().is_none());

    let auth = session.login("ada@shop.ng", "secret").await.unwrap();
    assert_eq!(auth.access_token, "tok-1");
    assert_eq!(auth.token_type, "Bearer");
    assert!(session.is_authenticated());

    let user = session.restore().await.unwrap().unwrap();
    assert_eq!(user, json!({"id": 42}));

    session.logout().unwrap();
    assert!(!session.is_authenticated());

    let requests = mock.requests();
    assert_eq!(
        requests[0].json(),
        json!({"email": "ada@shop.ng", "password": "secret"})
    );
    assert!(requests[0].authorization.is_none());
    assert_eq!(requests[1].authorization.as_deref(), Some("Bearer tok-1"));
}

#[tokio::test]
async fn test_rejected_token_is_cleared() {
    let mock = MockApi::new().respond("GET", "/users/me", 401, json!({"message": "expired"}));
    let base = mock.spawn().await;
    let session = AuthSession::new(client(&base, Some("stale")));

    assert!(session.restore().await.unwrap().is_none());
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_server_error_keeps_token() {
    let mock = MockApi::new().respond("GET", "/users/me", 503, json!({"message": "maintenance"}));
    let base = mock.spawn().await;
    let session = AuthSession::new(client(&base, Some("valid")));

    let err = session.restore().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(err.to_string(), "maintenance");
    assert!(session.is_authenticated());
    assert_eq!(session.client().token().as_deref(), Some("valid"));
}

#[tokio::test]
async fn test_forbidden_token_is_cleared() {
    let mock = MockApi::new().respond("GET", "/users/me", 403, json!({"message": "forbidden"}));
    let base = mock.spawn().await;
    let session = AuthSession::new(client(&base, Some("revoked")));

    assert!(session.restore().await.unwrap().is_none());
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_missing_user_keeps_token() {
    let mock = MockApi::new();
    let base = mock.spawn().await;
    let session = AuthSession::new(client(&base, Some("valid")));

    let err = session.restore().await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn test_token_persisted_to_store() {
    let mock = MockApi::new().respond("POST", "/auth/login", 200, json!({"accessToken": "tok-2"}));
    let base = mock.spawn().await;

    let dir = std::env::temp_dir().join(format!("orderlee-token-{}", std::process::id()));
    let store = orderlee_kernel::client::FileTokenStore::new(dir.join("token"));
    let client = ApiClient::new(&base, Duration::from_secs(5), store.clone()).unwrap();

    AuthSession::new(client).login("a@b.c", "pw").await.unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("tok-2"));

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_logistics_payment_through_api() {
    let mock = MockApi::new()
        .respond(
            "POST",
            "/stripe/create-payment-intent",
            200,
            json!({"clientSecret": "pi_77_secret_xyz", "paymentIntentId": "pi_77"}),
        )
        .respond(
            "POST",
            "/stripe/confirm-payment?paymentIntentId=pi_77",
            200,
            json!({"id": "pi_77", "status": "succeeded", "amount": 2500.0}),
        );
    let base = mock.spawn().await;
    let processor = ApiPaymentProcessor::new(client(&base, Some("t")));

    let outcome = process_logistics_payment(
        &processor,
        250_000,
        12,
        5,
        Some(&json!({"type": "card"})),
        Some("ada@shop.ng"),
    )
    .await;

    match outcome {
        PaymentOutcome::Succeeded { intent, client_secret } => {
            assert_eq!(intent.id, "pi_77");
            assert_eq!(client_secret, "pi_77_secret_xyz");
        }
        PaymentOutcome::Failed { reason } => panic!("payment failed: {reason}"),
    }

    let requests = mock.requests();
    let intent = requests[0].json();
    assert_eq!(intent["amount"], 2500.0);
    assert_eq!(intent["currency"], "ngn");
    assert_eq!(intent["orderId"], 12);
    assert_eq!(intent["shipmentId"], 5);
    assert_eq!(requests[1].json(), json!({"type": "card"}));
}

#[tokio::test]
async fn test_logistics_payment_failure_is_reported() {
    let mock = MockApi::new().respond(
        "POST",
        "/stripe/create-payment-intent",
        502,
        json!({"message": "processor unavailable"}),
    );
    let base = mock.spawn().await;
    let processor = ApiPaymentProcessor::new(client(&base, Some("t")));

    let outcome = process_logistics_payment(&processor, 1000, 1, 1, None, None).await;

    assert_eq!(
        outcome,
        PaymentOutcome::Failed {
            reason: "processor unavailable".to_string()
        }
    );
}

#[tokio::test]
async fn test_configured_timeout_is_applied() {
    let base = spawn_unresponsive().await;
    let client = ApiClient::new(base, Duration::from_millis(200), MemoryTokenStore::new()).unwrap();

    let err = client.current_user().await.unwrap_err();

    match err {
        ApiError::Transport(e) => assert!(e.is_timeout(), "expected a timeout, got {e}"),
        other => panic!("expected a transport error, got {other:?}"),
    }
}
