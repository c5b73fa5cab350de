use perx::{
    Config, LoyaltyTransactionRequest, PerxError, PerxService, TransactionData,
    TransactionRequest, UserAccountRef,
};
use serde_json::{json, Map};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_service(server: &MockServer) -> PerxService {
    PerxService::new(Config::new(server.uri(), "client-id", "client-secret"))
}

#[tokio::test]
async fn test_earn_request_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v4/pos/loyalty_transactions"))
        .and(header("authorization", "Bearer tok-app"))
        .and(body_json(json!({
            "user_account": {"identifier": "crm-88-41"},
            "loyalty_program_id": 7,
            "points": 121
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 3301,
                "loyalty_program_id": 7,
                "points": 121,
                "transacted_at": "2024-05-05T10:00:00Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let earn = LoyaltyTransactionRequest::make_earn_request(
        UserAccountRef::by_identifier("crm-88-41"),
        7,
        121,
        Map::new(),
    );

    let service = test_service(&server);
    let recorded = service
        .submit_loyalty_transaction("tok-app", &earn)
        .await
        .unwrap();

    assert_eq!(recorded.id, 3301);
    assert_eq!(recorded.points, 121);
}

#[tokio::test]
async fn test_burn_request_negates_points() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v4/pos/loyalty_transactions"))
        .and(body_json(json!({
            "user_account": {"id": 1001},
            "loyalty_program_id": 7,
            "points": -121
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 3302, "loyalty_program_id": 7, "points": -121}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let burn = LoyaltyTransactionRequest::make_burn_request(
        UserAccountRef::by_id(1001),
        7,
        121,
        Map::new(),
    );

    let service = test_service(&server);
    let recorded = service
        .submit_loyalty_transaction("tok-app", &burn)
        .await
        .unwrap();

    assert_eq!(recorded.points, -121, "burn must record a negative delta");
}

#[tokio::test]
async fn test_earn_properties_merge_into_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v4/pos/loyalty_transactions"))
        .and(body_json(json!({
            "user_account": {"id": 1001},
            "loyalty_program_id": 7,
            "points": 50,
            "reason": "signup_bonus"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 3303, "points": 50}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut properties = Map::new();
    properties.insert("reason".to_string(), json!("signup_bonus"));

    let earn = LoyaltyTransactionRequest::make_earn_request(
        UserAccountRef::by_id(1001),
        7,
        50,
        properties,
    );

    let service = test_service(&server);
    let recorded = service
        .submit_loyalty_transaction("tok-app", &earn)
        .await
        .unwrap();
    assert_eq!(recorded.points, 50);
}

#[tokio::test]
async fn test_submit_generic_transaction() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v4/pos/transactions"))
        .and(body_json(json!({
            "user_account": {"id": 1001},
            "transaction_data": {
                "transaction_type": "purchase",
                "transaction_reference": "receipt-7781",
                "amount": 25.5,
                "currency": "SGD",
                "properties": {}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 88,
                "user_account_id": 1001,
                "transaction_type": "purchase",
                "transaction_reference": "receipt-7781",
                "amount": 25.5,
                "currency": "SGD"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = TransactionRequest::new(
        UserAccountRef::by_id(1001),
        TransactionData {
            transaction_type: "purchase".to_string(),
            transaction_reference: "receipt-7781".to_string(),
            amount: 25.5,
            currency: "SGD".to_string(),
            properties: Map::new(),
        },
    );

    let service = test_service(&server);
    let recorded = service.submit_transaction("tok-app", &request).await.unwrap();

    assert_eq!(recorded.id, 88);
    assert_eq!(recorded.transaction_reference.as_deref(), Some("receipt-7781"));
    assert_eq!(recorded.amount, Some(25.5));
}

#[tokio::test]
async fn test_customer_detail_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/pos/user_accounts/1001"))
        .and(header("authorization", "Bearer tok-app"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 1001, "identifier": "crm-88-41", "state": "active"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = test_service(&server);
    let customer = service.get_customer_detail("tok-app", 1001).await.unwrap();

    assert_eq!(customer.id, 1001);
    assert_eq!(customer.identifier.as_deref(), Some("crm-88-41"));
}

#[tokio::test]
async fn test_customer_detail_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/pos/user_accounts/1001"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "invalid_token"})),
        )
        .mount(&server)
        .await;

    let service = test_service(&server);
    let err = service.get_customer_detail("stale-token", 1001).await.unwrap_err();

    assert!(err.is_unauthorized(), "expected Unauthorized, got {:?}", err);
}

#[tokio::test]
async fn test_loyalty_transaction_rejected_payload() {
    let server = MockServer::start().await;

    // Service-level rejection delivered inside a 200
    Mock::given(method("POST"))
        .and(path("/v4/pos/loyalty_transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "insufficient_points",
            "message": "balance too low"
        })))
        .mount(&server)
        .await;

    let burn = LoyaltyTransactionRequest::make_burn_request(
        UserAccountRef::by_id(1001),
        7,
        5000,
        Map::new(),
    );

    let service = test_service(&server);
    let err = service
        .submit_loyalty_transaction("tok-app", &burn)
        .await
        .unwrap_err();

    match err {
        PerxError::Rejected { code, description } => {
            assert_eq!(code, "insufficient_points");
            assert_eq!(description, "balance too low");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}
