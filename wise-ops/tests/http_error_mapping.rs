//! Integration tests for the HTTP adapter's error mapping.
//!
//! These tests drive the router directly and verify that operation
//! failures surface with the documented status codes and that partial
//! invoice failures name the failed phase and the orphaned draft's ids.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wise_ops::{OpsService, inbound::HttpServer};
use wise_types::{
    BalanceSummary, FundOutcome, GatewayError, InvoiceCommand, InvoiceDetails, InvoiceStatus,
    PaymentRequest, Profile, ProfileType, Quote, Recipient, Transfer, WiseGateway,
};

/// Gateway double that serves one business profile and can be told to
/// fail a single named call.
struct StubGateway {
    fail_on: Option<&'static str>,
}

impl StubGateway {
    fn ok() -> Self {
        Self { fail_on: None }
    }

    fn failing(call: &'static str) -> Self {
        Self {
            fail_on: Some(call),
        }
    }

    fn check(&self, name: &'static str) -> Result<(), GatewayError> {
        if self.fail_on == Some(name) {
            return Err(GatewayError::Api {
                status: 500,
                body: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}

fn draft_response(request_id: &str, status: InvoiceStatus, link: Option<&str>) -> PaymentRequest {
    PaymentRequest {
        id: request_id.to_string(),
        status,
        link: link.map(String::from),
        invoice: Some(InvoiceDetails {
            number: Some("INV-001".to_string()),
        }),
    }
}

#[async_trait::async_trait]
impl WiseGateway for StubGateway {
    async fn list_profiles(&self) -> Result<Vec<Profile>, GatewayError> {
        self.check("list_profiles")?;
        Ok(vec![Profile {
            id: 7,
            profile_type: ProfileType::Business,
        }])
    }

    async fn list_recipients(
        &self,
        _profile_id: i64,
        _currency: Option<&str>,
    ) -> Result<Vec<Recipient>, GatewayError> {
        self.check("list_recipients")?;
        Ok(Vec::new())
    }

    async fn list_balance_options(
        &self,
        _profile_id: i64,
    ) -> Result<Vec<BalanceSummary>, GatewayError> {
        self.check("list_balance_options")?;
        Ok(Vec::new())
    }

    async fn create_invoice_draft(
        &self,
        _profile_id: i64,
        _balance_id: i64,
        _due_at: &str,
        _issue_date: &str,
    ) -> Result<PaymentRequest, GatewayError> {
        self.check("create_invoice_draft")?;
        Ok(draft_response("pr-123", InvoiceStatus::Draft, None))
    }

    async fn update_invoice(
        &self,
        _profile_id: i64,
        request_id: &str,
        _command: &InvoiceCommand,
    ) -> Result<PaymentRequest, GatewayError> {
        self.check("update_invoice")?;
        Ok(draft_response(request_id, InvoiceStatus::Draft, None))
    }

    async fn publish_invoice(
        &self,
        _profile_id: i64,
        request_id: &str,
    ) -> Result<PaymentRequest, GatewayError> {
        self.check("publish_invoice")?;
        Ok(draft_response(
            request_id,
            InvoiceStatus::Published,
            Some("https://wise.com/pay/r/abc"),
        ))
    }

    async fn create_quote(
        &self,
        _profile_id: i64,
        source_currency: &str,
        target_currency: &str,
        _source_amount: f64,
        _recipient_id: &str,
    ) -> Result<Quote, GatewayError> {
        self.check("create_quote")?;
        Ok(Quote {
            id: "q-1".to_string(),
            source_currency: source_currency.to_string(),
            target_currency: target_currency.to_string(),
            rate: Some(1.1),
        })
    }

    async fn create_transfer(
        &self,
        _recipient_id: &str,
        _quote_id: &str,
        _reference: &str,
        _customer_transaction_id: &str,
        _source_of_funds: Option<&str>,
    ) -> Result<Transfer, GatewayError> {
        self.check("create_transfer")?;
        Ok(Transfer {
            id: 42,
            status: "incoming_payment_waiting".to_string(),
        })
    }

    async fn fund_transfer(
        &self,
        _profile_id: i64,
        _transfer_id: i64,
    ) -> Result<FundOutcome, GatewayError> {
        self.check("fund_transfer")?;
        Ok(FundOutcome::Funded {
            status: "COMPLETED".to_string(),
        })
    }
}

fn router(gateway: StubGateway) -> axum::Router {
    HttpServer::new(OpsService::new(gateway)).router()
}

fn invoice_request() -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/invoices")
        .header("Content-Type", "application/json")
        .body(Body::from(
            r#"{
                "profile_type": "business",
                "balance_id": 12345,
                "due_days": 30,
                "line_items": [
                    {"name": "Consulting", "amount": 1000.0, "currency": "EUR", "quantity": 1}
                ]
            }"#,
        ))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_create_invoice_success_returns_201_confirmation() {
    let app = router(StubGateway::ok());

    let response = app.oneshot(invoice_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = json_body(response).await;
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("PUBLISHED"));
    assert!(message.contains("https://wise.com/pay/r/abc"));
}

#[tokio::test]
async fn test_publish_failure_maps_to_502_with_phase_and_ids() {
    let app = router(StubGateway::failing("publish_invoice"));

    let response = app.oneshot(invoice_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = json_body(response).await;
    assert_eq!(json["phase"], "publish");
    assert_eq!(json["request_id"], "pr-123");
    assert_eq!(json["invoice_number"], "INV-001");
    assert!(json["error"].as_str().unwrap().contains("publish phase"));
}

#[tokio::test]
async fn test_update_failure_maps_to_502_with_request_id() {
    let app = router(StubGateway::failing("update_invoice"));

    let response = app.oneshot(invoice_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = json_body(response).await;
    assert_eq!(json["phase"], "update");
    assert_eq!(json["request_id"], "pr-123");
    // The invoice number is not known to the update failure.
    assert!(json.get("invoice_number").is_none());
}

#[tokio::test]
async fn test_create_failure_maps_to_502_without_ids() {
    let app = router(StubGateway::failing("create_invoice_draft"));

    let response = app.oneshot(invoice_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = json_body(response).await;
    assert_eq!(json["phase"], "create");
    assert!(json.get("request_id").is_none());
}

#[tokio::test]
async fn test_profile_not_found_maps_to_404() {
    let app = router(StubGateway::ok());

    // The stub only has a business profile.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/balances?profile_type=personal")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = json_body(response).await;
    assert!(json["error"].as_str().unwrap().contains("personal"));
}

#[tokio::test]
async fn test_empty_balances_render_as_success() {
    let app = router(StubGateway::ok());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/balances?profile_type=business")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["message"], "No balances found for this profile.");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = router(StubGateway::ok());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
