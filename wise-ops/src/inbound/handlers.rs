//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use wise_types::{CreateInvoiceRequest, OpsError, ProfileType, SendMoneyRequest, WiseGateway};

use crate::OpsService;
use crate::format;

/// Application state shared across handlers.
pub struct AppState<G: WiseGateway> {
    pub service: OpsService<G>,
}

/// Wrapper to implement IntoResponse for OpsError (orphan rule workaround).
pub struct ApiError(pub OpsError);

impl From<OpsError> for ApiError {
    fn from(err: OpsError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        let (status, extra) = match &self.0 {
            OpsError::ProfileNotFound(_) | OpsError::RecipientNotFound(_) => {
                (StatusCode::NOT_FOUND, serde_json::json!({}))
            }
            OpsError::BadRequest(_) => (StatusCode::BAD_REQUEST, serde_json::json!({})),
            OpsError::InvoiceCreateFailed { .. } => (
                StatusCode::BAD_GATEWAY,
                serde_json::json!({ "phase": "create" }),
            ),
            OpsError::InvoiceUpdateFailed { request_id, .. } => (
                StatusCode::BAD_GATEWAY,
                serde_json::json!({ "phase": "update", "request_id": request_id }),
            ),
            OpsError::InvoicePublishFailed {
                request_id,
                invoice_number,
                ..
            } => (
                StatusCode::BAD_GATEWAY,
                serde_json::json!({
                    "phase": "publish",
                    "request_id": request_id,
                    "invoice_number": invoice_number,
                }),
            ),
            OpsError::Gateway(_) => (StatusCode::BAD_GATEWAY, serde_json::json!({})),
        };

        let mut body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });
        if let (Some(body), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
            body.extend(extra.clone());
        }

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

#[derive(Debug, Deserialize)]
pub struct RecipientsQuery {
    pub profile_type: ProfileType,
    pub currency: Option<String>,
}

/// List recipient accounts for a profile.
#[tracing::instrument(skip(state), fields(profile_type = %query.profile_type))]
pub async fn list_recipients<G: WiseGateway>(
    State(state): State<Arc<AppState<G>>>,
    Query(query): Query<RecipientsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let recipients = state
        .service
        .list_recipients(query.profile_type, query.currency)
        .await?;
    Ok(Json(recipients))
}

#[derive(Debug, Deserialize)]
pub struct BalancesQuery {
    pub profile_type: ProfileType,
}

/// List currency/balance-id pairs available for invoice creation.
#[tracing::instrument(skip(state), fields(profile_type = %query.profile_type))]
pub async fn get_balance_currencies<G: WiseGateway>(
    State(state): State<Arc<AppState<G>>>,
    Query(query): Query<BalancesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let balances = state.service.list_balances(query.profile_type).await?;
    Ok(Json(
        serde_json::json!({ "message": format::balance_list(&balances) }),
    ))
}

/// Send money to a recipient.
#[tracing::instrument(skip(state, req), fields(recipient_id = %req.recipient_id))]
pub async fn send_money<G: WiseGateway>(
    State(state): State<Arc<AppState<G>>>,
    Json(req): Json<SendMoneyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = state.service.send_money(req).await?;
    Ok(Json(
        serde_json::json!({ "message": format::transfer_confirmation(&outcome) }),
    ))
}

/// Create and publish an invoice.
#[tracing::instrument(skip(state, req), fields(balance_id = req.balance_id))]
pub async fn create_invoice<G: WiseGateway>(
    State(state): State<Arc<AppState<G>>>,
    Json(req): Json<CreateInvoiceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.service.create_invoice(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": format::invoice_confirmation(&result) })),
    ))
}
