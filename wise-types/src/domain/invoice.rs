//! Invoice payment-request types for the Wise acquiring API.
//!
//! Wise owns all currency and tax arithmetic; amounts are carried as the
//! decimal values the wire format uses and are never computed with locally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount as Wise represents it on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Money {
    pub value: f64,
    pub currency: String,
}

impl Money {
    pub fn new(value: f64, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }
}

/// How a tax applies to a line item's unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxBehaviour {
    Included,
    Excluded,
}

/// Tax attached to a single line item. Percentage is 0-100; Wise
/// rejects out-of-range values, the bridge does not pre-validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LineItemTax {
    pub name: String,
    pub percentage: f64,
    pub behaviour: TaxBehaviour,
}

/// One billable entry on an invoice. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<LineItemTax>,
}

/// The payer an invoice is addressed to. Only present fields are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Body of the acquiring payment-request create/update calls
/// (`POST`/`PUT /v2/profiles/{id}/acquiring/payment-requests`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCommand {
    pub request_type: String,
    pub selected_payment_methods: Vec<String>,
    pub balance_id: i64,
    pub due_at: String,
    pub issue_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<Payer>,
    pub line_items: Vec<LineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl InvoiceCommand {
    /// Command for the create phase: an empty invoice shell, used only
    /// to obtain the server-assigned id and auto-generated number.
    pub fn draft(balance_id: i64, due_at: impl Into<String>, issue_date: impl Into<String>) -> Self {
        Self {
            request_type: "INVOICE".to_string(),
            selected_payment_methods: Vec::new(),
            balance_id,
            due_at: due_at.into(),
            issue_date: issue_date.into(),
            invoice_number: None,
            payer: None,
            line_items: Vec::new(),
            message: None,
        }
    }

    /// Command for the update phase, with the default payment methods
    /// Wise expects on a full invoice.
    pub fn invoice(
        balance_id: i64,
        due_at: impl Into<String>,
        issue_date: impl Into<String>,
    ) -> Self {
        Self {
            selected_payment_methods: vec!["ACCOUNT_DETAILS".to_string()],
            ..Self::draft(balance_id, due_at, issue_date)
        }
    }
}

/// Lifecycle state of a payment request. Only PUBLISHED invoices are
/// payable by the payer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Draft,
    Published,
    Completed,
    Expired,
    Invalidated,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvoiceStatus::Draft => "DRAFT",
            InvoiceStatus::Published => "PUBLISHED",
            InvoiceStatus::Completed => "COMPLETED",
            InvoiceStatus::Expired => "EXPIRED",
            InvoiceStatus::Invalidated => "INVALIDATED",
        };
        write!(f, "{}", s)
    }
}

/// Invoice details embedded in a payment-request response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetails {
    #[serde(default)]
    pub number: Option<String>,
}

/// Payment-request response body from the acquiring endpoints. Only
/// the fields the bridge consumes are modelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub id: String,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub invoice: Option<InvoiceDetails>,
}

impl PaymentRequest {
    /// Wise's auto-generated invoice number, when the response carries one.
    pub fn invoice_number(&self) -> Option<&str> {
        self.invoice.as_ref().and_then(|i| i.number.as_deref())
    }
}

/// The server-assigned shell returned by the create phase. Lives only
/// inside one orchestration run; never cached across calls.
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    pub request_id: String,
    pub invoice_number: Option<String>,
    pub status: InvoiceStatus,
}

impl From<PaymentRequest> for InvoiceDraft {
    fn from(resp: PaymentRequest) -> Self {
        let invoice_number = resp.invoice_number().map(String::from);
        Self {
            request_id: resp.id,
            invoice_number,
            status: resp.status,
        }
    }
}

/// Terminal output of the invoice orchestration.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InvoiceResult {
    pub request_id: String,
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub pay_link: Option<String>,
}

/// One currency-denominated balance usable for invoice creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BalanceSummary {
    pub currency: String,
    pub balance_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consulting_item() -> LineItem {
        LineItem {
            name: "Consulting".to_string(),
            unit_price: Money::new(1000.0, "EUR"),
            quantity: 1,
            tax: None,
        }
    }

    #[test]
    fn test_invoice_command_wire_shape() {
        let mut command = InvoiceCommand::invoice(12345, "2025-02-01", "2025-01-02");
        command.line_items.push(consulting_item());
        command.invoice_number = Some("INV-007".to_string());

        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["requestType"], "INVOICE");
        assert_eq!(json["selectedPaymentMethods"][0], "ACCOUNT_DETAILS");
        assert_eq!(json["balanceId"], 12345);
        assert_eq!(json["dueAt"], "2025-02-01");
        assert_eq!(json["issueDate"], "2025-01-02");
        assert_eq!(json["invoiceNumber"], "INV-007");
        assert_eq!(json["lineItems"][0]["unitPrice"]["value"], 1000.0);
        assert_eq!(json["lineItems"][0]["unitPrice"]["currency"], "EUR");
        // Absent optionals must not appear on the wire.
        assert!(json.get("payer").is_none());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_draft_command_has_no_payment_methods() {
        let command = InvoiceCommand::draft(1, "2025-02-01", "2025-01-02");
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["selectedPaymentMethods"].as_array().unwrap().len(), 0);
        assert_eq!(json["lineItems"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_tax_behaviour_wire_values() {
        assert_eq!(
            serde_json::to_string(&TaxBehaviour::Included).unwrap(),
            "\"INCLUDED\""
        );
        assert_eq!(
            serde_json::to_string(&TaxBehaviour::Excluded).unwrap(),
            "\"EXCLUDED\""
        );
    }

    #[test]
    fn test_payment_request_deserialization() {
        let resp: PaymentRequest = serde_json::from_str(
            r#"{
                "id": "pr-123",
                "status": "DRAFT",
                "invoice": {"number": "INV-001"}
            }"#,
        )
        .unwrap();
        assert_eq!(resp.status, InvoiceStatus::Draft);
        assert_eq!(resp.invoice_number(), Some("INV-001"));
        assert!(resp.link.is_none());

        let draft = InvoiceDraft::from(resp);
        assert_eq!(draft.request_id, "pr-123");
        assert_eq!(draft.invoice_number.as_deref(), Some("INV-001"));
    }

    #[test]
    fn test_invoice_status_display() {
        assert_eq!(InvoiceStatus::Published.to_string(), "PUBLISHED");
    }
}
