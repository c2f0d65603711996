//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{FundOutcome, LineItem, LineItemTax, Money, ProfileType, TaxBehaviour};

// ─────────────────────────────────────────────────────────────────────────────
// Invoice DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// One line item as the caller supplies it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LineItemInput {
    /// Name/description of the item
    #[schema(example = "Consulting")]
    pub name: String,
    /// Unit price amount in the balance's currency
    #[schema(example = 1000.0)]
    pub amount: f64,
    /// ISO currency code
    #[schema(example = "EUR")]
    pub currency: String,
    /// Quantity of the item
    #[schema(example = 1)]
    pub quantity: u32,
    /// Optional tax name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_name: Option<String>,
    /// Optional tax percentage (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_percentage: Option<f64>,
    /// Optional tax behaviour (INCLUDED or EXCLUDED, default INCLUDED)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_behaviour: Option<TaxBehaviour>,
}

impl From<LineItemInput> for LineItem {
    fn from(input: LineItemInput) -> Self {
        let tax = match (input.tax_name, input.tax_percentage) {
            (Some(name), Some(percentage)) => Some(LineItemTax {
                name,
                percentage,
                behaviour: input.tax_behaviour.unwrap_or(TaxBehaviour::Included),
            }),
            _ => None,
        };
        LineItem {
            name: input.name,
            unit_price: Money::new(input.amount, input.currency),
            quantity: input.quantity,
            tax,
        }
    }
}

/// Request to create and publish an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateInvoiceRequest {
    pub profile_type: ProfileType,
    /// Balance to collect into (see the balances operation)
    #[schema(example = 12345)]
    pub balance_id: i64,
    /// Days from today until the invoice is due
    #[schema(example = 30)]
    pub due_days: u32,
    pub line_items: Vec<LineItemInput>,
    /// Optional name of the payer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_name: Option<String>,
    /// Optional email of the payer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,
    /// Optional Wise contact ID of the payer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_contact_id: Option<String>,
    /// Overrides the auto-generated invoice number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    /// Optional message shown on the invoice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Issue date in YYYY-MM-DD format (defaults to today)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Transfer DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to send money to a recipient.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SendMoneyRequest {
    pub profile_type: ProfileType,
    /// ISO code of the currency to pay with
    #[schema(example = "EUR")]
    pub source_currency: String,
    /// Amount in the source currency
    #[schema(example = 100.0)]
    pub source_amount: f64,
    /// Recipient account ID
    pub recipient_id: String,
    /// Reference shown to the recipient
    #[serde(default = "default_payment_reference")]
    pub payment_reference: String,
    /// Source of the funds (e.g. "salary", "savings")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_funds: Option<String>,
}

fn default_payment_reference() -> String {
    "money".to_string()
}

/// Result of the send-money operation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransferOutcome {
    pub transfer_id: i64,
    pub reference: String,
    pub funding: FundOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_input_conversion_with_tax() {
        let input = LineItemInput {
            name: "Consulting".to_string(),
            amount: 1000.0,
            currency: "EUR".to_string(),
            quantity: 2,
            tax_name: Some("VAT".to_string()),
            tax_percentage: Some(19.0),
            tax_behaviour: None,
        };

        let item = LineItem::from(input);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit_price.value, 1000.0);
        let tax = item.tax.unwrap();
        assert_eq!(tax.percentage, 19.0);
        assert_eq!(tax.behaviour, TaxBehaviour::Included);
    }

    #[test]
    fn test_line_item_input_conversion_without_tax() {
        let input = LineItemInput {
            name: "Consulting".to_string(),
            amount: 1000.0,
            currency: "EUR".to_string(),
            quantity: 1,
            tax_name: Some("VAT".to_string()),
            tax_percentage: None,
            tax_behaviour: None,
        };

        // A tax name without a percentage is not enough for a tax entry.
        assert!(LineItem::from(input).tax.is_none());
    }

    #[test]
    fn test_send_money_default_reference() {
        let req: SendMoneyRequest = serde_json::from_str(
            r#"{
                "profile_type": "business",
                "source_currency": "EUR",
                "source_amount": 50.0,
                "recipient_id": "700614969"
            }"#,
        )
        .unwrap();
        assert_eq!(req.payment_reference, "money");
    }
}
