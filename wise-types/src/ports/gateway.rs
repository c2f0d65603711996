//! Wise gateway port trait.
//!
//! This is the primary port in our hexagonal architecture: an
//! authenticated request executor against the Wise API. The reqwest
//! adapter implements it for real; tests implement it in memory.

use crate::domain::{
    BalanceSummary, FundOutcome, InvoiceCommand, PaymentRequest, Profile, Quote, Recipient,
    Transfer,
};
use crate::error::GatewayError;

/// The gateway port for all Wise API calls.
///
/// Every method is exactly one authenticated HTTPS request. Timeouts
/// and cancellation are the underlying transport's concern; callers
/// see any non-2xx response uniformly as `GatewayError::Api`.
#[async_trait::async_trait]
pub trait WiseGateway: Send + Sync + 'static {
    // ─────────────────────────────────────────────────────────────────────────────
    // Profiles & recipients
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists all profiles associated with the API token.
    async fn list_profiles(&self) -> Result<Vec<Profile>, GatewayError>;

    /// Lists recipient accounts for a profile, optionally filtered by currency.
    async fn list_recipients(
        &self,
        profile_id: i64,
        currency: Option<&str>,
    ) -> Result<Vec<Recipient>, GatewayError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Invoices (acquiring payment requests)
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists the currency/balance-id pairs available for invoice creation.
    async fn list_balance_options(
        &self,
        profile_id: i64,
    ) -> Result<Vec<BalanceSummary>, GatewayError>;

    /// Creates an empty invoice shell to obtain the server-assigned id
    /// and auto-generated invoice number.
    async fn create_invoice_draft(
        &self,
        profile_id: i64,
        balance_id: i64,
        due_at: &str,
        issue_date: &str,
    ) -> Result<PaymentRequest, GatewayError>;

    /// Replaces a draft's contents with the full invoice data.
    async fn update_invoice(
        &self,
        profile_id: i64,
        request_id: &str,
        command: &InvoiceCommand,
    ) -> Result<PaymentRequest, GatewayError>;

    /// Transitions a draft to PUBLISHED, making it payable.
    async fn publish_invoice(
        &self,
        profile_id: i64,
        request_id: &str,
    ) -> Result<PaymentRequest, GatewayError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Transfers
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a quote for a currency exchange towards a recipient.
    async fn create_quote(
        &self,
        profile_id: i64,
        source_currency: &str,
        target_currency: &str,
        source_amount: f64,
        recipient_id: &str,
    ) -> Result<Quote, GatewayError>;

    /// Creates a transfer from a previously created quote.
    async fn create_transfer(
        &self,
        recipient_id: &str,
        quote_id: &str,
        reference: &str,
        customer_transaction_id: &str,
        source_of_funds: Option<&str>,
    ) -> Result<Transfer, GatewayError>;

    /// Funds a transfer from the profile's balance. May surface an SCA
    /// challenge instead of a payment result.
    async fn fund_transfer(
        &self,
        profile_id: i64,
        transfer_id: i64,
    ) -> Result<FundOutcome, GatewayError>;
}
