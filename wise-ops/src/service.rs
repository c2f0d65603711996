//! Wise Operations Service
//!
//! Orchestrates Wise API calls through the gateway port. Contains no
//! transport logic - pure operation sequencing.

use chrono::{Duration, Utc};

use wise_types::{
    BalanceSummary, CreateInvoiceRequest, InvoiceCommand, InvoiceDraft, InvoiceResult, LineItem,
    OpsError, Payer, ProfileType, Recipient, SendMoneyRequest, TransferOutcome, WiseGateway,
};

/// Application service for the exposed operations.
///
/// Generic over `G: WiseGateway` - the adapter is injected at compile
/// time, so the real client and the test double share one code path.
/// Execution is request-scoped: nothing persists between calls.
pub struct OpsService<G: WiseGateway> {
    gateway: G,
}

impl<G: WiseGateway> OpsService<G> {
    /// Creates a new operations service with the given gateway.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Returns a reference to the underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Profile resolution
    // ─────────────────────────────────────────────────────────────────────────────

    /// Resolves the id of the first profile matching the requested type.
    ///
    /// Absence is a configuration error, not a transient fault; it is
    /// never retried.
    pub async fn resolve_profile(&self, profile_type: ProfileType) -> Result<i64, OpsError> {
        let profiles = self.gateway.list_profiles().await?;
        profiles
            .into_iter()
            .find(|p| p.profile_type == profile_type)
            .map(|p| p.id)
            .ok_or(OpsError::ProfileNotFound(profile_type))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Invoice orchestration
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates and publishes an invoice in three sequential phases:
    /// create an empty draft, update it with the full data, publish it.
    ///
    /// Each phase is attempted exactly once and depends on the prior
    /// phase's response, so nothing is parallelized. There is no
    /// compensating delete: a failure after the create phase leaves the
    /// draft server-side, and the error names its request id (and
    /// invoice number once known) so the caller can act on it through
    /// the Wise API directly. Wise only permits invoice creation on
    /// business profiles; that rejection surfaces from the create phase
    /// rather than being pre-validated here.
    pub async fn create_invoice(
        &self,
        req: CreateInvoiceRequest,
    ) -> Result<InvoiceResult, OpsError> {
        let profile_id = self.resolve_profile(req.profile_type).await?;

        let today = Utc::now().date_naive();
        let due_at = (today + Duration::days(i64::from(req.due_days))).to_string();
        let issue_date = req.issue_date.unwrap_or_else(|| today.to_string());

        // Phase 1: create the empty draft to obtain the request id and
        // the auto-generated invoice number.
        let draft: InvoiceDraft = self
            .gateway
            .create_invoice_draft(profile_id, req.balance_id, &due_at, &issue_date)
            .await
            .map_err(|source| OpsError::InvoiceCreateFailed { source })?
            .into();
        tracing::debug!(request_id = %draft.request_id, "invoice draft created");

        // Phase 2: update the draft with the full invoice data. The
        // caller's invoice number overrides the auto-generated one.
        let mut command = InvoiceCommand::invoice(req.balance_id, due_at, issue_date);
        command.invoice_number = req.invoice_number.or_else(|| draft.invoice_number.clone());
        command.message = req.message;
        command.payer = build_payer(req.payer_name, req.payer_email, req.payer_contact_id);
        command.line_items = req.line_items.into_iter().map(LineItem::from).collect();

        self.gateway
            .update_invoice(profile_id, &draft.request_id, &command)
            .await
            .map_err(|source| OpsError::InvoiceUpdateFailed {
                request_id: draft.request_id.clone(),
                source,
            })?;

        // Phase 3: publish. Only a PUBLISHED invoice is payable; a draft
        // left behind here is a partial failure, never a success mode.
        let invoice_number = command
            .invoice_number
            .clone()
            .unwrap_or_default();
        let published = self
            .gateway
            .publish_invoice(profile_id, &draft.request_id)
            .await
            .map_err(|source| OpsError::InvoicePublishFailed {
                request_id: draft.request_id.clone(),
                invoice_number: invoice_number.clone(),
                source,
            })?;
        tracing::info!(request_id = %published.id, status = %published.status, "invoice published");

        Ok(InvoiceResult {
            invoice_number: published
                .invoice_number()
                .map(String::from)
                .unwrap_or(invoice_number),
            request_id: published.id,
            status: published.status,
            pay_link: published.link,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Read paths
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists the currency/balance-id pairs available to a profile.
    /// An empty list is a valid result, not an error.
    pub async fn list_balances(
        &self,
        profile_type: ProfileType,
    ) -> Result<Vec<BalanceSummary>, OpsError> {
        let profile_id = self.resolve_profile(profile_type).await?;
        Ok(self.gateway.list_balance_options(profile_id).await?)
    }

    /// Lists recipient accounts, optionally filtered by currency.
    pub async fn list_recipients(
        &self,
        profile_type: ProfileType,
        currency: Option<String>,
    ) -> Result<Vec<Recipient>, OpsError> {
        let profile_id = self.resolve_profile(profile_type).await?;
        Ok(self
            .gateway
            .list_recipients(profile_id, currency.as_deref())
            .await?)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Send money
    // ─────────────────────────────────────────────────────────────────────────────

    /// Sends money to a recipient: quote, transfer, then fund from the
    /// profile's balance. The quote's target currency comes from the
    /// recipient's account record.
    pub async fn send_money(&self, req: SendMoneyRequest) -> Result<TransferOutcome, OpsError> {
        let profile_id = self.resolve_profile(req.profile_type).await?;

        let recipient = self
            .gateway
            .list_recipients(profile_id, None)
            .await?
            .into_iter()
            .find(|r| r.id == req.recipient_id)
            .ok_or_else(|| OpsError::RecipientNotFound(req.recipient_id.clone()))?;

        let quote = self
            .gateway
            .create_quote(
                profile_id,
                &req.source_currency,
                &recipient.currency,
                req.source_amount,
                &req.recipient_id,
            )
            .await?;

        let customer_transaction_id = uuid::Uuid::new_v4().to_string();
        let transfer = self
            .gateway
            .create_transfer(
                &req.recipient_id,
                &quote.id,
                &req.payment_reference,
                &customer_transaction_id,
                req.source_of_funds.as_deref(),
            )
            .await?;
        tracing::info!(transfer_id = transfer.id, "transfer created");

        let funding = self.gateway.fund_transfer(profile_id, transfer.id).await?;

        Ok(TransferOutcome {
            transfer_id: transfer.id,
            reference: req.payment_reference,
            funding,
        })
    }
}

fn build_payer(
    name: Option<String>,
    email: Option<String>,
    contact_id: Option<String>,
) -> Option<Payer> {
    if name.is_none() && email.is_none() && contact_id.is_none() {
        return None;
    }
    Some(Payer {
        contact_id,
        name,
        email,
    })
}
