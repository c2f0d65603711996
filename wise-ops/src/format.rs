//! Confirmation-string rendering.
//!
//! Pure functions mapping structured results to the fixed templates
//! returned to the caller. No state, no failure modes.

use wise_types::{BalanceSummary, FundOutcome, InvoiceResult, TransferOutcome};

/// Renders the terminal confirmation of a published invoice.
pub fn invoice_confirmation(result: &InvoiceResult) -> String {
    format!(
        "Invoice created successfully! Request ID: {}, Invoice Number: {}, Status: {}, Pay Link: {}",
        result.request_id,
        result.invoice_number,
        result.status,
        result.pay_link.as_deref().unwrap_or("N/A"),
    )
}

/// Renders the balances available for invoice creation.
pub fn balance_list(balances: &[BalanceSummary]) -> String {
    if balances.is_empty() {
        return "No balances found for this profile.".to_string();
    }
    let mut out = String::from("Available balances for invoice creation:\n\n");
    for balance in balances {
        out.push_str(&format!(
            "- Currency: {}, Balance ID: {}\n",
            balance.currency, balance.balance_id
        ));
    }
    out
}

/// Renders the outcome of a send-money call.
pub fn transfer_confirmation(outcome: &TransferOutcome) -> String {
    match &outcome.funding {
        FundOutcome::Funded { status } => format!(
            "Money sent! Transfer ID: {}, Reference: {}, Funding status: {}",
            outcome.transfer_id, outcome.reference, status
        ),
        FundOutcome::ScaRequired { one_time_token } => format!(
            "Transfer {} created but funding requires strong customer authentication (one-time token: {})",
            outcome.transfer_id, one_time_token
        ),
    }
}
