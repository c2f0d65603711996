//! Error types for the Wise bridge.

use crate::domain::ProfileType;

/// Errors raised by the gateway adapter (one per network call).
///
/// Kept IO-free so the port trait can live in this crate; the reqwest
/// adapter converts its transport errors into `Transport`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("Wise API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Operation-boundary errors (map cleanly to HTTP status codes).
///
/// The invoice phase variants carry the identifiers of the orphaned
/// draft: there is no compensating delete, the draft stays server-side
/// and can be inspected or removed through the Wise API directly.
#[derive(Debug, thiserror::Error)]
pub enum OpsError {
    #[error("No {0} profile found for the authenticated account")]
    ProfileNotFound(ProfileType),

    #[error("Recipient not found: {0}")]
    RecipientNotFound(String),

    #[error("Invoice create phase failed: {source}")]
    InvoiceCreateFailed {
        #[source]
        source: GatewayError,
    },

    #[error("Invoice update phase failed, draft {request_id} left incomplete: {source}")]
    InvoiceUpdateFailed {
        request_id: String,
        #[source]
        source: GatewayError,
    },

    #[error(
        "Invoice publish phase failed, draft {request_id} (invoice {invoice_number}) left unpublished: {source}"
    )]
    InvoicePublishFailed {
        request_id: String,
        invoice_number: String,
        #[source]
        source: GatewayError,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_failure_names_the_draft() {
        let err = OpsError::InvoicePublishFailed {
            request_id: "pr-1".to_string(),
            invoice_number: "INV-001".to_string(),
            source: GatewayError::Api {
                status: 500,
                body: "boom".to_string(),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("pr-1"));
        assert!(msg.contains("INV-001"));
    }

    #[test]
    fn test_profile_not_found_message() {
        let err = OpsError::ProfileNotFound(ProfileType::Business);
        assert_eq!(
            err.to_string(),
            "No business profile found for the authenticated account"
        );
    }
}
