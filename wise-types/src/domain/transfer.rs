//! Quote, transfer and funding types for the send-money path.

use serde::{Deserialize, Serialize};

/// A currency-exchange quote (`POST /v3/profiles/{id}/quotes`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub source_currency: String,
    pub target_currency: String,
    #[serde(default)]
    pub rate: Option<f64>,
}

/// A created transfer (`POST /v1/transfers`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: i64,
    pub status: String,
}

/// Outcome of funding a transfer from a balance.
///
/// Wise may answer the funding call with a strong customer
/// authentication challenge instead of a payment result; that is a
/// valid outcome for the caller to act on, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "outcome")]
pub enum FundOutcome {
    Funded {
        status: String,
    },
    ScaRequired {
        one_time_token: String,
    },
}
