//! Recipient accounts money can be sent to.

use serde::{Deserialize, Serialize};

/// A recipient account belonging to a profile, flattened from the
/// `GET /v2/accounts` response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Recipient {
    pub id: String,
    pub profile_id: String,
    pub full_name: String,
    pub currency: String,
    pub country: String,
    pub account_summary: String,
}
