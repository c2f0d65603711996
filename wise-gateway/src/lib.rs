//! # Wise Gateway
//!
//! Reqwest-based adapter for the [`WiseGateway`] port: every method is
//! one bearer-authenticated HTTPS request against the Wise API, with a
//! uniform error for any non-2xx response.

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use wise_types::{
    BalanceSummary, FundOutcome, GatewayError, InvoiceCommand, PaymentRequest, Profile, Quote,
    Recipient, Transfer, WiseGateway,
};

/// Wise API client.
pub struct WiseClient {
    base_url: String,
    api_token: String,
    http: Client,
}

impl WiseClient {
    /// Sandbox environment base endpoint.
    pub const SANDBOX_URL: &'static str = "https://api.sandbox.transferwise.tech";
    /// Production environment base endpoint.
    pub const PRODUCTION_URL: &'static str = "https://api.transferwise.com";

    /// Creates a client against the sandbox or production environment.
    pub fn new(api_token: impl Into<String>, sandbox: bool) -> Self {
        let base_url = if sandbox {
            Self::SANDBOX_URL
        } else {
            Self::PRODUCTION_URL
        };
        Self::with_base_url(api_token, base_url)
    }

    /// Creates a client against an explicit base endpoint.
    pub fn with_base_url(api_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
            http: Client::new(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GatewayError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_token)
            .query(query)
            .send()
            .await
            .map_err(transport)?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_token)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        self.handle_response(resp).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let resp = self
            .http
            .put(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_token)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await.map_err(transport)?;
            serde_json::from_str(&body).map_err(|e| transport_msg(format!("decode error: {}", e)))
        } else {
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), %body, "Wise API call failed");
            Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

fn transport_msg(msg: String) -> GatewayError {
    GatewayError::Transport(msg)
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire shapes private to the adapter
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RecipientsPage {
    #[serde(default)]
    content: Vec<RecipientEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipientEntry {
    id: i64,
    #[serde(default)]
    profile: Option<i64>,
    #[serde(default)]
    name: Option<RecipientName>,
    #[serde(default)]
    currency: String,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    account_summary: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipientName {
    #[serde(default)]
    full_name: Option<String>,
}

impl From<RecipientEntry> for Recipient {
    fn from(entry: RecipientEntry) -> Self {
        Recipient {
            id: entry.id.to_string(),
            profile_id: entry.profile.map(|p| p.to_string()).unwrap_or_default(),
            full_name: entry
                .name
                .and_then(|n| n.full_name)
                .unwrap_or_else(|| "Unknown".to_string()),
            currency: entry.currency,
            country: entry.country.unwrap_or_default(),
            account_summary: entry.account_summary.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
struct BalanceOptionsPage {
    #[serde(default)]
    balances: Vec<BalanceOption>,
}

#[derive(Deserialize)]
struct BalanceOption {
    id: i64,
    currency: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentResult {
    #[serde(default)]
    status: String,
}

#[async_trait::async_trait]
impl WiseGateway for WiseClient {
    async fn list_profiles(&self) -> Result<Vec<Profile>, GatewayError> {
        self.get("/v2/profiles", &[]).await
    }

    async fn list_recipients(
        &self,
        profile_id: i64,
        currency: Option<&str>,
    ) -> Result<Vec<Recipient>, GatewayError> {
        let profile = profile_id.to_string();
        let mut query: Vec<(&str, &str)> = vec![("profile", profile.as_str())];
        if let Some(currency) = currency {
            query.push(("currency", currency));
        }
        let page: RecipientsPage = self.get("/v2/accounts", &query).await?;
        Ok(page.content.into_iter().map(Recipient::from).collect())
    }

    async fn list_balance_options(
        &self,
        profile_id: i64,
    ) -> Result<Vec<BalanceSummary>, GatewayError> {
        let path = format!(
            "/v1/profiles/{}/acquiring/requesting-configuration/currency-options",
            profile_id
        );
        let page: BalanceOptionsPage = self.get(&path, &[]).await?;
        Ok(page
            .balances
            .into_iter()
            .map(|b| BalanceSummary {
                currency: b.currency,
                balance_id: b.id,
            })
            .collect())
    }

    async fn create_invoice_draft(
        &self,
        profile_id: i64,
        balance_id: i64,
        due_at: &str,
        issue_date: &str,
    ) -> Result<PaymentRequest, GatewayError> {
        let command = InvoiceCommand::draft(balance_id, due_at, issue_date);
        let path = format!("/v2/profiles/{}/acquiring/payment-requests", profile_id);
        self.post(&path, &command).await
    }

    async fn update_invoice(
        &self,
        profile_id: i64,
        request_id: &str,
        command: &InvoiceCommand,
    ) -> Result<PaymentRequest, GatewayError> {
        let path = format!(
            "/v2/profiles/{}/acquiring/payment-requests/{}",
            profile_id, request_id
        );
        self.put(&path, command).await
    }

    async fn publish_invoice(
        &self,
        profile_id: i64,
        request_id: &str,
    ) -> Result<PaymentRequest, GatewayError> {
        let path = format!(
            "/v2/profiles/{}/acquiring/payment-requests/{}/status",
            profile_id, request_id
        );
        self.put(&path, &serde_json::json!({ "status": "PUBLISHED" }))
            .await
    }

    async fn create_quote(
        &self,
        profile_id: i64,
        source_currency: &str,
        target_currency: &str,
        source_amount: f64,
        recipient_id: &str,
    ) -> Result<Quote, GatewayError> {
        let path = format!("/v3/profiles/{}/quotes", profile_id);
        let payload = serde_json::json!({
            "sourceCurrency": source_currency,
            "targetCurrency": target_currency,
            "sourceAmount": source_amount,
            "targetAccount": recipient_id,
        });
        self.post(&path, &payload).await
    }

    async fn create_transfer(
        &self,
        recipient_id: &str,
        quote_id: &str,
        reference: &str,
        customer_transaction_id: &str,
        source_of_funds: Option<&str>,
    ) -> Result<Transfer, GatewayError> {
        let mut details = serde_json::json!({ "reference": reference });
        if let Some(source_of_funds) = source_of_funds {
            details["sourceOfFunds"] = serde_json::Value::from(source_of_funds);
        }
        let payload = serde_json::json!({
            "targetAccount": recipient_id,
            "quoteUuid": quote_id,
            "details": details,
            "customerTransactionId": customer_transaction_id,
        });
        self.post("/v1/transfers", &payload).await
    }

    async fn fund_transfer(
        &self,
        profile_id: i64,
        transfer_id: i64,
    ) -> Result<FundOutcome, GatewayError> {
        let path = format!(
            "/v3/profiles/{}/transfers/{}/payments",
            profile_id, transfer_id
        );
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_token)
            .json(&serde_json::json!({ "type": "BALANCE" }))
            .send()
            .await
            .map_err(transport)?;

        // A 403 with a rejected 2FA approval carries the one-time token
        // for the SCA flow in the response headers.
        if resp.status().as_u16() == 403 {
            let rejected = resp
                .headers()
                .get("x-2fa-approval-result")
                .and_then(|v| v.to_str().ok())
                == Some("REJECTED");
            if rejected {
                let one_time_token = resp
                    .headers()
                    .get("x-2fa-approval")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                return Ok(FundOutcome::ScaRequired { one_time_token });
            }
        }

        let result: PaymentResult = self.handle_response(resp).await?;
        Ok(FundOutcome::Funded {
            status: result.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandbox_base_url() {
        let client = WiseClient::new("token", true);
        assert_eq!(client.base_url, WiseClient::SANDBOX_URL);
    }

    #[test]
    fn test_production_base_url() {
        let client = WiseClient::new("token", false);
        assert_eq!(client.base_url, WiseClient::PRODUCTION_URL);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = WiseClient::with_base_url("token", "http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_recipient_entry_mapping() {
        let entry: RecipientEntry = serde_json::from_str(
            r#"{
                "id": 700614969,
                "profile": 12,
                "name": {"fullName": "Ada Lovelace"},
                "currency": "EUR",
                "country": "DE",
                "accountSummary": "(30x) 1234"
            }"#,
        )
        .unwrap();
        let recipient = Recipient::from(entry);
        assert_eq!(recipient.id, "700614969");
        assert_eq!(recipient.full_name, "Ada Lovelace");
        assert_eq!(recipient.profile_id, "12");
    }

    #[test]
    fn test_recipient_entry_missing_name_defaults() {
        let entry: RecipientEntry =
            serde_json::from_str(r#"{"id": 1, "currency": "USD"}"#).unwrap();
        let recipient = Recipient::from(entry);
        assert_eq!(recipient.full_name, "Unknown");
        assert_eq!(recipient.country, "");
    }

    #[test]
    fn test_balance_options_page_empty() {
        let page: BalanceOptionsPage = serde_json::from_str(r#"{}"#).unwrap();
        assert!(page.balances.is_empty());
    }
}
