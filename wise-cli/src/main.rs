//! Wise CLI
//!
//! Command-line interface driving the bridge operations directly
//! against the Wise API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use wise_gateway::WiseClient;
use wise_ops::{OpsService, format};
use wise_types::{CreateInvoiceRequest, LineItemInput, OpsError, ProfileType, SendMoneyRequest};

#[derive(Parser)]
#[command(name = "wise")]
#[command(author, version, about = "Wise bridge CLI", long_about = None)]
struct Cli {
    /// Wise API token
    #[arg(long, env = "WISE_API_TOKEN", hide_env_values = true)]
    api_token: String,

    /// Use the sandbox environment (true/false)
    #[arg(
        long,
        env = "WISE_IS_SANDBOX",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    sandbox: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipient accounts
    Recipients {
        /// Profile type (personal or business)
        #[arg(long, default_value = "personal")]
        profile_type: ProfileType,
        /// Filter by currency code
        #[arg(long)]
        currency: Option<String>,
    },
    /// List balances available for invoice creation
    Balances {
        /// Profile type (personal or business)
        #[arg(long, default_value = "business")]
        profile_type: ProfileType,
    },
    /// Send money to a recipient
    Send {
        /// Profile type (personal or business)
        #[arg(long, default_value = "personal")]
        profile_type: ProfileType,
        #[arg(long)]
        source_currency: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        recipient: String,
        /// Reference shown to the recipient
        #[arg(long, default_value = "money")]
        reference: String,
        /// Source of the funds (e.g. "salary")
        #[arg(long)]
        source_of_funds: Option<String>,
    },
    /// Create and publish an invoice
    Invoice {
        /// Profile type (Wise only accepts business here)
        #[arg(long, default_value = "business")]
        profile_type: ProfileType,
        #[arg(long)]
        balance_id: i64,
        /// Days from today until the invoice is due
        #[arg(long)]
        due_days: u32,
        /// Line items as a JSON array, e.g.
        /// '[{"name":"Consulting","amount":1000.0,"currency":"EUR","quantity":1}]'
        #[arg(long)]
        items: String,
        #[arg(long)]
        payer_name: Option<String>,
        #[arg(long)]
        payer_email: Option<String>,
        #[arg(long)]
        payer_contact_id: Option<String>,
        /// Overrides the auto-generated invoice number
        #[arg(long)]
        invoice_number: Option<String>,
        #[arg(long)]
        message: Option<String>,
        /// Issue date in YYYY-MM-DD format (defaults to today)
        #[arg(long)]
        issue_date: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let gateway = WiseClient::new(cli.api_token, cli.sandbox);
    let service = OpsService::new(gateway);

    match cli.command {
        Commands::Recipients {
            profile_type,
            currency,
        } => {
            let recipients = service.list_recipients(profile_type, currency).await?;
            println!("{}", serde_json::to_string_pretty(&recipients)?);
        }
        Commands::Balances { profile_type } => {
            let balances = service.list_balances(profile_type).await?;
            println!("{}", format::balance_list(&balances));
        }
        Commands::Send {
            profile_type,
            source_currency,
            amount,
            recipient,
            reference,
            source_of_funds,
        } => {
            let outcome = service
                .send_money(SendMoneyRequest {
                    profile_type,
                    source_currency,
                    source_amount: amount,
                    recipient_id: recipient,
                    payment_reference: reference,
                    source_of_funds,
                })
                .await?;
            println!("{}", format::transfer_confirmation(&outcome));
        }
        Commands::Invoice {
            profile_type,
            balance_id,
            due_days,
            items,
            payer_name,
            payer_email,
            payer_contact_id,
            invoice_number,
            message,
            issue_date,
        } => {
            let line_items = parse_line_items(&items)?;
            let result = service
                .create_invoice(CreateInvoiceRequest {
                    profile_type,
                    balance_id,
                    due_days,
                    line_items,
                    payer_name,
                    payer_email,
                    payer_contact_id,
                    invoice_number,
                    message,
                    issue_date,
                })
                .await?;
            println!("{}", format::invoice_confirmation(&result));
        }
    }

    Ok(())
}

/// Parses the `--items` JSON array. A malformed value is a caller
/// error, reported as such rather than as a gateway failure.
fn parse_line_items(items: &str) -> Result<Vec<LineItemInput>, OpsError> {
    serde_json::from_str(items).map_err(|e| OpsError::BadRequest(format!("invalid --items JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_items_valid_json() {
        let items = parse_line_items(
            r#"[{"name":"Consulting","amount":1000.0,"currency":"EUR","quantity":1}]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Consulting");
    }

    #[test]
    fn test_parse_line_items_malformed_json_is_bad_request() {
        let err = parse_line_items("not json").unwrap_err();
        assert!(matches!(err, OpsError::BadRequest(_)));
        assert!(err.to_string().contains("invalid --items JSON"));
    }
}
