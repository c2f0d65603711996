//! Domain models for the Wise bridge service.

pub mod invoice;
pub mod profile;
pub mod recipient;
pub mod transfer;

pub use invoice::{
    BalanceSummary, InvoiceCommand, InvoiceDetails, InvoiceDraft, InvoiceResult, InvoiceStatus,
    LineItem, LineItemTax, Money, Payer, PaymentRequest, TaxBehaviour,
};
pub use profile::{Profile, ProfileType};
pub use recipient::Recipient;
pub use transfer::{FundOutcome, Quote, Transfer};
