//! # Wise Types
//!
//! Domain types and port traits for the Wise bridge service.
//! This crate has ZERO external IO dependencies - only data structures,
//! wire-format definitions, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Profile, LineItem, InvoiceResult, ...)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Gateway and operation error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    BalanceSummary, FundOutcome, InvoiceCommand, InvoiceDetails, InvoiceDraft, InvoiceResult,
    InvoiceStatus, LineItem, LineItemTax, Money, Payer, PaymentRequest, Profile, ProfileType,
    Quote, Recipient, TaxBehaviour, Transfer,
};
pub use dto::*;
pub use error::{GatewayError, OpsError};
pub use ports::WiseGateway;
