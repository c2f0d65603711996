//! # Wise Ops
//!
//! Application service layer and HTTP adapter for the Wise bridge.
//!
//! ## Architecture
//!
//! - `service/` - Application service (profile resolution, invoice
//!   orchestration, balance lookup, transfers)
//! - `format/` - Pure confirmation-string rendering
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `G: WiseGateway`, allowing the real
//! reqwest adapter or an in-memory test double to be injected.

pub mod format;
pub mod inbound;
pub mod service;


pub use service::OpsService;
