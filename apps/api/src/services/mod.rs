//! Supporting services for the Ledger API
//!
//! - Health checks for external dependencies

pub mod health;

pub use health::HealthService;
