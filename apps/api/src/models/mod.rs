//! Database models and types for Ledger
//!
//! This module contains SQLx models for:
//! - Owners
//! - Accounts and their types

pub mod account;
pub mod owner;

pub use account::{Account, AccountType};
pub use owner::{NewOwner, Owner};
