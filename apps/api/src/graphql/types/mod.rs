//! GraphQL type definitions for Ledger
//!
//! This module contains the GraphQL object types that are exposed
//! through the API.

mod account;
mod owner;

pub use account::{Account, AccountType};
pub use owner::{Owner, OwnerInput};
