//! Database repository layer for Ledger
//!
//! This module provides the data access layer, centralizing all database
//! operations into reusable repositories. Each repository implements a
//! store trait so the GraphQL layer can be exercised without PostgreSQL.

pub mod account;
pub mod owner;
pub mod utils;

pub use account::{AccountRepository, AccountStore};
pub use owner::{OwnerRepository, OwnerStore};
