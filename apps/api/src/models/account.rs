//! Account model for Ledger
//!
//! Accounts always belong to exactly one owner and are the children
//! fetched in bulk by the per-request loader.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Account type enum matching PostgreSQL account_type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_type", rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Cash,
    Savings,
    Expense,
    Income,
}

/// Account record from the accounts table
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Account {
    /// Unique account identifier
    pub id: Uuid,

    /// Kind of account
    pub account_type: AccountType,

    /// Free-form description
    pub description: String,

    /// Owner this account belongs to
    pub owner_id: Uuid,
}
