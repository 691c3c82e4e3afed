//! Shared utility functions for repositories
//!
//! This module provides column lists and grouping helpers used across repositories.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::Account;

// ============================================================================
// SQL Column Constants
// ============================================================================

/// SQL columns for owner queries
pub const OWNER_COLUMNS: &str = "id, name, address";

/// SQL columns for account queries
pub const ACCOUNT_COLUMNS: &str = "id, account_type, description, owner_id";

/// Group accounts under their owner id, preserving row order within a group
///
/// Every id in `owner_ids` gets an entry, even if no account references it.
/// Accounts whose owner was not requested are dropped.
pub fn group_by_owner(owner_ids: &[Uuid], accounts: Vec<Account>) -> HashMap<Uuid, Vec<Account>> {
    let mut grouped: HashMap<Uuid, Vec<Account>> =
        owner_ids.iter().map(|id| (*id, Vec::new())).collect();

    for account in accounts {
        if let Some(group) = grouped.get_mut(&account.owner_id) {
            group.push(account);
        }
    }

    grouped
}
