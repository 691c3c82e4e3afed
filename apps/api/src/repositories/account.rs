//! Account repository for centralized database operations
//!
//! The only read path the API needs is the grouped bulk lookup used by the
//! accounts-by-owner loader: one `owner_id = ANY($1)` query per batch window.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::utils::{group_by_owner, ACCOUNT_COLUMNS};
use crate::models::Account;

/// Storage operations the GraphQL layer needs for accounts
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Fetch the accounts of every given owner in a single round trip
    ///
    /// Every requested owner id appears in the result, mapped to an empty
    /// `Vec` when it has no accounts. Owner ids need not exist.
    async fn find_by_owner_ids(
        &self,
        owner_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Account>>, sqlx::Error>;
}

/// Repository for account database operations
#[derive(Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new AccountRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_owner_ids(
        &self,
        owner_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Account>>, sqlx::Error> {
        if owner_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            "SELECT {} FROM accounts WHERE owner_id = ANY($1) ORDER BY description ASC, id ASC",
            ACCOUNT_COLUMNS
        );
        let accounts: Vec<Account> = sqlx::query_as(&sql)
            .bind(owner_ids)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(
            owners = owner_ids.len(),
            accounts = accounts.len(),
            "Fetched accounts by owner ids"
        );

        Ok(group_by_owner(owner_ids, accounts))
    }
}
