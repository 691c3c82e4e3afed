//! Accounts-by-Owner batch fetcher
//!
//! This fetcher turns one batch window of owner IDs into a single grouped
//! account query, solving the N+1 problem when listing owners with their
//! accounts.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use super::batch::{BatchFetch, BatchLoader};
use crate::models::Account;
use crate::repositories::AccountStore;

/// Loader resolving `Owner.accounts` within one execution
pub type AccountsByOwnerLoader = BatchLoader<AccountsByOwnerFetcher>;

/// Bulk account lookup keyed by owner ID
#[derive(Clone)]
pub struct AccountsByOwnerFetcher {
    store: Arc<dyn AccountStore>,
}

impl AccountsByOwnerFetcher {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Fresh loader for a single execution
    pub fn loader(store: Arc<dyn AccountStore>) -> AccountsByOwnerLoader {
        BatchLoader::new(Self::new(store))
    }
}

impl BatchFetch for AccountsByOwnerFetcher {
    type Key = Uuid;
    type Value = Account;
    type Error = Arc<sqlx::Error>;

    async fn fetch(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Vec<Account>>, Self::Error> {
        self.store.find_by_owner_ids(keys).await.map_err(Arc::new)
    }
}
