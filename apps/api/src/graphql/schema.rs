//! GraphQL schema builder for Ledger
//!
//! This module provides the schema construction for the async-graphql API.
//! Stores are schema-wide data; loaders are attached per request so their
//! cache lives for exactly one execution.

use std::sync::Arc;

use async_graphql::{EmptySubscription, Request, Schema};

use crate::repositories::{AccountStore, OwnerStore};

use super::loaders::{AccountsByOwnerFetcher, CancelOnDrop};
use super::mutation::Mutation;
use super::query::Query;

/// The Ledger GraphQL schema type
pub type LedgerSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema with required stores
pub struct SchemaBuilder {
    owner_store: Option<Arc<dyn OwnerStore>>,
    account_store: Option<Arc<dyn AccountStore>>,
}

impl SchemaBuilder {
    /// Create a new schema builder
    pub fn new() -> Self {
        Self {
            owner_store: None,
            account_store: None,
        }
    }

    /// Set the owner store
    pub fn owner_store(mut self, store: Arc<dyn OwnerStore>) -> Self {
        self.owner_store = Some(store);
        self
    }

    /// Set the account store
    pub fn account_store(mut self, store: Arc<dyn AccountStore>) -> Self {
        self.account_store = Some(store);
        self
    }

    /// Build the schema with all configured stores
    ///
    /// # Panics
    /// Panics if either store is not configured
    pub fn build(self) -> LedgerSchema {
        let owner_store = self.owner_store.expect("owner store is required");
        let account_store = self.account_store.expect("account store is required");

        Schema::build(Query::default(), Mutation::default(), EmptySubscription)
            .data(owner_store)
            .data(account_store)
            .finish()
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new GraphQL schema with the provided stores
pub fn build_schema(
    owner_store: Arc<dyn OwnerStore>,
    account_store: Arc<dyn AccountStore>,
) -> LedgerSchema {
    SchemaBuilder::new()
        .owner_store(owner_store)
        .account_store(account_store)
        .build()
}

/// Attach fresh execution-scoped loaders to a request
///
/// The returned guard cancels those loaders when dropped; keep it alive for
/// as long as the execution runs.
pub fn with_loaders(
    request: Request,
    account_store: Arc<dyn AccountStore>,
) -> (Request, CancelOnDrop<AccountsByOwnerFetcher>) {
    let accounts = AccountsByOwnerFetcher::loader(account_store);
    let guard = accounts.cancel_on_drop();
    (request.data(accounts), guard)
}
