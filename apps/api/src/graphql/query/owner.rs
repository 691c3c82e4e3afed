//! Owner queries for Ledger GraphQL API

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};

use crate::graphql::arguments::parse_guid;
use crate::graphql::types::Owner;
use crate::repositories::OwnerStore;

/// Owner-related queries
#[derive(Default)]
pub struct OwnerQuery;

#[Object]
impl OwnerQuery {
    /// List all owners
    async fn owners(&self, ctx: &Context<'_>) -> Result<Vec<Owner>> {
        let store = ctx.data::<Arc<dyn OwnerStore>>()?;
        let owners = store.find_all().await?;
        Ok(owners.into_iter().map(Owner::from).collect())
    }

    /// Get an owner by ID
    ///
    /// An unknown id yields `null` without an error.
    async fn owner(&self, ctx: &Context<'_>, owner_id: ID) -> Result<Option<Owner>> {
        let owner_id = parse_guid(&owner_id)?;
        let store = ctx.data::<Arc<dyn OwnerStore>>()?;
        let owner = store.find_by_id(owner_id).await?;
        Ok(owner.map(Owner::from))
    }
}
