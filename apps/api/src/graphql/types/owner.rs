//! Owner GraphQL type
//!
//! This module defines the GraphQL types for owners, including the
//! batched `accounts` relationship resolver.

use async_graphql::{Context, InputObject, Object, Result, ID};

use crate::graphql::loaders::AccountsByOwnerLoader;
use crate::models::{NewOwner, Owner as DbOwner};

use super::account::Account;

/// Owner information exposed via GraphQL
pub struct Owner {
    inner: DbOwner,
}

impl Owner {
    /// Create a new GraphQL Owner from a database Owner
    pub fn new(owner: DbOwner) -> Self {
        Self { inner: owner }
    }
}

impl From<DbOwner> for Owner {
    fn from(owner: DbOwner) -> Self {
        Self::new(owner)
    }
}

#[Object]
impl Owner {
    /// Id property from the owner object.
    async fn id(&self) -> ID {
        ID::from(self.inner.id)
    }

    /// Name property from the owner object.
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Address property from the owner object.
    async fn address(&self) -> &str {
        &self.inner.address
    }

    /// Accounts held by this owner (batched per execution)
    ///
    /// All owners resolved in the same pass share one account query.
    async fn accounts(&self, ctx: &Context<'_>) -> Result<Vec<Account>> {
        let loader = ctx.data::<AccountsByOwnerLoader>()?;
        let accounts = loader.load(self.inner.id).await?;
        Ok(accounts.into_iter().map(Account::from).collect())
    }
}

/// Input for creating or replacing an owner
#[derive(Debug, Clone, InputObject)]
#[graphql(name = "OwnerInput")]
pub struct OwnerInput {
    pub name: String,
    pub address: String,
}

impl From<OwnerInput> for NewOwner {
    fn from(input: OwnerInput) -> Self {
        Self {
            name: input.name,
            address: input.address,
        }
    }
}
