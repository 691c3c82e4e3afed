//! GraphQL queries for Ledger
//!
//! This module contains all query resolvers, organized by domain.

mod owner;

pub use owner::OwnerQuery;

use async_graphql::MergedObject;

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(OwnerQuery);
