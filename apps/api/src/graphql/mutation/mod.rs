//! GraphQL mutations for Ledger
//!
//! This module contains all mutation resolvers, organized by domain.

mod owner;

pub use owner::{OwnerMutation, OWNER_NOT_FOUND_MESSAGE};

use async_graphql::MergedObject;

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(OwnerMutation);
