//! DataLoader implementations for GraphQL
//!
//! This module provides the batch loading used by relationship resolvers to
//! avoid N+1 query patterns:
//! - [`batch`]: the generic execution-scoped loader and its fetch trait
//! - [`accounts_by_owner`]: `Vec<Account>` per owner ID

pub mod accounts_by_owner;
pub mod batch;

pub use accounts_by_owner::{AccountsByOwnerFetcher, AccountsByOwnerLoader};
pub use batch::{BatchFetch, BatchLoader, CancelOnDrop, LoadError, LoadFuture, LoadResult};
