//! GraphQL schema and resolvers for Ledger
//!
//! This module contains the async-graphql schema including:
//! - Query resolvers for owners
//! - Mutation resolvers for owner management
//! - Type definitions for owners and accounts
//! - Execution-scoped batch loaders for relationship fields

pub mod arguments;
pub mod loaders;
pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{build_schema, with_loaders, LedgerSchema, SchemaBuilder};
