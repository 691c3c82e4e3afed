//! HTTP route handlers for the Ledger API
//!
//! This module contains all endpoint handlers including:
//! - GraphQL execution and playground
//! - Health check and status endpoints

pub mod graphql;
pub mod health;

pub use graphql::{graphql_router, GraphQLState};
pub use health::{health_router, HealthState};

use axum::{http::Uri, routing::get, Router};

use crate::error::ApiError;

/// Assemble the application router (without middleware layers)
pub fn app_router(graphql: GraphQLState, health: HealthState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/graphql", graphql_router(graphql))
        .nest("/health", health_router(health))
        .fallback(fallback)
}

async fn root() -> &'static str {
    "Ledger GraphQL API"
}

async fn fallback(uri: Uri) -> ApiError {
    ApiError::not_found("route", uri.path())
}
