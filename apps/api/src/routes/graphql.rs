//! GraphQL HTTP route handlers
//!
//! - `POST /graphql` - Execute a GraphQL request
//! - `GET /graphql/playground` - GraphQL Playground for development

use std::sync::Arc;

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};

use crate::graphql::{with_loaders, LedgerSchema};
use crate::repositories::AccountStore;

/// Shared state for GraphQL handlers
#[derive(Clone)]
pub struct GraphQLState {
    /// Executable schema
    pub schema: LedgerSchema,
    /// Store backing the per-request account loader
    pub account_store: Arc<dyn AccountStore>,
}

impl GraphQLState {
    pub fn new(schema: LedgerSchema, account_store: Arc<dyn AccountStore>) -> Self {
        Self {
            schema,
            account_store,
        }
    }
}

/// Create GraphQL router
pub fn graphql_router(state: GraphQLState) -> Router {
    Router::new()
        .route("/", post(graphql_handler))
        .route("/playground", get(graphql_playground))
        .with_state(state)
}

/// GraphQL handler that executes queries against the schema
///
/// Every request gets its own loaders, so batching and caching never
/// cross executions. Dropping the handler future (client disconnect)
/// drops the guard, which cancels the loaders and aborts their in-flight
/// fetches.
async fn graphql_handler(
    State(state): State<GraphQLState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let (request, _loaders) = with_loaders(req.into_inner(), Arc::clone(&state.account_store));
    let response = state.schema.execute(request).await;

    if response.is_err() {
        tracing::debug!(
            errors = response.errors.len(),
            "GraphQL request finished with errors"
        );
    }

    response.into()
}

/// GraphQL Playground handler for development
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
