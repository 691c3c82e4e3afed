use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, Method};
use sqlx::postgres::PgPoolOptions;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ledger_api::config::Config;
use ledger_api::graphql::build_schema;
use ledger_api::repositories::{AccountRepository, AccountStore, OwnerRepository, OwnerStore};
use ledger_api::routes::{app_router, GraphQLState, HealthState};

/// Build the CORS layer based on configuration.
///
/// In production mode:
/// - If `CORS_ORIGINS` is set, only those origins are allowed
/// - If `CORS_ORIGINS` is not set, CORS requests are rejected (no origins allowed)
///
/// In development mode:
/// - If `CORS_ORIGINS` is set, those origins are used
/// - If `CORS_ORIGINS` is not set, permissive CORS is used for convenience
fn build_cors_layer(config: &Config) -> CorsLayer {
    match &config.cors_allowed_origins {
        Some(origins) if !origins.is_empty() => {
            let allowed_origins: Vec<_> = origins
                .iter()
                .filter_map(|origin| {
                    origin.parse().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin '{}', skipping", origin);
                        None
                    })
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::error!("No valid CORS origins configured, CORS requests will be rejected");
                CorsLayer::new()
            } else {
                tracing::info!(
                    "CORS configured with {} allowed origin(s): {:?}",
                    allowed_origins.len(),
                    origins
                );
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
                    .max_age(Duration::from_secs(3600))
            }
        }
        _ if config.is_production() => {
            tracing::warn!(
                "CORS_ORIGINS not configured in production mode. \
                 CORS requests will be rejected. Set CORS_ORIGINS to allow cross-origin requests."
            );
            CorsLayer::new()
        }
        _ => {
            tracing::warn!(
                "Using permissive CORS in development mode. \
                 Set CORS_ORIGINS for production-like behavior."
            );
            CorsLayer::permissive()
        }
    }
}

const DEFAULT_LOG_FILTER: &str = "ledger_api=debug,tower_http=debug";

/// Load `.env` (the working directory's, or `dotenv_path`) and build the log
/// filter from the resulting environment.
///
/// Variables already set in the process environment win over the file.
fn load_env_and_filter(dotenv_path: Option<&Path>) -> EnvFilter {
    // A missing file is fine; configuration validates what it needs
    let _ = match dotenv_path {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env has to be loaded before the filter reads RUST_LOG
    let filter = load_env_and_filter(None);
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing DATABASE_URL ends the process here
    let config = Config::from_env()?;

    tracing::info!(
        environment = %config.environment(),
        "Starting Ledger API server on port {}",
        config.port
    );

    let database = config.database();
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(database.max_connections)
        .min_connections(database.min_connections)
        .acquire_timeout(Duration::from_secs(database.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(database.idle_timeout_secs))
        .connect(&database.url)
        .await?;

    tracing::info!("Database connection established");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations completed successfully");

    let owner_store: Arc<dyn OwnerStore> = Arc::new(OwnerRepository::new(pool.clone()));
    let account_store: Arc<dyn AccountStore> = Arc::new(AccountRepository::new(pool.clone()));

    let schema = build_schema(owner_store, Arc::clone(&account_store));
    tracing::info!("GraphQL schema built");

    let app = app_router(
        GraphQLState::new(schema, account_store),
        HealthState::new(pool),
    )
    .layer(TraceLayer::new_for_http())
    .layer(build_cors_layer(&config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!(
        "GraphQL Playground available at http://{}:{}/graphql/playground",
        addr.ip(),
        addr.port()
    );

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_dotenv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.env", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_dotenv_log_level_reaches_filter() {
        let path = write_dotenv("ledger-log", "RUST_LOG=ledger_api=warn\n");

        temp_env::with_var_unset("RUST_LOG", || {
            let filter = load_env_and_filter(Some(&path));
            assert_eq!(filter.to_string(), "ledger_api=warn");
        });

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_process_env_wins_over_dotenv() {
        let path = write_dotenv("ledger-log-override", "RUST_LOG=ledger_api=warn\n");

        temp_env::with_var("RUST_LOG", Some("ledger_api=trace"), || {
            let filter = load_env_and_filter(Some(&path));
            assert_eq!(filter.to_string(), "ledger_api=trace");
        });

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_default_filter_without_rust_log() {
        let path = write_dotenv("ledger-log-empty", "PORT=8080\n");

        temp_env::with_vars_unset(["RUST_LOG", "PORT"], || {
            let filter = load_env_and_filter(Some(&path));
            let filter = filter.to_string();
            assert!(filter.contains("ledger_api=debug"));
            assert!(filter.contains("tower_http=debug"));
        });

        std::fs::remove_file(path).unwrap();
    }
}
