//! Owner repository for centralized database operations
//!
//! This module provides all owner-related database operations in a single location,
//! following the repository pattern. Resolvers depend on the [`OwnerStore`] trait
//! so tests can swap in an in-memory store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::utils::OWNER_COLUMNS;
use crate::models::{NewOwner, Owner};

/// Storage operations the GraphQL layer needs for owners
#[async_trait]
pub trait OwnerStore: Send + Sync {
    /// All owners ordered by name
    async fn find_all(&self) -> Result<Vec<Owner>, sqlx::Error>;

    /// Find an owner by its unique ID
    async fn find_by_id(&self, owner_id: Uuid) -> Result<Option<Owner>, sqlx::Error>;

    /// Insert a new owner and return it
    async fn create(&self, input: NewOwner) -> Result<Owner, sqlx::Error>;

    /// Replace name and address of an existing owner
    ///
    /// Returns `None` when no owner has the given id.
    async fn update(&self, owner_id: Uuid, input: NewOwner) -> Result<Option<Owner>, sqlx::Error>;

    /// Delete an owner (accounts cascade); returns whether a row was removed
    async fn delete(&self, owner_id: Uuid) -> Result<bool, sqlx::Error>;
}

/// Repository for owner database operations
#[derive(Clone)]
pub struct OwnerRepository {
    pool: PgPool,
}

impl OwnerRepository {
    /// Create a new OwnerRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnerStore for OwnerRepository {
    async fn find_all(&self) -> Result<Vec<Owner>, sqlx::Error> {
        let sql = format!("SELECT {} FROM owners ORDER BY name ASC", OWNER_COLUMNS);
        sqlx::query_as::<_, Owner>(&sql)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, owner_id: Uuid) -> Result<Option<Owner>, sqlx::Error> {
        let sql = format!("SELECT {} FROM owners WHERE id = $1", OWNER_COLUMNS);
        sqlx::query_as::<_, Owner>(&sql)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, input: NewOwner) -> Result<Owner, sqlx::Error> {
        let owner = Owner::create(input);
        let sql = format!(
            "INSERT INTO owners (id, name, address) VALUES ($1, $2, $3) RETURNING {}",
            OWNER_COLUMNS
        );
        sqlx::query_as::<_, Owner>(&sql)
            .bind(owner.id)
            .bind(&owner.name)
            .bind(&owner.address)
            .fetch_one(&self.pool)
            .await
    }

    async fn update(&self, owner_id: Uuid, input: NewOwner) -> Result<Option<Owner>, sqlx::Error> {
        let sql = format!(
            "UPDATE owners SET name = $2, address = $3 WHERE id = $1 RETURNING {}",
            OWNER_COLUMNS
        );
        sqlx::query_as::<_, Owner>(&sql)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.address)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, owner_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM owners WHERE id = $1")
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
