//! Owner model for Ledger
//!
//! This module contains the database model for account owners.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Owner record from the owners table
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Owner {
    /// Unique owner identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Postal address
    pub address: String,
}

/// Fields supplied when creating or replacing an owner
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewOwner {
    pub name: String,
    pub address: String,
}

impl Owner {
    /// Build an owner with a freshly generated id
    pub fn create(input: NewOwner) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            address: input.address,
        }
    }
}
