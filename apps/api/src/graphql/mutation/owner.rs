//! Owner mutations for Ledger GraphQL API
//!
//! This module provides mutations for owner management:
//! - createOwner: Create a new owner
//! - updateOwner: Replace name and address of an owner
//! - deleteOwner: Delete an owner together with its accounts

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};

use crate::error::ApiError;
use crate::graphql::arguments::parse_guid;
use crate::graphql::types::{Owner, OwnerInput};
use crate::models::NewOwner;
use crate::repositories::OwnerStore;

/// Maximum length of owner name
const MAX_NAME_LENGTH: usize = 255;

/// Maximum length of owner address
const MAX_ADDRESS_LENGTH: usize = 1000;

/// Message returned when the target owner does not exist
pub const OWNER_NOT_FOUND_MESSAGE: &str = "Couldn't find owner in db.";

/// Convert API errors to GraphQL errors with appropriate messages
fn to_graphql_error(error: ApiError) -> async_graphql::Error {
    match &error {
        ApiError::NotFound { .. } => async_graphql::Error::new(OWNER_NOT_FOUND_MESSAGE),
        ApiError::ValidationError(msg) => async_graphql::Error::new(msg.clone()),
        ApiError::Database(_) => {
            tracing::error!(error = %error, "Owner mutation error");
            async_graphql::Error::new("An unexpected error occurred")
        }
    }
}

fn validate_input(input: OwnerInput) -> Result<NewOwner, ApiError> {
    let name = input.name.trim();
    let address = input.address.trim();

    if name.is_empty() {
        return Err(ApiError::ValidationError("Name is required".to_string()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(ApiError::ValidationError(format!(
            "Name must be at most {} characters",
            MAX_NAME_LENGTH
        )));
    }
    if address.len() > MAX_ADDRESS_LENGTH {
        return Err(ApiError::ValidationError(format!(
            "Address must be at most {} characters",
            MAX_ADDRESS_LENGTH
        )));
    }

    Ok(NewOwner {
        name: name.to_string(),
        address: address.to_string(),
    })
}

/// Owner-related mutations
#[derive(Default)]
pub struct OwnerMutation;

#[Object]
impl OwnerMutation {
    /// Create a new owner
    async fn create_owner(&self, ctx: &Context<'_>, owner: OwnerInput) -> Result<Owner> {
        let store = ctx.data::<Arc<dyn OwnerStore>>()?;
        let input = validate_input(owner).map_err(to_graphql_error)?;

        let created = store
            .create(input)
            .await
            .map_err(|e| to_graphql_error(e.into()))?;

        tracing::info!(owner_id = %created.id, "Owner created");
        Ok(created.into())
    }

    /// Replace name and address of an existing owner
    async fn update_owner(
        &self,
        ctx: &Context<'_>,
        owner: OwnerInput,
        owner_id: ID,
    ) -> Result<Owner> {
        let owner_id = parse_guid(&owner_id)?;
        let store = ctx.data::<Arc<dyn OwnerStore>>()?;
        let input = validate_input(owner).map_err(to_graphql_error)?;

        let updated = store
            .update(owner_id, input)
            .await
            .map_err(|e| to_graphql_error(e.into()))?
            .ok_or_else(|| to_graphql_error(ApiError::not_found("owner", owner_id.to_string())))?;

        tracing::info!(owner_id = %owner_id, "Owner updated");
        Ok(updated.into())
    }

    /// Delete an owner and, by cascade, its accounts
    async fn delete_owner(&self, ctx: &Context<'_>, owner_id: ID) -> Result<String> {
        let owner_id = parse_guid(&owner_id)?;
        let store = ctx.data::<Arc<dyn OwnerStore>>()?;

        let deleted = store
            .delete(owner_id)
            .await
            .map_err(|e| to_graphql_error(e.into()))?;
        if !deleted {
            return Err(to_graphql_error(ApiError::not_found(
                "owner",
                owner_id.to_string(),
            )));
        }

        tracing::info!(owner_id = %owner_id, "Owner deleted");
        Ok(format!(
            "The owner with the id: {} has been successfully deleted from db.",
            owner_id
        ))
    }
}
