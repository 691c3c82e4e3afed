//! Shared argument handling for GraphQL resolvers

use async_graphql::{Error, ID};
use uuid::Uuid;

/// Field error message for an id argument that is not a GUID
pub const INVALID_GUID_MESSAGE: &str = "Wrong value for guid";

/// Parse an `ID!` argument as a UUID
///
/// Failure is a field-level error; sibling fields keep resolving.
pub fn parse_guid(id: &ID) -> Result<Uuid, Error> {
    Uuid::parse_str(id.as_str()).map_err(|_| Error::new(INVALID_GUID_MESSAGE))
}
