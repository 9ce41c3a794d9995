//! Response body shapes shared by handlers and the OpenAPI document.

use serde::Serialize;
use utoipa::ToSchema;

/// Confirmation body returned by the delete endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteInfo {
    pub info: String,
}

pub fn delete_info(id: i64) -> DeleteInfo {
    DeleteInfo {
        info: format!("Character with id '{id}' was deleted"),
    }
}
