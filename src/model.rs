//! Character record and the summary projection returned by the list endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The full character record as persisted and as returned by get/add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Character {
    /// Caller-supplied primary key.
    pub id: i64,
    pub name: String,
    pub height: i64,
    pub mass: i64,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: i64,
}

/// Partial projection served by GET /character/getAll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct CharacterSummary {
    pub id: i64,
    pub name: String,
    pub height: i64,
    pub mass: i64,
    pub birth_year: i64,
    pub eye_color: String,
}
