//! Tag entity model and DTOs. Tag names are unique.

use lmeval_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a tag.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTag {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
}

/// DTO for renaming a tag.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTag {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
}
