//! Provider entity model and DTOs.

use lmeval_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `providers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Provider {
    pub id: DbId,
    pub name: String,
    pub link: String,
    pub country: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a provider.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProvider {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(url(message = "must be a valid URL"))]
    pub link: String,
    pub country: Option<String>,
}

/// DTO for updating a provider. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProvider {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub link: Option<String>,
    pub country: Option<String>,
}
