//! Media entity model and DTOs.

use lmeval_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `media` table: an external asset attached to a datapoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Media {
    pub id: DbId,
    pub datapoint_id: DbId,
    pub media_type: String,
    pub link: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a media record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMedia {
    pub datapoint_id: DbId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub media_type: String,
    #[validate(url(message = "must be a valid URL"))]
    pub link: String,
}

/// DTO for updating a media record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMedia {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub media_type: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub link: Option<String>,
}
