//! Feedback entity model and DTOs.

use lmeval_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub response_id: DbId,
    pub content: String,
    pub rating: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating feedback on a response.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeedback {
    pub response_id: DbId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: Option<i32>,
}

/// DTO for updating feedback.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateFeedback {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: Option<String>,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: Option<i32>,
}
