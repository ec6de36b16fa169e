//! Prompt entity model and DTOs.

use lmeval_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `prompts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prompt {
    pub id: DbId,
    pub text: String,
    pub token_count: i32,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a prompt.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePrompt {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub text: String,
    #[validate(range(min = 1, message = "must be positive"))]
    pub token_count: i32,
    pub description: Option<String>,
}

/// DTO for updating a prompt. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePrompt {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub text: Option<String>,
    #[validate(range(min = 1, message = "must be positive"))]
    pub token_count: Option<i32>,
    pub description: Option<String>,
}
