//! Model–prompt association (junction) model and DTOs.
//!
//! The `(model_id, prompt_id)` pair is the row's identity and is
//! immutable; only `sort_order` can change after creation. `sort_order`
//! is unique per model when present.

use lmeval_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `model_prompts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ModelPrompt {
    pub model_id: DbId,
    pub prompt_id: DbId,
    pub sort_order: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a model–prompt association.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateModelPrompt {
    pub model_id: DbId,
    pub prompt_id: DbId,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub sort_order: Option<i32>,
}

/// DTO for updating the non-key payload of an association.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateModelPrompt {
    #[validate(range(min = 0, message = "must not be negative"))]
    pub sort_order: Option<i32>,
}
