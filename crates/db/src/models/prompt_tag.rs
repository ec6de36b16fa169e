//! Prompt–tag association (junction) model and DTO.

use lmeval_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `prompt_tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PromptTag {
    pub prompt_id: DbId,
    pub tag_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a prompt–tag association.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePromptTag {
    pub prompt_id: DbId,
    pub tag_id: DbId,
}
