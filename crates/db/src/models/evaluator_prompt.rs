//! Evaluator–prompt association (junction) model and DTO.
//!
//! Pure junction: the composite key is the whole identity, so there is
//! no update DTO.

use lmeval_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `evaluator_prompts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EvaluatorPrompt {
    pub evaluator_id: DbId,
    pub prompt_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an evaluator–prompt association.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEvaluatorPrompt {
    pub evaluator_id: DbId,
    pub prompt_id: DbId,
}
