//! Evaluator entity model and DTOs.

use lmeval_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `evaluators` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Evaluator {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an evaluator.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEvaluator {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
}

/// DTO for updating an evaluator.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEvaluator {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
}
