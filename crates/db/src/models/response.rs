//! Response entity model and DTOs.

use lmeval_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `responses` table: one model output for one datapoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Response {
    pub id: DbId,
    pub model_id: DbId,
    pub datapoint_id: DbId,
    pub generated_text: String,
    pub latency_ms: i32,
    pub token_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a response.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateResponse {
    pub model_id: DbId,
    pub datapoint_id: DbId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub generated_text: String,
    #[validate(range(min = 1, message = "must be positive"))]
    pub latency_ms: i32,
    #[validate(range(min = 1, message = "must be positive"))]
    pub token_count: i32,
}

/// DTO for updating a response. Foreign keys stay fixed after creation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateResponse {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub generated_text: Option<String>,
    #[validate(range(min = 1, message = "must be positive"))]
    pub latency_ms: Option<i32>,
    #[validate(range(min = 1, message = "must be positive"))]
    pub token_count: Option<i32>,
}
