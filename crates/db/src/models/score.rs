//! Score entity model and DTOs.
//!
//! One score records one metric's value for one response; the
//! `(metric_id, response_id)` pair is unique.

use lmeval_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `scores` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Score {
    pub id: DbId,
    pub metric_id: DbId,
    pub response_id: DbId,
    pub value: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a score.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateScore {
    pub metric_id: DbId,
    pub response_id: DbId,
    pub value: f64,
}

/// DTO for updating a score's value. The metric/response pair is fixed.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateScore {
    pub value: Option<f64>,
}
