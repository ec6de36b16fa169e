//! Datapoint entity model and DTOs.

use lmeval_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `datapoints` table. `payload` is free-form JSON.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Datapoint {
    pub id: DbId,
    pub dataset_id: DbId,
    pub payload: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a datapoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDatapoint {
    pub dataset_id: DbId,
    pub payload: serde_json::Value,
}

/// DTO for updating a datapoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDatapoint {
    pub dataset_id: Option<DbId>,
    pub payload: Option<serde_json::Value>,
}
