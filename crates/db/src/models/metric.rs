//! Metric entity model and DTOs.

use lmeval_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `metrics` table: a numeric scale scores are recorded on.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Metric {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub min_value: f64,
    pub max_value: f64,
    pub step: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a metric.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMetric {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    pub min_value: f64,
    pub max_value: f64,
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub step: f64,
}

/// DTO for updating a metric.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMetric {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub step: Option<f64>,
}
