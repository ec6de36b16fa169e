//! Model entity model and DTOs.

use lmeval_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::provider::Provider;

/// A row from the `models` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Model {
    pub id: DbId,
    pub name: String,
    pub link: String,
    pub description: String,
    pub version: String,
    pub param_count: i64,
    pub context_window: i32,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub provider_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A model with its owning provider attached, returned by get-by-id.
#[derive(Debug, Clone, Serialize)]
pub struct ModelDetail {
    #[serde(flatten)]
    pub model: Model,
    pub provider: Provider,
}

/// DTO for creating a model.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateModel {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(url(message = "must be a valid URL"))]
    pub link: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub version: String,
    #[validate(range(min = 1, message = "must be positive"))]
    pub param_count: i64,
    #[validate(range(min = 1, message = "must be positive"))]
    pub context_window: i32,
    #[validate(range(min = 0.0, max = 2.0, message = "must be between 0 and 2"))]
    pub temperature: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0, message = "must be between 0 and 1"))]
    pub top_p: Option<f64>,
    pub provider_id: DbId,
}

/// DTO for updating a model. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateModel {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub link: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub version: Option<String>,
    #[validate(range(min = 1, message = "must be positive"))]
    pub param_count: Option<i64>,
    #[validate(range(min = 1, message = "must be positive"))]
    pub context_window: Option<i32>,
    #[validate(range(min = 0.0, max = 2.0, message = "must be between 0 and 2"))]
    pub temperature: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0, message = "must be between 0 and 1"))]
    pub top_p: Option<f64>,
    pub provider_id: Option<DbId>,
}
