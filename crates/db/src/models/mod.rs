//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for
//!   partial updates, where the entity has updatable columns

pub mod datapoint;
pub mod dataset;
pub mod evaluation;
pub mod evaluator;
pub mod evaluator_prompt;
pub mod feedback;
pub mod media;
pub mod metric;
pub mod model;
pub mod model_prompt;
pub mod prompt;
pub mod prompt_tag;
pub mod provider;
pub mod response;
pub mod score;
pub mod tag;
