//! Request handlers, one module per resource.

pub mod dataset;
pub mod datapoint;
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
