//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. List methods take a
//! caller-built filter set plus pagination parameters and return the
//! standard [`crate::pagination::Page`] envelope.

pub mod datapoint_repo;
pub mod dataset_repo;
pub mod evaluation_repo;
pub mod evaluator_prompt_repo;
pub mod evaluator_repo;
pub mod feedback_repo;
pub mod media_repo;
pub mod metric_repo;
pub mod model_prompt_repo;
pub mod model_repo;
pub mod prompt_repo;
pub mod prompt_tag_repo;
pub mod provider_repo;
pub mod response_repo;
pub mod score_repo;
pub mod tag_repo;

pub use datapoint_repo::DatapointRepo;
pub use dataset_repo::DatasetRepo;
pub use evaluation_repo::{PairwiseEvaluationRepo, SingleEvaluationRepo};
pub use evaluator_prompt_repo::EvaluatorPromptRepo;
pub use evaluator_repo::EvaluatorRepo;
pub use feedback_repo::FeedbackRepo;
pub use media_repo::MediaRepo;
pub use metric_repo::MetricRepo;
pub use model_prompt_repo::ModelPromptRepo;
pub use model_repo::ModelRepo;
pub use prompt_repo::PromptRepo;
pub use prompt_tag_repo::PromptTagRepo;
pub use provider_repo::ProviderRepo;
pub use response_repo::ResponseRepo;
pub use score_repo::ScoreRepo;
pub use tag_repo::TagRepo;
