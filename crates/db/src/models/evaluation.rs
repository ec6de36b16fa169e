//! Single and pairwise evaluation models and DTOs.
//!
//! A single evaluation grades one response; a pairwise evaluation
//! compares two distinct responses. The distinctness rule is enforced
//! both here (422 before storage) and by a database CHECK constraint.

use lmeval_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A row from the `single_evaluations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SingleEvaluation {
    pub id: DbId,
    pub evaluator_id: DbId,
    pub response_id: DbId,
    pub score: f64,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a single evaluation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSingleEvaluation {
    pub evaluator_id: DbId,
    pub response_id: DbId,
    pub score: f64,
    pub notes: Option<String>,
}

/// DTO for updating a single evaluation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSingleEvaluation {
    pub score: Option<f64>,
    pub notes: Option<String>,
}

/// A row from the `pairwise_evaluations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PairwiseEvaluation {
    pub id: DbId,
    pub evaluator_id: DbId,
    pub response_a_id: DbId,
    pub response_b_id: DbId,
    pub winner_response_id: Option<DbId>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a pairwise evaluation.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = validate_distinct_responses))]
pub struct CreatePairwiseEvaluation {
    pub evaluator_id: DbId,
    pub response_a_id: DbId,
    pub response_b_id: DbId,
    pub winner_response_id: Option<DbId>,
    pub notes: Option<String>,
}

/// DTO for updating a pairwise evaluation's payload columns.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePairwiseEvaluation {
    pub winner_response_id: Option<DbId>,
    pub notes: Option<String>,
}

fn validate_distinct_responses(input: &CreatePairwiseEvaluation) -> Result<(), ValidationError> {
    if input.response_a_id == input.response_b_id {
        return Err(ValidationError::new("distinct_responses")
            .with_message("response_a_id and response_b_id must differ".into()));
    }
    Ok(())
}
