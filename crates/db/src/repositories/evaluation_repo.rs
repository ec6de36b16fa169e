//! Repositories for the `single_evaluations` and `pairwise_evaluations`
//! tables.

use lmeval_core::types::DbId;
use sqlx::PgPool;

use crate::filter::Filter;
use crate::models::evaluation::{
    CreatePairwiseEvaluation, CreateSingleEvaluation, PairwiseEvaluation, SingleEvaluation,
    UpdatePairwiseEvaluation, UpdateSingleEvaluation,
};
use crate::pagination::{fetch_page, Page, PageParams};

/// Column list for `single_evaluations` queries.
const SINGLE_COLUMNS: &str = "\
    id, evaluator_id, response_id, score, notes, created_at, updated_at";

/// Column list for `pairwise_evaluations` queries.
const PAIRWISE_COLUMNS: &str = "\
    id, evaluator_id, response_a_id, response_b_id, winner_response_id, notes, \
    created_at, updated_at";

/// Provides CRUD operations for single evaluations.
pub struct SingleEvaluationRepo;

impl SingleEvaluationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateSingleEvaluation,
    ) -> Result<SingleEvaluation, sqlx::Error> {
        let query = format!(
            "INSERT INTO single_evaluations (evaluator_id, response_id, score, notes) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {SINGLE_COLUMNS}"
        );
        sqlx::query_as::<_, SingleEvaluation>(&query)
            .bind(input.evaluator_id)
            .bind(input.response_id)
            .bind(input.score)
            .bind(input.notes.as_deref())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SingleEvaluation>, sqlx::Error> {
        let query = format!("SELECT {SINGLE_COLUMNS} FROM single_evaluations WHERE id = $1");
        sqlx::query_as::<_, SingleEvaluation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List single evaluations, newest first.
    pub async fn list(
        pool: &PgPool,
        filters: &[Filter],
        page: &PageParams,
    ) -> Result<Page<SingleEvaluation>, sqlx::Error> {
        fetch_page(
            pool,
            "single_evaluations",
            SINGLE_COLUMNS,
            "created_at DESC",
            filters,
            page,
        )
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSingleEvaluation,
    ) -> Result<Option<SingleEvaluation>, sqlx::Error> {
        let query = format!(
            "UPDATE single_evaluations SET \
                 score = COALESCE($2, score), \
                 notes = COALESCE($3, notes) \
             WHERE id = $1 \
             RETURNING {SINGLE_COLUMNS}"
        );
        sqlx::query_as::<_, SingleEvaluation>(&query)
            .bind(id)
            .bind(input.score)
            .bind(input.notes.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a single evaluation. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM single_evaluations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides CRUD operations for pairwise evaluations.
pub struct PairwiseEvaluationRepo;

impl PairwiseEvaluationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreatePairwiseEvaluation,
    ) -> Result<PairwiseEvaluation, sqlx::Error> {
        let query = format!(
            "INSERT INTO pairwise_evaluations \
                 (evaluator_id, response_a_id, response_b_id, winner_response_id, notes) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {PAIRWISE_COLUMNS}"
        );
        sqlx::query_as::<_, PairwiseEvaluation>(&query)
            .bind(input.evaluator_id)
            .bind(input.response_a_id)
            .bind(input.response_b_id)
            .bind(input.winner_response_id)
            .bind(input.notes.as_deref())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PairwiseEvaluation>, sqlx::Error> {
        let query = format!("SELECT {PAIRWISE_COLUMNS} FROM pairwise_evaluations WHERE id = $1");
        sqlx::query_as::<_, PairwiseEvaluation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List pairwise evaluations, newest first.
    pub async fn list(
        pool: &PgPool,
        filters: &[Filter],
        page: &PageParams,
    ) -> Result<Page<PairwiseEvaluation>, sqlx::Error> {
        fetch_page(
            pool,
            "pairwise_evaluations",
            PAIRWISE_COLUMNS,
            "created_at DESC",
            filters,
            page,
        )
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePairwiseEvaluation,
    ) -> Result<Option<PairwiseEvaluation>, sqlx::Error> {
        let query = format!(
            "UPDATE pairwise_evaluations SET \
                 winner_response_id = COALESCE($2, winner_response_id), \
                 notes = COALESCE($3, notes) \
             WHERE id = $1 \
             RETURNING {PAIRWISE_COLUMNS}"
        );
        sqlx::query_as::<_, PairwiseEvaluation>(&query)
            .bind(id)
            .bind(input.winner_response_id)
            .bind(input.notes.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a pairwise evaluation. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pairwise_evaluations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
