//! Integration tests for schema-level constraints: restrict-on-delete
//! foreign keys, unique constraints, CHECK constraints, and the
//! trigger-maintained `updated_at` column.

use sqlx::PgPool;

use lmeval_db::models::dataset::CreateDataset;
use lmeval_db::models::datapoint::CreateDatapoint;
use lmeval_db::models::metric::CreateMetric;
use lmeval_db::models::model::CreateModel;
use lmeval_db::models::model_prompt::{CreateModelPrompt, UpdateModelPrompt};
use lmeval_db::models::prompt::CreatePrompt;
use lmeval_db::models::provider::{CreateProvider, UpdateProvider};
use lmeval_db::models::response::CreateResponse;
use lmeval_db::models::score::CreateScore;
use lmeval_db::models::tag::CreateTag;
use lmeval_db::repositories::{
    DatapointRepo, DatasetRepo, MetricRepo, ModelPromptRepo, ModelRepo, PromptRepo, ProviderRepo,
    ResponseRepo, ScoreRepo, TagRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_provider(pool: &PgPool) -> lmeval_core::types::DbId {
    ProviderRepo::create(
        pool,
        &CreateProvider {
            name: "Acme AI".to_string(),
            link: "https://example.com".to_string(),
            country: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_model(pool: &PgPool) -> lmeval_core::types::DbId {
    let provider_id = seed_provider(pool).await;
    ModelRepo::create(
        pool,
        &CreateModel {
            name: "acme-7b".to_string(),
            link: "https://example.com/model".to_string(),
            description: "a test model".to_string(),
            version: "1.0".to_string(),
            param_count: 7_000_000_000,
            context_window: 8192,
            temperature: None,
            top_p: None,
            provider_id,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_response(pool: &PgPool) -> lmeval_core::types::DbId {
    let model_id = seed_model(pool).await;
    let dataset = DatasetRepo::create(
        pool,
        &CreateDataset {
            name: "bench".to_string(),
            description: "test set".to_string(),
        },
    )
    .await
    .unwrap();
    let datapoint = DatapointRepo::create(
        pool,
        &CreateDatapoint {
            dataset_id: dataset.id,
            payload: serde_json::json!({"input": "hi"}),
        },
    )
    .await
    .unwrap();
    ResponseRepo::create(
        pool,
        &CreateResponse {
            model_id,
            datapoint_id: datapoint.id,
            generated_text: "hello".to_string(),
            latency_ms: 100,
            token_count: 2,
        },
    )
    .await
    .unwrap()
    .id
}

fn assert_constraint(err: sqlx::Error, name: &str) {
    match err {
        sqlx::Error::Database(db_err) => assert_eq!(db_err.constraint(), Some(name)),
        other => panic!("expected database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Restrict-on-delete
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn deleting_referenced_provider_fails_and_row_survives(pool: PgPool) {
    let provider_id = seed_provider(&pool).await;
    ModelRepo::create(
        &pool,
        &CreateModel {
            name: "dependent".to_string(),
            link: "https://example.com/model".to_string(),
            description: "holds the provider".to_string(),
            version: "1.0".to_string(),
            param_count: 1_000_000,
            context_window: 2048,
            temperature: None,
            top_p: None,
            provider_id,
        },
    )
    .await
    .unwrap();

    let err = ProviderRepo::delete(&pool, provider_id).await.unwrap_err();
    assert_constraint(err, "fk_models_provider_id");

    // The provider is untouched.
    assert!(ProviderRepo::find_by_id(&pool, provider_id)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test]
async fn deleting_dataset_with_datapoints_fails(pool: PgPool) {
    let dataset = DatasetRepo::create(
        &pool,
        &CreateDataset {
            name: "bench".to_string(),
            description: "test set".to_string(),
        },
    )
    .await
    .unwrap();
    DatapointRepo::create(
        &pool,
        &CreateDatapoint {
            dataset_id: dataset.id,
            payload: serde_json::json!({}),
        },
    )
    .await
    .unwrap();

    let err = DatasetRepo::delete(&pool, dataset.id).await.unwrap_err();
    assert_constraint(err, "fk_datapoints_dataset_id");
}

// ---------------------------------------------------------------------------
// Unique constraints
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn duplicate_sort_order_within_model_is_rejected(pool: PgPool) {
    let model_id = seed_model(&pool).await;
    let first = PromptRepo::create(
        &pool,
        &CreatePrompt {
            text: "first".to_string(),
            token_count: 1,
            description: None,
        },
    )
    .await
    .unwrap();
    let second = PromptRepo::create(
        &pool,
        &CreatePrompt {
            text: "second".to_string(),
            token_count: 1,
            description: None,
        },
    )
    .await
    .unwrap();

    ModelPromptRepo::create(
        &pool,
        &CreateModelPrompt {
            model_id,
            prompt_id: first.id,
            sort_order: Some(1),
        },
    )
    .await
    .unwrap();

    let err = ModelPromptRepo::create(
        &pool,
        &CreateModelPrompt {
            model_id,
            prompt_id: second.id,
            sort_order: Some(1),
        },
    )
    .await
    .unwrap_err();
    assert_constraint(err, "uq_model_prompts_model_id_sort_order");

    // Moving to a free slot works.
    ModelPromptRepo::create(
        &pool,
        &CreateModelPrompt {
            model_id,
            prompt_id: second.id,
            sort_order: Some(2),
        },
    )
    .await
    .unwrap();
    let moved = ModelPromptRepo::update(
        &pool,
        model_id,
        second.id,
        &UpdateModelPrompt {
            sort_order: Some(3),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(moved.sort_order, Some(3));
}

#[sqlx::test]
async fn duplicate_metric_response_score_is_rejected(pool: PgPool) {
    let response_id = seed_response(&pool).await;
    let metric = MetricRepo::create(
        &pool,
        &CreateMetric {
            name: "accuracy".to_string(),
            description: "exact match".to_string(),
            min_value: 0.0,
            max_value: 1.0,
            step: 0.1,
        },
    )
    .await
    .unwrap();

    ScoreRepo::create(
        &pool,
        &CreateScore {
            metric_id: metric.id,
            response_id,
            value: 0.8,
        },
    )
    .await
    .unwrap();

    let err = ScoreRepo::create(
        &pool,
        &CreateScore {
            metric_id: metric.id,
            response_id,
            value: 0.9,
        },
    )
    .await
    .unwrap_err();
    assert_constraint(err, "uq_scores_metric_id_response_id");
}

#[sqlx::test]
async fn duplicate_tag_name_is_rejected(pool: PgPool) {
    TagRepo::create(
        &pool,
        &CreateTag {
            name: "fluency".to_string(),
        },
    )
    .await
    .unwrap();

    let err = TagRepo::create(
        &pool,
        &CreateTag {
            name: "fluency".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_constraint(err, "uq_tags_name");
}

// ---------------------------------------------------------------------------
// CHECK constraints and updated_at trigger
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn check_constraint_rejects_nonpositive_latency(pool: PgPool) {
    let model_id = seed_model(&pool).await;
    let dataset = DatasetRepo::create(
        &pool,
        &CreateDataset {
            name: "bench".to_string(),
            description: "test set".to_string(),
        },
    )
    .await
    .unwrap();
    let datapoint = DatapointRepo::create(
        &pool,
        &CreateDatapoint {
            dataset_id: dataset.id,
            payload: serde_json::json!({}),
        },
    )
    .await
    .unwrap();

    let err = ResponseRepo::create(
        &pool,
        &CreateResponse {
            model_id,
            datapoint_id: datapoint.id,
            generated_text: "hello".to_string(),
            latency_ms: 0,
            token_count: 2,
        },
    )
    .await
    .unwrap_err();
    assert_constraint(err, "ck_responses_latency_ms_positive");
}

#[sqlx::test]
async fn update_bumps_updated_at_via_trigger(pool: PgPool) {
    let created = ProviderRepo::create(
        &pool,
        &CreateProvider {
            name: "Before".to_string(),
            link: "https://example.com".to_string(),
            country: None,
        },
    )
    .await
    .unwrap();

    let updated = ProviderRepo::update(
        &pool,
        created.id,
        &UpdateProvider {
            name: Some("After".to_string()),
            link: None,
            country: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}
