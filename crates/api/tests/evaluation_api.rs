//! HTTP-level integration tests for evaluations, feedback, metrics, and
//! scores: domain validation rules and uniqueness conflicts.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_resource, get, post_json};
use sqlx::PgPool;

/// Seed the chain needed for a response and return its id.
async fn seed_response(pool: &PgPool, text: &str) -> String {
    let provider = create_resource(
        pool,
        "/api/v1/providers",
        serde_json::json!({"name": "Acme AI", "link": "https://example.com"}),
    )
    .await;
    let model = create_resource(
        pool,
        "/api/v1/models",
        serde_json::json!({
            "name": format!("model-for-{text}"),
            "link": "https://example.com/model",
            "description": "a test model",
            "version": "1.0",
            "param_count": 1000000i64,
            "context_window": 2048,
            "provider_id": provider["id"]
        }),
    )
    .await;
    let dataset = create_resource(
        pool,
        "/api/v1/datasets",
        serde_json::json!({"name": format!("set-for-{text}"), "description": "test set"}),
    )
    .await;
    let datapoint = create_resource(
        pool,
        "/api/v1/datapoints",
        serde_json::json!({"dataset_id": dataset["id"], "payload": {"input": "hi"}}),
    )
    .await;
    let response = create_resource(
        pool,
        "/api/v1/responses",
        serde_json::json!({
            "model_id": model["id"],
            "datapoint_id": datapoint["id"],
            "generated_text": text,
            "latency_ms": 120,
            "token_count": 3
        }),
    )
    .await;
    response["id"].as_str().unwrap().to_string()
}

async fn seed_evaluator(pool: &PgPool) -> String {
    let evaluator = create_resource(
        pool,
        "/api/v1/evaluators",
        serde_json::json!({"name": "gpt-judge"}),
    )
    .await;
    evaluator["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Single evaluations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn single_evaluation_round_trip(pool: PgPool) {
    let evaluator_id = seed_evaluator(&pool).await;
    let response_id = seed_response(&pool, "hello").await;

    let created = create_resource(
        &pool,
        "/api/v1/evaluations/single",
        serde_json::json!({
            "evaluator_id": evaluator_id,
            "response_id": response_id,
            "score": 0.9,
            "notes": "solid answer"
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let fetched = get(
        common::build_test_app(pool),
        &format!("/api/v1/evaluations/single/{id}"),
    )
    .await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let json = body_json(fetched).await;
    assert_eq!(json["score"], 0.9);
    assert_eq!(json["notes"], "solid answer");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn single_evaluation_with_unknown_response_returns_400(pool: PgPool) {
    let evaluator_id = seed_evaluator(&pool).await;
    let phantom = uuid::Uuid::new_v4();

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/evaluations/single",
        serde_json::json!({
            "evaluator_id": evaluator_id,
            "response_id": phantom,
            "score": 0.5
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Pairwise evaluations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn pairwise_with_identical_responses_returns_422(pool: PgPool) {
    let evaluator_id = seed_evaluator(&pool).await;
    let response_id = seed_response(&pool, "only-one").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/evaluations/pairwise",
        serde_json::json!({
            "evaluator_id": evaluator_id,
            "response_a_id": response_id,
            "response_b_id": response_id
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["errors"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn pairwise_winner_must_be_one_of_the_pair(pool: PgPool) {
    let evaluator_id = seed_evaluator(&pool).await;
    let a = seed_response(&pool, "a").await;
    let b = seed_response(&pool, "b").await;
    let outsider = seed_response(&pool, "c").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/evaluations/pairwise",
        serde_json::json!({
            "evaluator_id": evaluator_id,
            "response_a_id": a,
            "response_b_id": b,
            "winner_response_id": outsider
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn pairwise_round_trip_with_winner(pool: PgPool) {
    let evaluator_id = seed_evaluator(&pool).await;
    let a = seed_response(&pool, "a").await;
    let b = seed_response(&pool, "b").await;

    let created = create_resource(
        &pool,
        "/api/v1/evaluations/pairwise",
        serde_json::json!({
            "evaluator_id": evaluator_id,
            "response_a_id": a,
            "response_b_id": b,
            "winner_response_id": a
        }),
    )
    .await;
    assert_eq!(created["winner_response_id"], a.as_str());

    let listed = get(
        common::build_test_app(pool),
        &format!("/api/v1/evaluations/pairwise?evaluator_id={evaluator_id}"),
    )
    .await;
    let json = body_json(listed).await;
    assert_eq!(json["totalItems"], 1);
}

// ---------------------------------------------------------------------------
// Feedback and scores
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn feedback_rating_out_of_range_returns_422(pool: PgPool) {
    let response_id = seed_response(&pool, "rated").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/feedback",
        serde_json::json!({
            "response_id": response_id,
            "content": "way off",
            "rating": 9
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn second_score_for_same_metric_and_response_conflicts(pool: PgPool) {
    let response_id = seed_response(&pool, "scored").await;
    let metric = create_resource(
        &pool,
        "/api/v1/metrics",
        serde_json::json!({
            "name": "accuracy",
            "description": "exact match",
            "min_value": 0.0,
            "max_value": 1.0,
            "step": 0.1
        }),
    )
    .await;

    create_resource(
        &pool,
        "/api/v1/scores",
        serde_json::json!({
            "metric_id": metric["id"],
            "response_id": response_id,
            "value": 0.8
        }),
    )
    .await;

    let second = post_json(
        common::build_test_app(pool),
        "/api/v1/scores",
        serde_json::json!({
            "metric_id": metric["id"],
            "response_id": response_id,
            "value": 0.9
        }),
    )
    .await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let json = body_json(second).await;
    assert!(json["message"].as_str().unwrap().contains("already exists"));
}
