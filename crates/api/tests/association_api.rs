//! HTTP-level integration tests for the junction resources:
//! `/model-prompts`, `/evaluator-prompts`, and `/prompt-tags`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_resource, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn seed_model(pool: &PgPool) -> String {
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
            "name": "acme-7b",
            "link": "https://example.com/model",
            "description": "a test model",
            "version": "1.0",
            "param_count": 7000000000i64,
            "context_window": 8192,
            "provider_id": provider["id"]
        }),
    )
    .await;
    model["id"].as_str().unwrap().to_string()
}

async fn seed_prompt(pool: &PgPool, text: &str) -> String {
    let prompt = create_resource(
        pool,
        "/api/v1/prompts",
        serde_json::json!({"text": text, "token_count": 5}),
    )
    .await;
    prompt["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Model-prompts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn model_prompt_create_and_get_by_composite_key(pool: PgPool) {
    let model_id = seed_model(&pool).await;
    let prompt_id = seed_prompt(&pool, "Say hello").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/model-prompts",
        serde_json::json!({"model_id": model_id, "prompt_id": prompt_id, "sort_order": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let fetched = get(
        common::build_test_app(pool),
        &format!("/api/v1/model-prompts/{model_id}/{prompt_id}"),
    )
    .await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let json = body_json(fetched).await;
    assert_eq!(json["sort_order"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn model_prompt_with_unknown_prompt_returns_400(pool: PgPool) {
    let model_id = seed_model(&pool).await;
    let phantom = uuid::Uuid::new_v4();

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/model-prompts",
        serde_json::json!({"model_id": model_id, "prompt_id": phantom}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("prompt"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_sort_order_returns_400_conflict(pool: PgPool) {
    let model_id = seed_model(&pool).await;
    let first = seed_prompt(&pool, "first").await;
    let second = seed_prompt(&pool, "second").await;

    create_resource(
        &pool,
        "/api/v1/model-prompts",
        serde_json::json!({"model_id": model_id, "prompt_id": first, "sort_order": 1}),
    )
    .await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/model-prompts",
        serde_json::json!({"model_id": model_id, "prompt_id": second, "sort_order": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("sort_order"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn model_prompt_update_changes_sort_order_only(pool: PgPool) {
    let model_id = seed_model(&pool).await;
    let prompt_id = seed_prompt(&pool, "movable").await;
    create_resource(
        &pool,
        "/api/v1/model-prompts",
        serde_json::json!({"model_id": model_id, "prompt_id": prompt_id, "sort_order": 1}),
    )
    .await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/model-prompts/{model_id}/{prompt_id}"),
        serde_json::json!({"sort_order": 5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["sort_order"], 5);
    assert_eq!(json["model_id"], model_id.as_str());
    assert_eq!(json["prompt_id"], prompt_id.as_str());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn model_prompt_delete_then_404(pool: PgPool) {
    let model_id = seed_model(&pool).await;
    let prompt_id = seed_prompt(&pool, "gone soon").await;
    create_resource(
        &pool,
        "/api/v1/model-prompts",
        serde_json::json!({"model_id": model_id, "prompt_id": prompt_id}),
    )
    .await;

    let uri = format!("/api/v1/model-prompts/{model_id}/{prompt_id}");
    let first = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = delete(common::build_test_app(pool), &uri).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Evaluator-prompts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn evaluator_prompt_round_trip(pool: PgPool) {
    let evaluator = create_resource(
        &pool,
        "/api/v1/evaluators",
        serde_json::json!({"name": "gpt-judge"}),
    )
    .await;
    let evaluator_id = evaluator["id"].as_str().unwrap();
    let prompt_id = seed_prompt(&pool, "Judge this").await;

    create_resource(
        &pool,
        "/api/v1/evaluator-prompts",
        serde_json::json!({"evaluator_id": evaluator_id, "prompt_id": prompt_id}),
    )
    .await;

    let fetched = get(
        common::build_test_app(pool),
        &format!("/api/v1/evaluator-prompts/{evaluator_id}/{prompt_id}"),
    )
    .await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let json = body_json(fetched).await;
    assert_eq!(json["evaluator_id"], evaluator_id);
    assert_eq!(json["prompt_id"], prompt_id.as_str());
}

// ---------------------------------------------------------------------------
// Prompt-tags
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn prompt_tag_create_list_and_delete(pool: PgPool) {
    let prompt_id = seed_prompt(&pool, "tagged").await;
    let tag = create_resource(&pool, "/api/v1/tags", serde_json::json!({"name": "fluency"})).await;
    let tag_id = tag["id"].as_str().unwrap();

    create_resource(
        &pool,
        "/api/v1/prompt-tags",
        serde_json::json!({"prompt_id": prompt_id, "tag_id": tag_id}),
    )
    .await;

    let listed = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/prompt-tags?prompt_id={prompt_id}"),
    )
    .await;
    let json = body_json(listed).await;
    assert_eq!(json["totalItems"], 1);

    let removed = delete(
        common::build_test_app(pool),
        &format!("/api/v1/prompt-tags/{prompt_id}/{tag_id}"),
    )
    .await;
    assert_eq!(removed.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_tag_name_returns_400_conflict(pool: PgPool) {
    create_resource(&pool, "/api/v1/tags", serde_json::json!({"name": "fluency"})).await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/tags",
        serde_json::json!({"name": "fluency"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("already exists"));
}
