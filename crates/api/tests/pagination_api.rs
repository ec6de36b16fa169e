//! HTTP-level integration tests for the pagination envelope and list
//! query parameters.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_resource, get};
use sqlx::PgPool;

async fn seed_providers(pool: &PgPool, count: usize) {
    for i in 0..count {
        create_resource(
            pool,
            "/api/v1/providers",
            serde_json::json!({
                "name": format!("provider-{i:02}"),
                "link": "https://example.com",
                "country": if i % 2 == 0 { "US" } else { "DE" }
            }),
        )
        .await;
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn envelope_has_camel_case_keys(pool: PgPool) {
    seed_providers(&pool, 3).await;

    let response = get(common::build_test_app(pool), "/api/v1/providers").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["totalItems"], 3);
    assert_eq!(json["totalPages"], 1);
    assert_eq!(json["currentPage"], 1);
    assert_eq!(json["items"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn page_and_limit_slice_the_result(pool: PgPool) {
    seed_providers(&pool, 12).await;

    let response = get(
        common::build_test_app(pool),
        "/api/v1/providers?page=3&limit=5",
    )
    .await;
    let json = body_json(response).await;

    assert_eq!(json["totalItems"], 12);
    assert_eq!(json["totalPages"], 3);
    assert_eq!(json["currentPage"], 3);
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
    assert_eq!(json["items"][0]["name"], "provider-10");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn out_of_range_page_returns_200_with_empty_items(pool: PgPool) {
    seed_providers(&pool, 2).await;

    let response = get(common::build_test_app(pool), "/api/v1/providers?page=50").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["totalItems"], 2);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn maximum_page_number_returns_200_with_empty_items(pool: PgPool) {
    seed_providers(&pool, 2).await;

    let path = format!("/api/v1/providers?page={}&limit=100", i64::MAX);
    let response = get(common::build_test_app(pool), &path).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["totalItems"], 2);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn zero_page_is_rejected_as_validation_error(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/providers?page=0").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert!(json["errors"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn limit_above_cap_is_rejected(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/providers?limit=500").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_matches_case_insensitive_substring(pool: PgPool) {
    for name in ["Anthropic", "OpenAI", "Mistral"] {
        create_resource(
            &pool,
            "/api/v1/providers",
            serde_json::json!({"name": name, "link": "https://example.com"}),
        )
        .await;
    }

    let response = get(
        common::build_test_app(pool),
        "/api/v1/providers?search=ANTHRO",
    )
    .await;
    let json = body_json(response).await;

    assert_eq!(json["totalItems"], 1);
    assert_eq!(json["items"][0]["name"], "Anthropic");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_and_country_filters_combine(pool: PgPool) {
    seed_providers(&pool, 10).await;

    let response = get(
        common::build_test_app(pool),
        "/api/v1/providers?search=provider&country=US",
    )
    .await;
    let json = body_json(response).await;

    assert_eq!(json["totalItems"], 5);
    for item in json["items"].as_array().unwrap() {
        assert_eq!(item["country"], "US");
    }
}
