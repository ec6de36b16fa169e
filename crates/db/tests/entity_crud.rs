//! Integration tests for entity CRUD at the repository layer.
//!
//! Exercises create/find/update/delete against a real database, including
//! the full chain provider -> model -> response and dataset -> datapoint.

use sqlx::PgPool;

use lmeval_db::models::dataset::{CreateDataset, UpdateDataset};
use lmeval_db::models::datapoint::CreateDatapoint;
use lmeval_db::models::model::{CreateModel, UpdateModel};
use lmeval_db::models::prompt::CreatePrompt;
use lmeval_db::models::provider::{CreateProvider, UpdateProvider};
use lmeval_db::models::response::{CreateResponse, UpdateResponse};
use lmeval_db::repositories::{
    DatapointRepo, DatasetRepo, ModelRepo, PromptRepo, ProviderRepo, ResponseRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_provider(name: &str) -> CreateProvider {
    CreateProvider {
        name: name.to_string(),
        link: "https://example.com".to_string(),
        country: Some("US".to_string()),
    }
}

fn new_model(provider_id: lmeval_core::types::DbId, name: &str) -> CreateModel {
    CreateModel {
        name: name.to_string(),
        link: "https://example.com/model".to_string(),
        description: "a test model".to_string(),
        version: "1.0".to_string(),
        param_count: 7_000_000_000,
        context_window: 8192,
        temperature: Some(0.7),
        top_p: None,
        provider_id,
    }
}

fn new_prompt(text: &str) -> CreatePrompt {
    CreatePrompt {
        text: text.to_string(),
        token_count: 12,
        description: None,
    }
}

// ---------------------------------------------------------------------------
// Providers
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_and_find_provider(pool: PgPool) {
    let created = ProviderRepo::create(&pool, &new_provider("Acme AI"))
        .await
        .unwrap();
    assert_eq!(created.name, "Acme AI");
    assert_eq!(created.country.as_deref(), Some("US"));

    let found = ProviderRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Acme AI");
}

#[sqlx::test]
async fn partial_update_leaves_other_fields(pool: PgPool) {
    let created = ProviderRepo::create(&pool, &new_provider("Before"))
        .await
        .unwrap();

    let update = UpdateProvider {
        name: Some("After".to_string()),
        link: None,
        country: None,
    };
    let updated = ProviderRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "After");
    assert_eq!(updated.link, created.link);
    assert_eq!(updated.country, created.country);
}

#[sqlx::test]
async fn update_missing_provider_returns_none(pool: PgPool) {
    let update = UpdateProvider {
        name: Some("Ghost".to_string()),
        link: None,
        country: None,
    };
    let result = ProviderRepo::update(&pool, uuid::Uuid::new_v4(), &update)
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test]
async fn delete_provider_twice(pool: PgPool) {
    let created = ProviderRepo::create(&pool, &new_provider("Ephemeral"))
        .await
        .unwrap();

    assert!(ProviderRepo::delete(&pool, created.id).await.unwrap());
    assert!(!ProviderRepo::delete(&pool, created.id).await.unwrap());
    assert!(ProviderRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Models
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_model_and_fetch_detail(pool: PgPool) {
    let provider = ProviderRepo::create(&pool, &new_provider("Acme AI"))
        .await
        .unwrap();
    let model = ModelRepo::create(&pool, &new_model(provider.id, "acme-7b"))
        .await
        .unwrap();

    let detail = ModelRepo::find_detail(&pool, model.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.model.name, "acme-7b");
    assert_eq!(detail.provider.id, provider.id);
    assert_eq!(detail.provider.name, "Acme AI");
}

#[sqlx::test]
async fn move_model_to_another_provider(pool: PgPool) {
    let first = ProviderRepo::create(&pool, &new_provider("First"))
        .await
        .unwrap();
    let second = ProviderRepo::create(&pool, &new_provider("Second"))
        .await
        .unwrap();
    let model = ModelRepo::create(&pool, &new_model(first.id, "wanderer"))
        .await
        .unwrap();

    let update = UpdateModel {
        name: None,
        link: None,
        description: None,
        version: None,
        param_count: None,
        context_window: None,
        temperature: None,
        top_p: None,
        provider_id: Some(second.id),
    };
    let updated = ModelRepo::update(&pool, model.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.provider_id, second.id);
}

// ---------------------------------------------------------------------------
// Datasets and datapoints
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn dataset_datapoint_chain(pool: PgPool) {
    let dataset = DatasetRepo::create(
        &pool,
        &CreateDataset {
            name: "qa-bench".to_string(),
            description: "question answering".to_string(),
        },
    )
    .await
    .unwrap();

    let datapoint = DatapointRepo::create(
        &pool,
        &CreateDatapoint {
            dataset_id: dataset.id,
            payload: serde_json::json!({"question": "What is 2+2?", "answer": "4"}),
        },
    )
    .await
    .unwrap();

    assert_eq!(datapoint.dataset_id, dataset.id);
    assert_eq!(datapoint.payload["answer"], "4");

    let renamed = DatasetRepo::update(
        &pool,
        dataset.id,
        &UpdateDataset {
            name: Some("qa-bench-v2".to_string()),
            description: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.name, "qa-bench-v2");
    assert_eq!(renamed.description, "question answering");
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn response_crud_round_trip(pool: PgPool) {
    let provider = ProviderRepo::create(&pool, &new_provider("Acme AI"))
        .await
        .unwrap();
    let model = ModelRepo::create(&pool, &new_model(provider.id, "acme-7b"))
        .await
        .unwrap();
    let _prompt = PromptRepo::create(&pool, &new_prompt("Say hello"))
        .await
        .unwrap();
    let dataset = DatasetRepo::create(
        &pool,
        &CreateDataset {
            name: "greetings".to_string(),
            description: "greeting prompts".to_string(),
        },
    )
    .await
    .unwrap();
    let datapoint = DatapointRepo::create(
        &pool,
        &CreateDatapoint {
            dataset_id: dataset.id,
            payload: serde_json::json!({"input": "hello"}),
        },
    )
    .await
    .unwrap();

    let response = ResponseRepo::create(
        &pool,
        &CreateResponse {
            model_id: model.id,
            datapoint_id: datapoint.id,
            generated_text: "Hello there!".to_string(),
            latency_ms: 240,
            token_count: 4,
        },
    )
    .await
    .unwrap();
    assert_eq!(response.generated_text, "Hello there!");

    let updated = ResponseRepo::update(
        &pool,
        response.id,
        &UpdateResponse {
            generated_text: Some("Hi!".to_string()),
            latency_ms: None,
            token_count: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.generated_text, "Hi!");
    assert_eq!(updated.latency_ms, 240);
    // Foreign keys survive a payload-only update.
    assert_eq!(updated.model_id, model.id);
    assert_eq!(updated.datapoint_id, datapoint.id);
}
