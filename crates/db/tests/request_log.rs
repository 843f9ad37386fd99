//! Integration tests for the inference request log:
//! - feedback initialized empty, updatable afterwards
//! - feedback is the only mutable field
//! - payload length bounds

use assert_matches::assert_matches;
use mlregistry_core::error::CoreError;
use mlregistry_db::models::algorithm::CreateMlAlgorithm;
use mlregistry_db::models::endpoint::CreateEndpoint;
use mlregistry_db::models::request::CreateMlRequest;
use mlregistry_db::repositories::{EndpointRepo, MlAlgorithmRepo, MlRequestRepo};
use mlregistry_db::DbError;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_algorithm(pool: &PgPool) -> i64 {
    let endpoint = EndpointRepo::create(
        pool,
        &CreateEndpoint {
            name: "weather-clf".to_string(),
            owner: "alice".to_string(),
        },
    )
    .await
    .unwrap();

    MlAlgorithmRepo::create(
        pool,
        &CreateMlAlgorithm {
            endpoint_id: endpoint.id,
            name: "rf".to_string(),
            description: "random forest".to_string(),
            code: "<code>".to_string(),
            version: "v1".to_string(),
            owner: "alice".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

fn new_request(algorithm_id: i64) -> CreateMlRequest {
    CreateMlRequest {
        algorithm_id,
        input_data: serde_json::json!({"x": 1}).to_string(),
        full_response: "{}".to_string(),
        response: serde_json::json!({"y": 0}).to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test: feedback lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_feedback_initialized_empty(pool: PgPool) {
    let algorithm_id = seed_algorithm(&pool).await;
    let request = MlRequestRepo::create(&pool, &new_request(algorithm_id))
        .await
        .unwrap();
    assert_eq!(request.feedback, "");
    assert_eq!(request.input_data, r#"{"x":1}"#);
    assert_eq!(request.response, r#"{"y":0}"#);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_feedback_leaves_other_fields_unchanged(pool: PgPool) {
    let algorithm_id = seed_algorithm(&pool).await;
    let request = MlRequestRepo::create(&pool, &new_request(algorithm_id))
        .await
        .unwrap();

    let updated = MlRequestRepo::update_feedback(&pool, request.id, "x")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.feedback, "x");
    assert_eq!(updated.input_data, request.input_data);
    assert_eq!(updated.full_response, request.full_response);
    assert_eq!(updated.response, request.response);
    assert_eq!(updated.created_at, request.created_at);

    // A fresh read agrees.
    let reloaded = MlRequestRepo::find_by_id(&pool, request.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.feedback, "x");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_feedback_overwrites_previous_value(pool: PgPool) {
    let algorithm_id = seed_algorithm(&pool).await;
    let request = MlRequestRepo::create(&pool, &new_request(algorithm_id))
        .await
        .unwrap();

    MlRequestRepo::update_feedback(&pool, request.id, r#"{"rating":1}"#)
        .await
        .unwrap();
    let updated = MlRequestRepo::update_feedback(&pool, request.id, r#"{"rating":5}"#)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.feedback, r#"{"rating":5}"#);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_feedback_unknown_id_returns_none(pool: PgPool) {
    assert!(MlRequestRepo::update_feedback(&pool, 4242, "x")
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: payload bounds
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_oversized_input_data_rejected(pool: PgPool) {
    let algorithm_id = seed_algorithm(&pool).await;
    let mut input = new_request(algorithm_id);
    input.input_data = "x".repeat(10001);

    let err = MlRequestRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Validation(_)));

    let logged = MlRequestRepo::list_by_algorithm(&pool, algorithm_id)
        .await
        .unwrap();
    assert!(logged.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_oversized_feedback_rejected(pool: PgPool) {
    let algorithm_id = seed_algorithm(&pool).await;
    let request = MlRequestRepo::create(&pool, &new_request(algorithm_id))
        .await
        .unwrap();

    let err = MlRequestRepo::update_feedback(&pool, request.id, &"f".repeat(10001))
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Validation(_)));

    // The stored feedback is untouched.
    let reloaded = MlRequestRepo::find_by_id(&pool, request.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.feedback, "");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_feedback_at_bound_accepted(pool: PgPool) {
    let algorithm_id = seed_algorithm(&pool).await;
    let request = MlRequestRepo::create(&pool, &new_request(algorithm_id))
        .await
        .unwrap();

    let at_bound = "f".repeat(10000);
    let updated = MlRequestRepo::update_feedback(&pool, request.id, &at_bound)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.feedback.chars().count(), 10000);
}
