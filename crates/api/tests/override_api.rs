//! HTTP-level integration tests for admin auth and the override endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, delete_auth, get_auth, patch_json_auth, post_json, post_json_auth,
    put_json_auth,
};
use sqlx::PgPool;

fn override_body(reseller_id: &str, brand: Option<&str>, price: Option<i32>) -> serde_json::Value {
    serde_json::json!({
        "reseller_id": reseller_id,
        "brand": brand,
        "stage_name": "Steg 1",
        "price": price,
    })
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_correct_password_returns_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(app).await;
    assert!(!token.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_wrong_password_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "password": "nope" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Authorization on admin routes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn override_create_requires_a_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/overrides",
        override_body("tunerx", Some("Volvo"), Some(3995)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn garbage_token_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/overrides/tunerx", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Override CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn override_crud_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(app.clone()).await;

    // Create.
    let response = post_json_auth(
        app.clone(),
        "/api/v1/overrides",
        override_body("tunerx", Some("Volvo"), Some(3995)),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["price"], 3995);

    // List.
    let response = get_auth(app.clone(), "/api/v1/overrides/tunerx", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);

    // Patch the price, leave the rest alone.
    let response = patch_json_auth(
        app.clone(),
        &format!("/api/v1/overrides/{id}"),
        serde_json::json!({ "price": 2995 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let patched = body_json(response).await;
    assert_eq!(patched["data"]["price"], 2995);
    assert_eq!(patched["data"]["brand"], "Volvo");

    // Delete.
    let response = delete_auth(app.clone(), &format!("/api/v1/overrides/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(app, &format!("/api/v1/overrides/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_scope_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(app.clone()).await;

    let body = override_body("tunerx", Some("Volvo"), Some(3995));
    let response = post_json_auth(app.clone(), "/api/v1/overrides", body.clone(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(app, "/api/v1/overrides", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn override_without_stage_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(app.clone()).await;

    let response = post_json_auth(
        app,
        "/api/v1/overrides",
        serde_json::json!({ "reseller_id": "tunerx", "brand": "Volvo", "stage_name": "  " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Bulk replace
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn bulk_replace_swaps_the_scoped_set_and_keeps_globals(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(app.clone()).await;

    post_json_auth(
        app.clone(),
        "/api/v1/overrides",
        override_body("tunerx", Some("Volvo"), Some(3995)),
        &token,
    )
    .await;

    // A global description document, unaffected by the scoped replace.
    put_json_auth(
        app.clone(),
        "/api/v1/overrides/tunerx/descriptions",
        serde_json::json!({ "descriptions": [
            { "stage_name": "Steg 1", "description": "House text" }
        ]}),
        &token,
    )
    .await;

    let response = put_json_auth(
        app.clone(),
        "/api/v1/overrides/tunerx/bulk",
        serde_json::json!({ "documents": [
            override_body("tunerx", Some("BMW"), Some(2995)),
            override_body("tunerx", Some("Audi"), None),
        ]}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app, "/api/v1/overrides/tunerx", &token).await;
    let json = body_json(response).await;
    let docs = json["data"].as_array().unwrap();

    // Two new scoped documents plus the untouched global one.
    assert_eq!(docs.len(), 3);
    assert!(docs.iter().any(|d| d["brand"] == "BMW"));
    assert!(docs.iter().any(|d| d["brand"].is_null()));
    assert!(!docs.iter().any(|d| d["brand"] == "Volvo"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bulk_replace_rejects_documents_without_a_brand(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(app.clone()).await;

    let response = put_json_auth(
        app,
        "/api/v1/overrides/tunerx/bulk",
        serde_json::json!({ "documents": [ override_body("tunerx", None, Some(100)) ] }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Reseller settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn settings_default_then_patch(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(app.clone()).await;

    let response = get_auth(app.clone(), "/api/v1/resellers/tunerx/settings", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["show_addons"], true);

    let response = patch_json_auth(
        app.clone(),
        "/api/v1/resellers/tunerx/settings",
        serde_json::json!({ "show_addons": false, "display_name": "Tuner X" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app, "/api/v1/resellers/tunerx/settings", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["show_addons"], false);
    assert_eq!(json["data"]["display_name"], "Tuner X");
}
