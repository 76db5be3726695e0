//! HTTP-level integration tests for the reseller storefront view.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use effekt_db::models::engine::CreateStage;
use effekt_db::models::reseller::{CreateOverride, UpdateResellerSettings};
use effekt_db::repositories::{ImportRepo, OverrideRepo, SettingsRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const ENGINE_URI: &str = "/api/v1/storefront/tunerx/brands/volvo/xc60/2018-2021/d4-190hk";

async fn seed_path(pool: &PgPool) {
    let (brand_id,): (i64,) =
        sqlx::query_as("INSERT INTO brands (name, slug) VALUES ('Volvo', 'volvo') RETURNING id")
            .fetch_one(pool)
            .await
            .unwrap();
    let model_id = ImportRepo::create_model(pool, brand_id, "XC60", "xc60")
        .await
        .unwrap();
    let year_id = ImportRepo::create_year(pool, model_id, "2018-2021", "2018-2021")
        .await
        .unwrap();
    ImportRepo::create_engine_with_stage(
        pool,
        year_id,
        "D4 190hk",
        "d4-190hk",
        "diesel",
        "Steg 1",
        Some(CreateStage {
            orig_hk: Some(190),
            tuned_hk: Some(240),
            orig_nm: Some(400),
            tuned_nm: Some(480),
            price: Some(4995),
        }),
    )
    .await
    .unwrap();
}

fn override_doc(reseller_id: &str) -> CreateOverride {
    CreateOverride {
        reseller_id: reseller_id.to_string(),
        brand: Some("Volvo".to_string()),
        model: None,
        year_range: None,
        engine: None,
        stage_name: "Steg 1".to_string(),
        price: None,
        tuned_hk: None,
        tuned_nm: None,
        description: None,
    }
}

// ---------------------------------------------------------------------------
// Override resolution through the HTTP surface
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn storefront_without_overrides_matches_base_catalog(pool: PgPool) {
    seed_path(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, ENGINE_URI).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["reseller_id"], "tunerx");
    let stage = &json["data"]["stages"][0];
    assert_eq!(stage["price"], 4995);
    assert_eq!(stage["tuned_hk"], 240);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn brand_wide_override_coalesces_price_only(pool: PgPool) {
    seed_path(&pool).await;
    let mut doc = override_doc("tunerx");
    doc.price = Some(3995);
    OverrideRepo::create(&pool, &doc).await.unwrap();
    let app = common::build_test_app(pool);

    let json = body_json(get(app, ENGINE_URI).await).await;
    let stage = &json["data"]["stages"][0];

    // Price comes from the override, figures stay base.
    assert_eq!(stage["price"], 3995);
    assert_eq!(stage["tuned_hk"], 240);
    assert_eq!(stage["tuned_nm"], 480);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn fully_qualified_override_beats_brand_wide(pool: PgPool) {
    seed_path(&pool).await;

    let mut brand_wide = override_doc("tunerx");
    brand_wide.price = Some(3995);
    OverrideRepo::create(&pool, &brand_wide).await.unwrap();

    let mut specific = override_doc("tunerx");
    specific.model = Some("XC60".to_string());
    specific.year_range = Some("2018-2021".to_string());
    specific.engine = Some("D4 190hk".to_string());
    specific.price = Some(2995);
    specific.tuned_hk = Some(250);
    OverrideRepo::create(&pool, &specific).await.unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, ENGINE_URI).await).await;
    let stage = &json["data"]["stages"][0];

    assert_eq!(stage["price"], 2995);
    assert_eq!(stage["tuned_hk"], 250);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn other_resellers_overrides_do_not_leak(pool: PgPool) {
    seed_path(&pool).await;
    let mut doc = override_doc("competitor");
    doc.price = Some(1000);
    OverrideRepo::create(&pool, &doc).await.unwrap();
    let app = common::build_test_app(pool);

    let json = body_json(get(app, ENGINE_URI).await).await;
    assert_eq!(json["data"]["stages"][0]["price"], 4995);
}

// ---------------------------------------------------------------------------
// Description precedence
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn global_description_fills_in_when_no_scoped_override_has_one(pool: PgPool) {
    seed_path(&pool).await;

    // Brand IS NULL document: a global per-stage-name description.
    let mut global = override_doc("tunerx");
    global.brand = None;
    global.description = Some("Our house Steg 1 text".to_string());
    OverrideRepo::create(&pool, &global).await.unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, ENGINE_URI).await).await;
    assert_eq!(
        json["data"]["stages"][0]["description"],
        "Our house Steg 1 text"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn scoped_override_description_beats_the_global_one(pool: PgPool) {
    seed_path(&pool).await;

    let mut global = override_doc("tunerx");
    global.brand = None;
    global.description = Some("Global text".to_string());
    OverrideRepo::create(&pool, &global).await.unwrap();

    let mut scoped = override_doc("tunerx");
    scoped.description = Some("Volvo-specific text".to_string());
    OverrideRepo::create(&pool, &scoped).await.unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, ENGINE_URI).await).await;
    assert_eq!(json["data"]["stages"][0]["description"], "Volvo-specific text");
}

// ---------------------------------------------------------------------------
// Reseller settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn hiding_addons_empties_the_stage_addon_lists(pool: PgPool) {
    seed_path(&pool).await;
    sqlx::query("INSERT INTO addons (title, fuels) VALUES ('Exhaust flap', '{diesel}')")
        .execute(&pool)
        .await
        .unwrap();
    SettingsRepo::patch(
        &pool,
        "tunerx",
        &UpdateResellerSettings {
            display_name: Some("Tuner X".to_string()),
            show_addons: Some(false),
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, ENGINE_URI).await).await;

    assert_eq!(json["data"]["display_name"], "Tuner X");
    assert!(json["data"]["stages"][0]["addons"]
        .as_array()
        .unwrap()
        .is_empty());
}
