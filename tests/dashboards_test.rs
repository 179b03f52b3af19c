mod common;

use axum::http::StatusCode;
use serde_json::json;

async fn seller(app: &axum::Router, email: &str) -> String {
    let (user_id, _) = common::login(app, email).await;
    common::verify_seller(app, user_id).await
}

// ──────────────────────────────────────────────────────────────────────────────
// Seller
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn seller_routes_require_verified_seller() {
    let app = common::test_app().await;

    let (status, _) = common::get(&app, "/api/seller/products").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, buyer_token) = common::login(&app, "buyer@example.com").await;
    let (status, _) = common::get_with_auth(&app, "/api/seller/products", &buyer_token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn seller_lists_and_restocks_own_products() {
    let app = common::test_app().await;
    let token = seller(&app, "grower@example.com").await;

    let (status, body) = common::post_json_with_auth(
        &app,
        "/api/seller/products",
        &json!({ "name": "Yam Tubers (5)", "price": 450_000, "sku": "YAM-001", "inventory": 20 }),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");

    let product = common::parse(&body);
    let product_id = product["id"].as_i64().unwrap_or_default();
    assert_eq!(product["sku"], "YAM-001");
    assert_eq!(product["inventory"], 20);

    let (status, body) = common::get_with_auth(&app, "/api/seller/products", &token).await;
    assert_eq!(status, StatusCode::OK);
    let products = common::parse(&body).as_array().cloned().unwrap_or_default();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Yam Tubers (5)");

    let uri = format!("/api/seller/products/{product_id}/inventory");
    let (status, body) =
        common::patch_json_with_auth(&app, &uri, &json!({ "inventory": 5 }), &token).await;
    assert_eq!(status, StatusCode::OK, "restock failed: {body}");
    assert_eq!(common::parse(&body)["inventory"], 5);

    let (status, _) =
        common::patch_json_with_auth(&app, &uri, &json!({ "inventory": -1 }), &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_sku_conflicts() {
    let app = common::test_app().await;
    let token = seller(&app, "dup@example.com").await;

    // RIC-001 comes from the seeded catalog
    let (status, body) = common::post_json_with_auth(
        &app,
        "/api/seller/products",
        &json!({ "name": "Rice", "price": 100_000, "sku": "RIC-001" }),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(common::parse(&body)["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn overlong_product_name_is_rejected() {
    let app = common::test_app().await;
    let token = seller(&app, "verbose@example.com").await;

    let (status, body) = common::post_json_with_auth(
        &app,
        "/api/seller/products",
        &json!({ "name": "x".repeat(201), "price": 100_000, "sku": "LONG-001" }),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "create: {body}");

    let (_, body) = common::get_with_auth(&app, "/api/seller/products", &token).await;
    assert_eq!(common::parse(&body), json!([]));
}

#[tokio::test]
async fn seller_cannot_restock_someone_elses_product() {
    let app = common::test_app().await;
    let token = seller(&app, "nosy@example.com").await;

    // Seeded products have no supplier
    let (status, _) = common::patch_json_with_auth(
        &app,
        "/api/seller/products/1/inventory",
        &json!({ "inventory": 0 }),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ──────────────────────────────────────────────────────────────────────────────
// Admin
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn admin_routes_reject_non_admins() {
    let app = common::test_app().await;
    let (_, token) = common::login(&app, "curious@example.com").await;

    let (status, _) = common::get_with_auth(&app, "/api/admin/users", &token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = common::get(&app, "/api/admin/subscriptions").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_sees_users_and_filters_subscriptions() {
    let app = common::test_app().await;
    let (buyer_id, _) = common::login(&app, "customer@example.com").await;
    let (admin_id, _) = common::login(&app, "ops@example.com").await;

    let (_, body) = common::switch_role(&app, admin_id, "admin").await;
    let admin_token = common::parse(&body)["token"]
        .as_str()
        .unwrap_or_default()
        .to_string();

    for box_id in [1, 2] {
        common::post_json(
            &app,
            "/api/subscriptions",
            &json!({ "userId": buyer_id, "boxId": box_id, "plan": "monthly" }),
        )
        .await;
    }
    common::patch_json(&app, "/api/subscriptions/1/status", &json!({ "status": "paused" })).await;

    let (status, body) = common::get_with_auth(&app, "/api/admin/users", &admin_token).await;
    assert_eq!(status, StatusCode::OK, "users failed: {body}");
    assert_eq!(common::parse(&body).as_array().map(Vec::len), Some(2));

    let (status, body) =
        common::get_with_auth(&app, "/api/admin/subscriptions", &admin_token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::parse(&body).as_array().map(Vec::len), Some(2));

    let (status, body) =
        common::get_with_auth(&app, "/api/admin/subscriptions?status=paused", &admin_token).await;
    assert_eq!(status, StatusCode::OK);
    let paused = common::parse(&body).as_array().cloned().unwrap_or_default();
    assert_eq!(paused.len(), 1);
    assert_eq!(paused[0]["boxName"], "Pantry Provisions Box");
}
