mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn monthly_quote_has_no_discount() {
    let app = common::test_app().await;
    let (status, body) = common::post_json(
        &app,
        "/api/checkout/quote",
        &json!({
            "items": [
                { "boxId": 1, "quantity": 2 },
                { "boxId": 2, "quantity": 1 }
            ],
            "plan": "monthly"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "quote failed: {body}");

    let quote = common::parse(&body);
    assert_eq!(quote["currency"], "NGN");
    assert_eq!(quote["itemCount"], 3);
    assert_eq!(quote["lines"][0]["lineTotal"], 6_900_000);
    assert_eq!(quote["subtotal"], 8_300_000);
    assert_eq!(quote["discountPercent"], 0);
    assert_eq!(quote["discount"], 0);
    assert_eq!(quote["total"], 8_300_000);
}

#[tokio::test]
async fn annual_quote_applies_discount() {
    let app = common::test_app().await;
    let (status, body) = common::post_json(
        &app,
        "/api/checkout/quote",
        &json!({ "items": [{ "boxId": 3, "quantity": 1 }], "plan": "annual" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let quote = common::parse(&body);
    assert_eq!(quote["plan"], "annual");
    assert_eq!(quote["period"], "year");
    assert_eq!(quote["subtotal"], 2_600_000);
    assert_eq!(quote["discountPercent"], 15);
    assert_eq!(quote["discount"], 390_000);
    assert_eq!(quote["total"], 2_210_000);
}

#[tokio::test]
async fn repeated_boxes_merge_and_quantities_clamp() {
    let app = common::test_app().await;
    let (status, body) = common::post_json(
        &app,
        "/api/checkout/quote",
        &json!({
            "items": [
                { "boxId": 4, "quantity": 0 },
                { "boxId": 4 }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "quote failed: {body}");

    let quote = common::parse(&body);
    assert_eq!(quote["lines"].as_array().map(Vec::len), Some(1));
    assert_eq!(quote["lines"][0]["quantity"], 2);
    assert_eq!(quote["total"], 3_100_000);
}

#[tokio::test]
async fn empty_cart_is_rejected() {
    let app = common::test_app().await;
    let (status, body) =
        common::post_json(&app, "/api/checkout/quote", &json!({ "items": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(common::parse(&body)["error"]["message"], "Cart is empty.");
}

#[tokio::test]
async fn unknown_box_in_cart_returns_404() {
    let app = common::test_app().await;
    let (status, body) = common::post_json(
        &app,
        "/api/checkout/quote",
        &json!({ "items": [{ "boxId": 1 }, { "boxId": 777 }] }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(common::parse(&body)["error"]["message"], "Box 777 not found.");
}

#[tokio::test]
async fn huge_quantities_are_rejected() {
    let app = common::test_app().await;
    let (status, body) = common::post_json(
        &app,
        "/api/checkout/quote",
        &json!({
            "items": [
                { "boxId": 1, "quantity": 9_000_000_000_000_000_000_i64 },
                { "boxId": 2, "quantity": 9_000_000_000_000_000_000_i64 }
            ],
            "plan": "annual"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "quote: {body}");
    assert_eq!(common::parse(&body)["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn quantity_at_limit_is_priced() {
    let app = common::test_app().await;
    let (status, body) = common::post_json(
        &app,
        "/api/checkout/quote",
        &json!({ "items": [{ "boxId": 7, "quantity": 1000 }] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "quote failed: {body}");
    assert_eq!(common::parse(&body)["total"], 1_020_000_000_i64);
}
