use std::collections::HashMap;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::Deserialize;

use crate::entities::{Plan, catalog_box};
use crate::error::AppError;
use crate::pricing::{Quote, QuoteLine};
use crate::state::AppState;

/// Build the checkout route group: `/checkout/...`
pub fn router() -> Router<AppState> {
    Router::new().route("/quote", post(quote))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartLine {
    box_id: i32,
    #[serde(default = "default_quantity")]
    quantity: i64,
}

const fn default_quantity() -> i64 {
    1
}

#[derive(Deserialize)]
struct QuoteRequest {
    items: Vec<CartLine>,
    #[serde(default)]
    plan: Plan,
}

/// Most units of one box a single order may carry.
const MAX_LINE_QUANTITY: i64 = 1_000;

/// Merge repeated boxes into one line, keeping first-seen order.
///
/// Quantities below one count as one; a merged line above
/// [`MAX_LINE_QUANTITY`] is rejected.
fn merge_lines(items: Vec<CartLine>) -> Result<Vec<(i32, i64)>, String> {
    let mut merged: Vec<(i32, i64)> = Vec::with_capacity(items.len());
    for item in items {
        let quantity = item.quantity.max(1);
        match merged.iter_mut().find(|(id, _)| *id == item.box_id) {
            Some((_, q)) => *q = q.saturating_add(quantity),
            None => merged.push((item.box_id, quantity)),
        }
    }

    if let Some((box_id, _)) = merged.iter().find(|(_, q)| *q > MAX_LINE_QUANTITY) {
        return Err(format!(
            "Quantity for box {box_id} exceeds the limit of {MAX_LINE_QUANTITY}."
        ));
    }
    Ok(merged)
}

/// `POST /api/checkout/quote`
///
/// Prices a cart under a plan. `total` is the amount, in kobo, to hand to the
/// payment provider before the subscription is confirmed.
async fn quote(
    State(state): State<AppState>,
    Json(body): Json<QuoteRequest>,
) -> Result<Json<Quote>, AppError> {
    if body.items.is_empty() {
        return Err(AppError::BadRequest("Cart is empty.".to_string()));
    }

    let lines = merge_lines(body.items).map_err(AppError::BadRequest)?;
    let ids: Vec<i32> = lines.iter().map(|(id, _)| *id).collect();

    let boxes: HashMap<i32, catalog_box::Model> = catalog_box::Entity::find()
        .filter(catalog_box::Column::Id.is_in(ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|b| (b.id, b))
        .collect();

    let priced = lines
        .into_iter()
        .map(|(box_id, quantity)| {
            boxes
                .get(&box_id)
                .map(|b| QuoteLine::new(box_id, b.name.clone(), b.price, quantity))
                .ok_or_else(|| AppError::NotFound(format!("Box {box_id} not found.")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(Quote::new(priced, body.plan)))
}
