use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::dto::{BoxDetailResponse, BoxItemResponse, BoxResponse};
use crate::entities::{box_product, catalog_box, product};
use crate::error::AppError;
use crate::state::AppState;

/// Catalog router: `/boxes/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_boxes))
        .route("/{id}", get(get_box))
}

/// `GET /api/boxes`
async fn list_boxes(State(state): State<AppState>) -> Result<Json<Vec<BoxResponse>>, AppError> {
    let boxes = catalog_box::Entity::find()
        .order_by_asc(catalog_box::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(boxes.into_iter().map(BoxResponse::from).collect()))
}

/// `GET /api/boxes/{id}`
async fn get_box(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<BoxDetailResponse>, AppError> {
    let catalog_box = catalog_box::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Box not found.".to_string()))?;

    let links = box_product::Entity::find()
        .filter(box_product::Column::BoxId.eq(id))
        .order_by_asc(box_product::Column::ProductId)
        .find_also_related(product::Entity)
        .all(&state.db)
        .await?;

    // Links to deleted products are skipped
    let products = links
        .into_iter()
        .filter_map(|(link, product)| product.map(|p| BoxItemResponse::new(&link, p)))
        .collect();

    Ok(Json(BoxDetailResponse {
        summary: catalog_box.into(),
        products,
    }))
}
