use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

use crate::auth::middleware::SellerUser;
use crate::dto::ProductResponse;
use crate::entities::product;
use crate::error::AppError;
use crate::state::AppState;

/// Seller dashboard router: `/seller/...`. Every route needs a verified seller.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}/inventory", patch(update_inventory))
}

#[derive(Deserialize)]
struct CreateProductRequest {
    name: String,
    price: i64,
    sku: String,
    #[serde(default)]
    inventory: i32,
}

#[derive(Deserialize)]
struct UpdateInventoryRequest {
    inventory: i32,
}

/// Longest product name the `product.name` column holds.
const MAX_PRODUCT_NAME_CHARS: usize = 200;

fn validate_product(body: &CreateProductRequest) -> Result<(), String> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err("Product name is required.".to_string());
    }
    if name.chars().count() > MAX_PRODUCT_NAME_CHARS {
        return Err(format!(
            "Product name must be at most {MAX_PRODUCT_NAME_CHARS} characters."
        ));
    }
    if body.price <= 0 {
        return Err("Price must be a positive amount in kobo.".to_string());
    }
    if body.sku.trim().is_empty() || body.sku.trim().len() > 64 {
        return Err("SKU must be between 1 and 64 characters.".to_string());
    }
    validate_inventory(body.inventory)
}

fn validate_inventory(inventory: i32) -> Result<(), String> {
    if inventory < 0 {
        return Err("Inventory cannot be negative.".to_string());
    }
    Ok(())
}

/// `GET /api/seller/products`
async fn list_products(
    State(state): State<AppState>,
    SellerUser(seller): SellerUser,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = product::Entity::find()
        .filter(product::Column::SupplierId.eq(seller.id))
        .order_by_asc(product::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// `POST /api/seller/products`
async fn create_product(
    State(state): State<AppState>,
    SellerUser(seller): SellerUser,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    validate_product(&body).map_err(AppError::BadRequest)?;

    let created = product::ActiveModel {
        name: Set(body.name.trim().to_string()),
        price: Set(body.price),
        sku: Set(body.sku.trim().to_string()),
        supplier_id: Set(Some(seller.id)),
        inventory: Set(body.inventory),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(|e| AppError::from_write(e, "SKU is already in use."))?;

    tracing::info!(
        product_id = created.id,
        supplier_id = seller.id,
        sku = %created.sku,
        "Product listed"
    );

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// `PATCH /api/seller/products/{id}/inventory`
async fn update_inventory(
    State(state): State<AppState>,
    SellerUser(seller): SellerUser,
    Path(id): Path<i32>,
    Json(body): Json<UpdateInventoryRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    validate_inventory(body.inventory).map_err(AppError::BadRequest)?;

    // Other sellers' products are reported as missing
    let existing = product::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .filter(|p| p.supplier_id == Some(seller.id))
        .ok_or_else(|| AppError::NotFound("Product not found.".to_string()))?;

    let mut active: product::ActiveModel = existing.into();
    active.inventory = Set(body.inventory);
    let updated = active.update(&state.db).await?;

    Ok(Json(updated.into()))
}
