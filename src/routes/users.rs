use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait};
use serde::Deserialize;

use crate::auth::MAX_NAME_CHARS;
use crate::dto::UserResponse;
use crate::entities::user;
use crate::error::AppError;
use crate::state::AppState;

/// Build the user route group: `/users/...`
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(get_user).patch(update_profile))
}

#[derive(Deserialize)]
struct UpdateProfileRequest {
    name: Option<String>,
    phone: Option<String>,
    address: Option<String>,
}

fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Name must not be empty.".to_string());
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(format!("Name must be at most {MAX_NAME_CHARS} characters."));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> Result<(), String> {
    if phone.len() > 32 {
        return Err("Phone must be at most 32 characters.".to_string());
    }
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'))
    {
        return Err("Phone may only contain digits, spaces, and + - ( ).".to_string());
    }
    Ok(())
}

fn validate_address(address: &str) -> Result<(), String> {
    if address.chars().count() > 500 {
        return Err("Address must be at most 500 characters.".to_string());
    }
    Ok(())
}

/// `GET /api/users/{id}`
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, AppError> {
    let user_model = user::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

    Ok(Json(user_model.into()))
}

/// `PATCH /api/users/{id}`
///
/// Absent fields are left alone; an empty phone or address clears it.
async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user_model = user::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

    let changed = body.name.is_some() || body.phone.is_some() || body.address.is_some();
    if !changed {
        return Ok(Json(user_model.into()));
    }

    let mut active: user::ActiveModel = user_model.into();

    if let Some(name) = body.name {
        let name = name.trim().to_string();
        validate_name(&name).map_err(AppError::BadRequest)?;
        active.name = Set(name);
    }

    if let Some(phone) = body.phone {
        let phone = phone.trim().to_string();
        validate_phone(&phone).map_err(AppError::BadRequest)?;
        active.phone = Set((!phone.is_empty()).then_some(phone));
    }

    if let Some(address) = body.address {
        let address = address.trim().to_string();
        validate_address(&address).map_err(AppError::BadRequest)?;
        active.address = Set((!address.is_empty()).then_some(address));
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated.into()))
}
