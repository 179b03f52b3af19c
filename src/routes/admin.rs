use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

use crate::auth::middleware::AdminUser;
use crate::dto::{SubscriptionWithBoxResponse, UserResponse};
use crate::entities::{SubscriptionStatus, catalog_box, subscription, user};
use crate::error::AppError;
use crate::state::AppState;

/// Admin dashboard router: `/admin/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/subscriptions", get(list_subscriptions))
}

#[derive(Deserialize)]
struct SubscriptionFilter {
    status: Option<SubscriptionStatus>,
}

/// `GET /api/admin/users`
async fn list_users(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// `GET /api/admin/subscriptions?status=...`
async fn list_subscriptions(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(filter): Query<SubscriptionFilter>,
) -> Result<Json<Vec<SubscriptionWithBoxResponse>>, AppError> {
    let mut query = subscription::Entity::find().order_by_asc(subscription::Column::Id);

    if let Some(status) = filter.status {
        query = query.filter(subscription::Column::Status.eq(status.as_str()));
    }

    let rows = query
        .find_also_related(catalog_box::Entity)
        .all(&state.db)
        .await?;

    Ok(Json(
        rows.into_iter()
            .map(|(sub, b)| SubscriptionWithBoxResponse::new(sub, b))
            .collect(),
    ))
}
