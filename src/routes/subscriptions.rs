use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::dto::{SubscriptionResponse, SubscriptionWithBoxResponse};
use crate::entities::{Plan, SubscriptionStatus, catalog_box, subscription, user};
use crate::error::AppError;
use crate::state::AppState;

/// Build the subscription route group: `/subscriptions/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_subscriptions).post(create_subscription))
        .route("/{id}/status", patch(update_status))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    user_id: Option<i32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSubscriptionRequest {
    user_id: i32,
    box_id: i32,
    plan: Plan,
}

#[derive(Serialize)]
struct CreateSubscriptionResponse {
    id: i32,
    status: &'static str,
    subscription: SubscriptionResponse,
}

#[derive(Deserialize)]
struct UpdateStatusRequest {
    status: SubscriptionStatus,
}

/// `GET /api/subscriptions?userId=N`
async fn list_subscriptions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<SubscriptionWithBoxResponse>>, AppError> {
    let user_id = query
        .user_id
        .ok_or_else(|| AppError::BadRequest("userId is required.".to_string()))?;

    let rows = subscription::Entity::find()
        .filter(subscription::Column::UserId.eq(user_id))
        .order_by_asc(subscription::Column::Id)
        .find_also_related(catalog_box::Entity)
        .all(&state.db)
        .await?;

    Ok(Json(
        rows.into_iter()
            .map(|(sub, b)| SubscriptionWithBoxResponse::new(sub, b))
            .collect(),
    ))
}

/// `POST /api/subscriptions`
///
/// The first delivery is scheduled 30 days out whatever the plan. Repeat
/// subscriptions to the same box are allowed.
async fn create_subscription(
    State(state): State<AppState>,
    Json(body): Json<CreateSubscriptionRequest>,
) -> Result<(StatusCode, Json<CreateSubscriptionResponse>), AppError> {
    user::Entity::find_by_id(body.user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

    catalog_box::Entity::find_by_id(body.box_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Box not found.".to_string()))?;

    let now = Utc::now().fixed_offset();
    let next_delivery = now + Duration::days(Plan::FIRST_DELIVERY_DAYS);

    let created = subscription::ActiveModel {
        user_id: Set(body.user_id),
        box_id: Set(body.box_id),
        plan: Set(body.plan.as_str().to_string()),
        status: Set(SubscriptionStatus::Active.as_str().to_string()),
        next_delivery_date: Set(next_delivery),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    tracing::info!(
        subscription_id = created.id,
        user_id = created.user_id,
        box_id = created.box_id,
        plan = %body.plan,
        "Subscription created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateSubscriptionResponse {
            id: created.id,
            status: "success",
            subscription: created.into(),
        }),
    ))
}

/// `PATCH /api/subscriptions/{id}/status`
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<SubscriptionResponse>, AppError> {
    let existing = subscription::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Subscription not found.".to_string()))?;

    let current = SubscriptionStatus::from_str(&existing.status).unwrap_or_default();
    let next = body.status;

    if !current.can_transition_to(next) {
        return Err(AppError::Conflict(format!(
            "Cannot change a {current} subscription to {next}."
        )));
    }

    if current == next {
        return Ok(Json(existing.into()));
    }

    let mut active: subscription::ActiveModel = existing.into();
    active.status = Set(next.as_str().to_string());
    let updated = active.update(&state.db).await?;

    tracing::info!(
        subscription_id = updated.id,
        from = %current,
        to = %next,
        "Subscription status changed"
    );

    Ok(Json(updated.into()))
}
