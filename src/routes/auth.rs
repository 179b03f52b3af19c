use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr};
use serde::Deserialize;

use crate::auth::middleware::AuthUser;
use crate::auth::{default_name_for, jwt, normalize_email, validate_email};
use crate::dto::SessionResponse;
use crate::entities::{Role, user};
use crate::error::AppError;
use crate::session::{Session, SessionEvent};
use crate::state::AppState;

/// Build the auth route group: `/auth/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/kyc", post(submit_kyc))
        .route("/switch-role", post(switch_role))
        .route("/session", get(current_session))
}

/// Clients also send a `password`; accounts carry none, so it is not read.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycRequest {
    pub user_id: i32,
    pub kyc_data: serde_json::Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchRoleRequest {
    pub user_id: i32,
    pub role: Role,
}

#[derive(Deserialize)]
pub struct SessionQuery {
    pub tab: Option<String>,
}

async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<user::Model>, AppError> {
    Ok(user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await?)
}

async fn find_user(db: &DatabaseConnection, user_id: i32) -> Result<user::Model, AppError> {
    user::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found.".to_string()))
}

/// Create a buyer account for an unseen email.
///
/// Returns `(user, created)`. If a concurrent login inserted the same email first, the
/// unique constraint rejects this insert and the winner's row is returned instead.
async fn provision_user(
    db: &DatabaseConnection,
    email: &str,
) -> Result<(user::Model, bool), AppError> {
    let new_user = user::ActiveModel {
        email: Set(email.to_string()),
        name: Set(default_name_for(email)),
        role: Set(Role::Buyer.as_str().to_string()),
        phone: Set(None),
        address: Set(None),
        is_seller_verified: Set(false),
        kyc_data: Set(None),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    };

    match new_user.insert(db).await {
        Ok(created) => {
            tracing::info!(user_id = created.id, email = %created.email, "Provisioned user on first login");
            Ok((created, true))
        }
        Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            let existing = find_by_email(db, email).await?.ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!("User missing after unique violation"))
            })?;
            Ok((existing, false))
        }
        Err(err) => Err(err.into()),
    }
}

/// Issue a token for the session's role and bundle it with the dashboard view.
fn session_response(
    state: &AppState,
    user_model: user::Model,
    session: &Session,
    created: Option<bool>,
) -> Result<SessionResponse, AppError> {
    let token = jwt::issue_session_token(user_model.id, session.role, &state.config)?;
    Ok(SessionResponse {
        user: user_model.into(),
        token,
        dashboard: session.view(),
        created,
    })
}

/// `POST /api/auth/login`
///
/// Unknown emails are provisioned as buyers. No password check is made.
async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let email = normalize_email(&body.email);
    validate_email(&email).map_err(AppError::BadRequest)?;

    let (user_model, created) = match find_by_email(&state.db, &email).await? {
        Some(existing) => (existing, false),
        None => provision_user(&state.db, &email).await?,
    };

    tracing::debug!(user_id = user_model.id, created, "Login");

    let session = Session::for_user(&user_model);
    Ok(Json(session_response(
        &state,
        user_model,
        &session,
        Some(created),
    )?))
}

/// `POST /api/auth/kyc`
///
/// Stores the verification form as-is and promotes the user to a verified seller.
async fn submit_kyc(
    State(state): State<AppState>,
    Json(body): Json<KycRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let user_model = find_user(&state.db, body.user_id).await?;

    let mut session = Session::for_user(&user_model);
    session.apply(SessionEvent::SellerVerified)?;

    let mut active: user::ActiveModel = user_model.into();
    active.kyc_data = Set(Some(body.kyc_data));
    active.is_seller_verified = Set(true);
    active.role = Set(session.role.as_str().to_string());
    let updated = active.update(&state.db).await?;

    tracing::info!(user_id = updated.id, "Seller verification accepted");

    Ok(Json(session_response(&state, updated, &session, None)?))
}

/// `POST /api/auth/switch-role`
async fn switch_role(
    State(state): State<AppState>,
    Json(body): Json<SwitchRoleRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let user_model = find_user(&state.db, body.user_id).await?;

    let mut session = Session::for_user(&user_model);
    let previous = session.role;
    session.apply(SessionEvent::SwitchRole(body.role))?;

    let user_model = if session.role == previous {
        user_model
    } else {
        let mut active: user::ActiveModel = user_model.into();
        active.role = Set(session.role.as_str().to_string());
        active.update(&state.db).await?
    };

    tracing::info!(
        user_id = user_model.id,
        from = %previous,
        to = %session.role,
        "Role switched"
    );

    Ok(Json(session_response(&state, user_model, &session, None)?))
}

/// `GET /api/auth/session?tab=...`
///
/// Rebuilds the dashboard shell for the bearer. An unknown tab falls back to the overview.
async fn current_session(
    State(state): State<AppState>,
    AuthUser(user_model): AuthUser,
    Query(query): Query<SessionQuery>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut session = Session::for_user(&user_model);

    if let Some(tab) = query.tab
        && let Err(err) = session.apply(SessionEvent::SelectTab(tab))
    {
        tracing::debug!(user_id = user_model.id, %err, "Ignoring tab selection");
    }

    Ok(Json(session_response(&state, user_model, &session, None)?))
}
