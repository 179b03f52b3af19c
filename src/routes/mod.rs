mod admin;
mod auth;
mod boxes;
mod checkout;
mod health;
mod seller;
mod subscriptions;
mod users;

use axum::Router;

use crate::state::AppState;

/// Build the complete application router.
///
/// Structure:
/// - `GET /health`: lightweight liveness check
/// - `/api/health`: health check with database connectivity
/// - `/api/boxes`, `/api/subscriptions`, `/api/checkout`: storefront
/// - `/api/auth`, `/api/users`: sessions and profiles
/// - `/api/seller`, `/api/admin`: role-gated dashboards
pub fn router() -> Router<AppState> {
    let api = Router::new()
        .merge(health::api_router())
        .nest("/boxes", boxes::router())
        .nest("/subscriptions", subscriptions::router())
        .nest("/checkout", checkout::router())
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/seller", seller::router())
        .nest("/admin", admin::router());

    Router::new()
        .merge(health::root_router())
        .nest("/api", api)
}
