use serde::Serialize;

use crate::entities::{Role, user};
use crate::session::DashboardView;

/// Public representation of a user row
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_seller_verified: bool,
    pub kyc_data: Option<serde_json::Value>,
    pub created_at: String,
}

impl From<user::Model> for UserResponse {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            role: Role::from_db(&u.role),
            email: u.email,
            name: u.name,
            phone: u.phone,
            address: u.address,
            is_seller_verified: u.is_seller_verified,
            kyc_data: u.kyc_data,
            created_at: u.created_at.to_rfc3339(),
        }
    }
}

/// User plus a fresh session token and the dashboard it unlocks
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: UserResponse,
    pub token: String,
    pub dashboard: DashboardView,
    /// Only set by login: whether the account was provisioned by this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<bool>,
}
