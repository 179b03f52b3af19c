//! Session and role state for the dashboard shell.
//!
//! A [`Session`] holds the role a user is acting under and the dashboard tab
//! they have open. All changes go through [`Session::apply`].

mod sidebar;

use serde::Serialize;
use std::fmt;

use crate::entities::{Role, user};

pub use sidebar::{SidebarGroup, SidebarItem, sidebar_for};

/// Tab every dashboard opens on.
pub const DEFAULT_TAB: &str = "overview";

/// Top-level view rendered for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dashboard {
    #[serde(rename = "dashboard")]
    Buyer,
    #[serde(rename = "seller-dashboard")]
    Seller,
    #[serde(rename = "admin-dashboard")]
    Admin,
}

impl Dashboard {
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Buyer => Self::Buyer,
            Role::Seller => Self::Seller,
            Role::Admin => Self::Admin,
        }
    }
}

/// Something the user did that may change their session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SwitchRole(Role),
    /// The seller verification form was accepted.
    SellerVerified,
    SelectTab(String),
}

/// Why a [`SessionEvent`] was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Seller role requested before the verification form was submitted.
    VerificationRequired,
    /// The tab is not in the current role's sidebar.
    UnknownTab(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VerificationRequired => {
                write!(f, "Seller verification is required before switching to seller.")
            }
            Self::UnknownTab(tab) => write!(f, "Unknown dashboard tab: {tab}"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Client-facing session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i32,
    pub role: Role,
    pub seller_verified: bool,
    pub active_tab: String,
}

impl Session {
    /// Start a session for a freshly loaded user on the default tab.
    #[must_use]
    pub fn for_user(user: &user::Model) -> Self {
        Self {
            user_id: user.id,
            role: Role::from_db(&user.role),
            seller_verified: user.is_seller_verified,
            active_tab: DEFAULT_TAB.to_string(),
        }
    }

    #[must_use]
    pub const fn dashboard(&self) -> Dashboard {
        Dashboard::for_role(self.role)
    }

    /// Apply an event. On error the session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::VerificationRequired`] when switching to seller
    /// without verification, and [`SessionError::UnknownTab`] when selecting a
    /// tab the current role's sidebar does not contain.
    pub fn apply(&mut self, event: SessionEvent) -> Result<(), SessionError> {
        match event {
            SessionEvent::SwitchRole(Role::Seller) if !self.seller_verified => {
                Err(SessionError::VerificationRequired)
            }
            SessionEvent::SwitchRole(role) => {
                self.set_role(role);
                Ok(())
            }
            SessionEvent::SellerVerified => {
                self.seller_verified = true;
                self.set_role(Role::Seller);
                Ok(())
            }
            SessionEvent::SelectTab(tab) => {
                if !has_tab(self.role, &tab) {
                    return Err(SessionError::UnknownTab(tab));
                }
                self.active_tab = tab;
                Ok(())
            }
        }
    }

    /// Any role change, including to the same role, lands on the overview tab.
    fn set_role(&mut self, role: Role) {
        self.role = role;
        self.active_tab = DEFAULT_TAB.to_string();
    }

    /// Serializable snapshot of what the dashboard shell should render.
    #[must_use]
    pub fn view(&self) -> DashboardView {
        DashboardView {
            role: self.role,
            view: self.dashboard(),
            active_tab: self.active_tab.clone(),
            sidebar: sidebar_for(self.role),
        }
    }
}

/// Does `role`'s sidebar contain an item with this id?
#[must_use]
pub fn has_tab(role: Role, tab: &str) -> bool {
    sidebar_for(role)
        .iter()
        .flat_map(|group| group.items.iter())
        .any(|item| item.id == tab)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub role: Role,
    pub view: Dashboard,
    pub active_tab: String,
    pub sidebar: &'static [SidebarGroup],
}
