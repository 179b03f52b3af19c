use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a user currently acts under. Decides which dashboard is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Buyer,
    Seller,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Role {
    /// Convert from database string representation
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "buyer" => Some(Self::Buyer),
            "seller" => Some(Self::Seller),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Convert to database string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
            Self::Admin => "admin",
        }
    }

    /// Parse a stored role, treating unknown values as `Buyer`.
    pub fn from_db(s: &str) -> Self {
        Self::from_str(s).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Role::from_str("buyer"), Some(Role::Buyer));
        assert_eq!(Role::from_str("Seller"), Some(Role::Seller));
        assert_eq!(Role::from_str("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::from_str("moderator"), None);
    }

    #[test]
    fn test_from_db_falls_back_to_buyer() {
        assert_eq!(Role::from_db("garbage"), Role::Buyer);
        assert_eq!(Role::from_db("admin"), Role::Admin);
    }

    #[test]
    fn test_display() {
        assert_eq!(Role::Seller.to_string(), "seller");
    }
}
