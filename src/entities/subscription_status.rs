use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// Boxes ship on every delivery date
    #[default]
    Active,
    /// Deliveries are on hold until resumed
    Paused,
    /// Terminal; the row is kept for history
    Cancelled,
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SubscriptionStatus {
    /// Convert from database string representation
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "paused" => Some(Self::Paused),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Convert to database string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether a subscription in this status may move to `next`.
    ///
    /// Staying in the same status is always allowed and treated as a no-op.
    pub const fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Active, Self::Active | Self::Paused | Self::Cancelled)
                | (Self::Paused, Self::Paused | Self::Active | Self::Cancelled)
                | (Self::Cancelled, Self::Cancelled)
        )
    }
}
