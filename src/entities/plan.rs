use serde::{Deserialize, Serialize};
use std::fmt;

/// Billing cadence of a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Monthly,
    Quarterly,
    Annual,
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Plan {
    /// Days between creation and the first delivery. Identical for every plan.
    pub const FIRST_DELIVERY_DAYS: i64 = 30;

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "monthly" => Some(Self::Monthly),
            "quarterly" => Some(Self::Quarterly),
            "annual" => Some(Self::Annual),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annual => "annual",
        }
    }

    /// Percentage taken off the box price for this commitment length.
    pub const fn discount_percent(&self) -> i64 {
        match self {
            Self::Monthly => 0,
            Self::Quarterly => 5,
            Self::Annual => 15,
        }
    }

    /// Human-readable billing period shown next to the price.
    pub const fn period(&self) -> &'static str {
        match self {
            Self::Monthly => "month",
            Self::Quarterly => "3 months",
            Self::Annual => "year",
        }
    }
}
