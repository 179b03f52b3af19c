use serde::Serialize;

use crate::entities::{Plan, SubscriptionStatus, catalog_box, subscription};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponse {
    pub id: i32,
    pub user_id: i32,
    pub box_id: i32,
    pub plan: Plan,
    pub status: SubscriptionStatus,
    pub next_delivery_date: String,
    pub created_at: String,
}

impl From<subscription::Model> for SubscriptionResponse {
    fn from(s: subscription::Model) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            box_id: s.box_id,
            plan: Plan::from_str(&s.plan).unwrap_or_default(),
            status: SubscriptionStatus::from_str(&s.status).unwrap_or_default(),
            next_delivery_date: s.next_delivery_date.to_rfc3339(),
            created_at: s.created_at.to_rfc3339(),
        }
    }
}

/// Subscription joined with the box it delivers
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionWithBoxResponse {
    #[serde(flatten)]
    pub subscription: SubscriptionResponse,
    pub box_name: Option<String>,
    pub image_url: Option<String>,
}

impl SubscriptionWithBoxResponse {
    #[must_use]
    pub fn new(sub: subscription::Model, catalog_box: Option<catalog_box::Model>) -> Self {
        let (box_name, image_url) = catalog_box.map_or((None, None), |b| (Some(b.name), b.image_url));
        Self {
            subscription: sub.into(),
            box_name,
            image_url,
        }
    }
}
