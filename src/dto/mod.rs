//! Response bodies shared by several route groups.

pub mod catalog;
pub mod subscription;
pub mod user;

pub use catalog::{BoxDetailResponse, BoxItemResponse, BoxResponse, ProductResponse};
pub use subscription::{SubscriptionResponse, SubscriptionWithBoxResponse};
pub use user::{SessionResponse, UserResponse};
