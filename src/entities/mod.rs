pub mod box_product;
pub mod catalog_box;
pub mod plan;
pub mod product;
pub mod role;
pub mod subscription;
pub mod subscription_status;
pub mod user;

pub use plan::Plan;
pub use role::Role;
pub use subscription_status::SubscriptionStatus;
