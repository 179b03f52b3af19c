pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_box_table;
mod m20260301_000003_create_product_table;
mod m20260301_000004_create_box_product_table;
mod m20260301_000005_create_subscription_table;
mod m20260301_000006_seed_catalog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_box_table::Migration),
            Box::new(m20260301_000003_create_product_table::Migration),
            Box::new(m20260301_000004_create_box_product_table::Migration),
            Box::new(m20260301_000005_create_subscription_table::Migration),
            Box::new(m20260301_000006_seed_catalog::Migration),
        ]
    }
}
