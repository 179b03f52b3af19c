use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

use super::m20260301_000002_create_box_table::CatalogBox;
use super::m20260301_000003_create_product_table::Product;
use super::m20260301_000004_create_box_product_table::BoxProduct;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// A seeded product. Each ships once inside its box.
struct SeedProduct {
    name: &'static str,
    price: i64,
    sku: &'static str,
    inventory: i32,
}

/// A seeded catalog box. Prices are in kobo.
struct SeedBox {
    name: &'static str,
    description: &'static str,
    price: i64,
    image_url: &'static str,
    category: &'static str,
    products: &'static [SeedProduct],
}

#[rustfmt::skip]
const BOXES: &[SeedBox] = &[
    SeedBox {
        name: "Pantry Provisions Box", description: "Core pantry essentials for everyday cooking.",
        price: 3_450_000, image_url: "https://picsum.photos/seed/pantry/800/600", category: "Pantry",
        products: &[
            SeedProduct { name: "10kg Premium Rice",       price: 1_850_000, sku: "RIC-001", inventory: 100 },
            SeedProduct { name: "1kg Spaghetti (2 packs)", price:   160_000, sku: "SPA-001", inventory: 100 },
        ],
    },
    SeedBox {
        name: "Farm Fresh Harvest Box", description: "Fresh vegetables sourced directly from farmers.",
        price: 1_400_000, image_url: "https://picsum.photos/seed/farm/800/600", category: "Fresh",
        products: &[
            SeedProduct { name: "Fresh Tomatoes (5kg)", price: 550_000, sku: "TOM-001", inventory: 50 },
            SeedProduct { name: "Fresh Pepper Mix",     price: 300_000, sku: "PEP-001", inventory: 50 },
        ],
    },
    SeedBox {
        name: "Prime Cuts Box", description: "Quality protein essentials.",
        price: 2_600_000, image_url: "https://picsum.photos/seed/meat/800/600", category: "Protein",
        products: &[
            SeedProduct { name: "Whole Chicken", price: 680_000, sku: "CHI-001", inventory: 30 },
            SeedProduct { name: "Beef (2kg)",    price: 850_000, sku: "BEE-001", inventory: 30 },
        ],
    },
    SeedBox {
        name: "Morning Essentials Box", description: "Breakfast staples for a great start.",
        price: 1_550_000, image_url: "https://picsum.photos/seed/breakfast/800/600", category: "Breakfast",
        products: &[
            SeedProduct { name: "Cornflakes",       price: 280_000, sku: "COR-001", inventory: 100 },
            SeedProduct { name: "Milk (Peak 900g)", price: 550_000, sku: "MIL-001", inventory: 100 },
        ],
    },
    SeedBox {
        name: "Pure Bliss Pamper Kit", description: "Personal care and hygiene essentials.",
        price: 1_390_000, image_url: "https://picsum.photos/seed/pamper/800/600", category: "Personal Care",
        products: &[],
    },
    SeedBox {
        name: "Little Bundle of Joy", description: "Everything for your little one.",
        price: 1_500_000, image_url: "https://picsum.photos/seed/baby/800/600", category: "Baby",
        products: &[],
    },
    SeedBox {
        name: "Sparkling Sanctuary Solutions", description: "Cleaning and home maintenance supplies.",
        price: 1_020_000, image_url: "https://picsum.photos/seed/cleaning/800/600", category: "Home",
        products: &[],
    },
    SeedBox {
        name: "Zen Wellness Wonders", description: "Health and wellness essentials.",
        price: 1_080_000, image_url: "https://picsum.photos/seed/wellness/800/600", category: "Wellness",
        products: &[],
    },
];

/// Run an insert with `RETURNING id` and hand back the generated key.
async fn insert_returning_id(
    manager: &SchemaManager<'_>,
    stmt: &InsertStatement,
) -> Result<i32, DbErr> {
    let db = manager.get_connection();
    let backend = manager.get_database_backend();
    let row = db
        .query_one(backend.build(stmt))
        .await?
        .ok_or(DbErr::RecordNotInserted)?;
    row.try_get("", "id")
}

fn build_err(e: impl std::fmt::Display) -> DbErr {
    DbErr::Custom(format!("Failed to build seed statement: {e}"))
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for seed in BOXES {
            let box_id = insert_returning_id(
                manager,
                Query::insert()
                    .into_table(CatalogBox::Table)
                    .columns([
                        CatalogBox::Name,
                        CatalogBox::Description,
                        CatalogBox::Price,
                        CatalogBox::ImageUrl,
                        CatalogBox::Category,
                    ])
                    .values([
                        seed.name.into(),
                        seed.description.into(),
                        seed.price.into(),
                        seed.image_url.into(),
                        seed.category.into(),
                    ])
                    .map_err(build_err)?
                    .returning_col(CatalogBox::Id),
            )
            .await?;

            for product in seed.products {
                let product_id = insert_returning_id(
                    manager,
                    Query::insert()
                        .into_table(Product::Table)
                        .columns([
                            Product::Name,
                            Product::Price,
                            Product::Sku,
                            Product::Inventory,
                        ])
                        .values([
                            product.name.into(),
                            product.price.into(),
                            product.sku.into(),
                            product.inventory.into(),
                        ])
                        .map_err(build_err)?
                        .returning_col(Product::Id),
                )
                .await?;

                manager
                    .exec_stmt(
                        Query::insert()
                            .into_table(BoxProduct::Table)
                            .columns([
                                BoxProduct::BoxId,
                                BoxProduct::ProductId,
                                BoxProduct::Quantity,
                            ])
                            .values([box_id.into(), product_id.into(), 1.into()])
                            .map_err(build_err)?
                            .to_owned(),
                    )
                    .await?;
            }
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(BoxProduct::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Product::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(CatalogBox::Table).to_owned())
            .await
    }
}
