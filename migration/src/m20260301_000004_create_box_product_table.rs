use sea_orm_migration::prelude::*;

use super::m20260301_000002_create_box_table::CatalogBox;
use super::m20260301_000003_create_product_table::Product;

/// Creates the `box_product` join table linking catalog boxes to their contents.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoxProduct::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BoxProduct::BoxId).integer().not_null())
                    .col(ColumnDef::new(BoxProduct::ProductId).integer().not_null())
                    .col(
                        ColumnDef::new(BoxProduct::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .primary_key(
                        Index::create()
                            .col(BoxProduct::BoxId)
                            .col(BoxProduct::ProductId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_box_product_box_id")
                            .from(BoxProduct::Table, BoxProduct::BoxId)
                            .to(CatalogBox::Table, CatalogBox::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_box_product_product_id")
                            .from(BoxProduct::Table, BoxProduct::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoxProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoxProduct {
    Table,
    BoxId,
    ProductId,
    Quantity,
}
