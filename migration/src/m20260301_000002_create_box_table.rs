use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CatalogBox::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CatalogBox::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CatalogBox::Name).string_len(200).not_null())
                    .col(ColumnDef::new(CatalogBox::Description).text().not_null())
                    .col(ColumnDef::new(CatalogBox::Price).big_integer().not_null())
                    .col(ColumnDef::new(CatalogBox::ImageUrl).string_len(500).null())
                    .col(ColumnDef::new(CatalogBox::Category).string_len(50).not_null())
                    .to_owned(),
            )
            .await?;

        // Storefront filters by category
        manager
            .create_index(
                Index::create()
                    .name("idx_box_category")
                    .table(CatalogBox::Table)
                    .col(CatalogBox::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CatalogBox::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CatalogBox {
    #[sea_orm(iden = "box")]
    Table,
    Id,
    Name,
    Description,
    Price,
    ImageUrl,
    Category,
}
