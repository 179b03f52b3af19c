use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Price in kobo.
    pub price: i64,
    #[sea_orm(unique)]
    pub sku: String,
    pub supplier_id: Option<i32>,
    pub inventory: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SupplierId",
        to = "super::user::Column::Id"
    )]
    Supplier,
    #[sea_orm(has_many = "super::box_product::Entity")]
    BoxProduct,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl Related<super::box_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoxProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
