use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A curated bundle of products sold as a single catalog item.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "box")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Price in kobo.
    pub price: i64,
    pub image_url: Option<String>,
    pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::box_product::Entity")]
    BoxProduct,
    #[sea_orm(has_many = "super::subscription::Entity")]
    Subscription,
}

impl Related<super::box_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoxProduct.def()
    }
}

impl Related<super::subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscription.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        super::box_product::Relation::Product.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::box_product::Relation::CatalogBox.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
