use serde::Serialize;

use crate::entities::{box_product, catalog_box, product};

/// Catalog box summary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: Option<String>,
    pub category: String,
}

impl From<catalog_box::Model> for BoxResponse {
    fn from(b: catalog_box::Model) -> Self {
        Self {
            id: b.id,
            name: b.name,
            description: b.description,
            price: b.price,
            image_url: b.image_url,
            category: b.category,
        }
    }
}

/// Product row as seen by sellers and admins
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub sku: String,
    pub supplier_id: Option<i32>,
    pub inventory: i32,
}

impl From<product::Model> for ProductResponse {
    fn from(p: product::Model) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            sku: p.sku,
            supplier_id: p.supplier_id,
            inventory: p.inventory,
        }
    }
}

/// A product inside a box, with the quantity the box ships
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxItemResponse {
    #[serde(flatten)]
    pub product: ProductResponse,
    pub quantity: i32,
}

impl BoxItemResponse {
    #[must_use]
    pub fn new(link: &box_product::Model, product: product::Model) -> Self {
        Self {
            product: product.into(),
            quantity: link.quantity,
        }
    }
}

/// Box with its joined product list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxDetailResponse {
    #[serde(flatten)]
    pub summary: BoxResponse,
    pub products: Vec<BoxItemResponse>,
}
