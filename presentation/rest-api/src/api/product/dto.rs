use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::product::model::Product;

use crate::api::amount::to_amount;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    #[oai(default)]
    pub description: String,
    /// Base price, rounded to cents
    pub price: f64,
    #[oai(default)]
    pub stock: u32,
    /// Defaults to true
    #[oai(skip_serializing_if_is_none)]
    pub is_active: Option<bool>,
    /// Discount percentage in [0, 100]
    #[oai(skip_serializing_if_is_none)]
    pub discount_percentage: Option<f64>,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Availability follows stock
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Object)]
pub struct ApplyDiscountRequest {
    /// Percentage in [0, 100]; zero removes the discount
    pub percentage: f64,
}

#[derive(Debug, Clone, Object)]
pub struct BulkDiscountRequest {
    /// At least one product id; unknown ids are ignored
    pub product_ids: Vec<Uuid>,
    /// Percentage in [0, 100]; zero removes the discount
    pub percentage: f64,
}

#[derive(Debug, Clone, Object)]
pub struct BulkDiscountResponse {
    /// Number of products whose discount changed
    pub updated_count: u64,
}

#[derive(Debug, Clone, Object)]
pub struct SetRelatedProductsRequest {
    /// Replaces the current list; an empty list clears it
    pub related_product_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Price after discount
    pub final_price: f64,
    pub stock: u32,
    pub is_active: bool,
    pub is_available: bool,
    pub has_discount: bool,
    pub discount_percentage: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            final_price: to_amount(&product.final_price()),
            price: to_amount(&product.price),
            discount_percentage: to_amount(&product.discount_percentage),
            name: product.name,
            description: product.description,
            stock: product.stock,
            is_active: product.is_active,
            is_available: product.is_available,
            has_discount: product.has_discount,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
