use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;

pub(crate) const PRODUCT_COLUMNS: &str = "id, name, description, price, stock, is_active, is_available, has_discount, discount_percentage, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub is_active: bool,
    pub is_available: bool,
    pub has_discount: bool,
    pub discount_percentage: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.price,
            u32::try_from(self.stock).unwrap_or(0),
            self.is_active,
            self.is_available,
            self.has_discount,
            self.discount_percentage,
            self.created_at,
            self.updated_at,
        )
    }
}
