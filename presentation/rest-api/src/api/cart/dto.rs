use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartLine};

use crate::api::amount::to_amount;

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    pub product_id: Uuid,
    /// Defaults to 1; must be between 1 and 2147483647
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    pub product_id: Uuid,
    pub product: String,
    /// Final unit price (discount applied)
    pub unit_price: f64,
    pub quantity: u32,
    pub subtotal: f64,
}

impl From<CartLine> for CartItemResponse {
    fn from(line: CartLine) -> Self {
        Self {
            subtotal: to_amount(&line.subtotal()),
            unit_price: to_amount(&line.unit_price),
            product_id: line.product_id,
            product: line.product_name,
            quantity: line.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub id: Uuid,
    pub items: Vec<CartItemResponse>,
    pub item_count: u32,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id,
            item_count: cart.item_count(),
            total_price: to_amount(&cart.total_price()),
            created_at: cart.created_at,
            items: cart.lines.into_iter().map(|l| l.into()).collect(),
        }
    }
}
