use poem_openapi::Object;
use uuid::Uuid;

use business::domain::voice_cart::model::{AddedItem, VoiceCartOutcome};

use crate::api::amount::to_amount;

#[derive(Debug, Clone, Object)]
pub struct VoiceCartRequest {
    /// Text produced by the client's speech recognition
    pub transcript: String,
}

#[derive(Debug, Clone, Object)]
pub struct AddedItemResponse {
    pub product_id: Uuid,
    pub product: String,
    /// Units added by this request
    pub quantity: u32,
    /// Units of this product now in the cart
    pub line_quantity: u32,
}

impl From<AddedItem> for AddedItemResponse {
    fn from(item: AddedItem) -> Self {
        Self {
            product_id: item.product_id,
            product: item.product_name,
            quantity: item.quantity,
            line_quantity: item.line_quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct VoiceCartResponse {
    pub added_items: Vec<AddedItemResponse>,
    pub cart_total: f64,
}

impl From<VoiceCartOutcome> for VoiceCartResponse {
    fn from(outcome: VoiceCartOutcome) -> Self {
        Self {
            cart_total: to_amount(&outcome.cart_total),
            added_items: outcome.added_items.into_iter().map(|i| i.into()).collect(),
        }
    }
}
