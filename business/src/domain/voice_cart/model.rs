use bigdecimal::BigDecimal;
use uuid::Uuid;

/// A purchasable product as seen by the matcher: just its id and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: Uuid,
    pub name: String,
}

impl CatalogEntry {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A product recognised in a transcript, with the quantity to add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedItem {
    pub product_id: Uuid,
    pub quantity: u32,
}

/// One cart line touched by a voice request.
#[derive(Debug, Clone, PartialEq)]
pub struct AddedItem {
    pub product_id: Uuid,
    pub product_name: String,
    /// Quantity added by this request.
    pub quantity: u32,
    /// Quantity of the cart line after the merge.
    pub line_quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoiceCartOutcome {
    pub added_items: Vec<AddedItem>,
    pub cart_total: BigDecimal,
}
