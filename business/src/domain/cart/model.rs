use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

/// Largest quantity a single cart line can hold. Matches the `INTEGER`
/// column the lines are stored in.
pub const MAX_LINE_QUANTITY: u32 = i32::MAX as u32;

/// Quantity to add to the line of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineIncrement {
    pub product_id: Uuid,
    pub quantity: u32,
}

/// One product in a cart. `unit_price` is the product's final price
/// (discount applied) at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: Uuid,
    pub product_name: String,
    pub unit_price: BigDecimal,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }
}

#[derive(Debug, Clone)]
pub struct Cart {
    pub id: Uuid,
    pub user_id: UserId,
    pub lines: Vec<CartLine>,
    pub created_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(user_id: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        lines: Vec<CartLine>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            lines,
            created_at,
        }
    }

    /// Sum of every line subtotal, rounded to cents.
    pub fn total_price(&self) -> BigDecimal {
        self.lines
            .iter()
            .fold(BigDecimal::zero(), |acc, line| acc + line.subtotal())
            .round(2)
    }

    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    #[cfg(test)]
    pub fn line_for(&self, product_id: Uuid) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }
}
