use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartLine};
use business::domain::product::model::discounted_price;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub id: Uuid,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// A cart item joined with the product fields needed to price it.
#[derive(Debug, FromRow)]
pub struct CartLineEntity {
    pub product_id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub has_discount: bool,
    pub discount_percentage: BigDecimal,
    pub quantity: i32,
}

impl CartLineEntity {
    pub fn into_domain(self) -> CartLine {
        CartLine {
            product_id: self.product_id,
            product_name: self.name,
            unit_price: discounted_price(&self.price, self.has_discount, &self.discount_percentage),
            quantity: u32::try_from(self.quantity).unwrap_or(0),
        }
    }
}

impl CartEntity {
    pub fn into_domain(self, lines: Vec<CartLineEntity>) -> Cart {
        Cart::from_repository(
            self.id,
            UserId::new(self.user_id),
            lines.into_iter().map(|l| l.into_domain()).collect(),
            self.created_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn should_price_lines_with_discount() {
        let line = CartLineEntity {
            product_id: Uuid::new_v4(),
            name: "Audifonos".to_string(),
            price: "40.00".parse().unwrap(),
            has_discount: true,
            discount_percentage: BigDecimal::from(25),
            quantity: 2,
        }
        .into_domain();

        assert_eq!(line.unit_price, "30.00".parse::<BigDecimal>().unwrap());
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn should_build_cart_with_total() {
        let cart = CartEntity {
            id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            created_at: Utc::now(),
        }
        .into_domain(vec![CartLineEntity {
            product_id: Uuid::new_v4(),
            name: "Cable".to_string(),
            price: "5.25".parse().unwrap(),
            has_discount: false,
            discount_percentage: BigDecimal::zero(),
            quantity: 4,
        }]);

        assert_eq!(cart.user_id.as_str(), "user-1");
        assert_eq!(cart.total_price(), "21.00".parse::<BigDecimal>().unwrap());
    }
}
