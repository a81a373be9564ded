use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::errors::ProductError;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub stock: u32,
    pub is_active: bool,
    pub is_available: bool,
    pub has_discount: bool,
    pub discount_percentage: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub stock: u32,
    pub is_active: bool,
    pub discount_percentage: BigDecimal,
}

/// Price after applying a percentage discount, rounded to cents.
pub fn discounted_price(
    price: &BigDecimal,
    has_discount: bool,
    discount_percentage: &BigDecimal,
) -> BigDecimal {
    if has_discount && discount_percentage > &BigDecimal::zero() {
        let discount = price * discount_percentage / BigDecimal::from(100);
        (price - discount).round(2)
    } else {
        price.clone()
    }
}

pub(crate) fn validate_price(price: &BigDecimal) -> Result<(), ProductError> {
    if price < &BigDecimal::zero() {
        return Err(ProductError::PriceNegative);
    }
    Ok(())
}

pub(crate) fn validate_discount(percentage: &BigDecimal) -> Result<(), ProductError> {
    if percentage < &BigDecimal::zero() || percentage > &BigDecimal::from(100) {
        return Err(ProductError::DiscountOutOfRange);
    }
    Ok(())
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        validate_price(&props.price)?;
        validate_discount(&props.discount_percentage)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            price: props.price,
            stock: props.stock,
            is_active: props.is_active,
            is_available: props.stock > 0,
            has_discount: props.discount_percentage > BigDecimal::zero(),
            discount_percentage: props.discount_percentage,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        price: BigDecimal,
        stock: u32,
        is_active: bool,
        is_available: bool,
        has_discount: bool,
        discount_percentage: BigDecimal,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            stock,
            is_active,
            is_available,
            has_discount,
            discount_percentage,
            created_at,
            updated_at,
        }
    }

    pub fn final_price(&self) -> BigDecimal {
        discounted_price(&self.price, self.has_discount, &self.discount_percentage)
    }

    /// Availability always follows stock.
    pub fn set_stock(&mut self, stock: u32) {
        self.stock = stock;
        self.is_available = stock > 0;
    }

    pub fn apply_discount(&mut self, percentage: BigDecimal) -> Result<(), ProductError> {
        validate_discount(&percentage)?;
        self.has_discount = percentage > BigDecimal::zero();
        self.discount_percentage = percentage;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn is_purchasable(&self) -> bool {
        self.is_active && self.is_available
    }
}
