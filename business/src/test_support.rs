//! Test doubles shared by the use-case tests.

use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;
use mockall::mock;
use num_traits::Zero;
use uuid::Uuid;

use crate::domain::cart::model::{Cart, LineIncrement, MAX_LINE_QUANTITY};
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::UserId;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        async fn get_purchasable(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn apply_discount_to_many(&self, ids: &[Uuid], percentage: &BigDecimal) -> Result<u64, RepositoryError>;
        async fn set_related(&self, id: Uuid, related_ids: &[Uuid]) -> Result<(), RepositoryError>;
        async fn get_related_to(&self, ids: &[Uuid], limit: u32) -> Result<Vec<Product>, RepositoryError>;
        async fn get_newest_purchasable(&self, limit: u32) -> Result<Vec<Product>, RepositoryError>;
    }
}

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn get_or_create(&self, user_id: &UserId) -> Result<Cart, RepositoryError>;
        async fn merge_lines(&self, cart_id: Uuid, increments: &[LineIncrement]) -> Result<Vec<u32>, RepositoryError>;
        async fn remove_line(&self, cart_id: Uuid, product_id: Uuid) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

/// Logger that accepts any message.
pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Stored product with no discount.
pub fn stored_product(name: &str, price: &str, stock: u32, is_active: bool) -> Product {
    let now = Utc::now();
    Product::from_repository(
        Uuid::new_v4(),
        name.to_string(),
        String::new(),
        price.parse().expect("valid decimal literal"),
        stock,
        is_active,
        stock > 0,
        false,
        BigDecimal::zero(),
        now,
        now,
    )
}

/// Applies increments to `(product_id, quantity)` lines the way the cart
/// store does, saturating at the line ceiling.
pub fn merge_in_memory(lines: &mut Vec<(Uuid, u32)>, increments: &[LineIncrement]) -> Vec<u32> {
    increments
        .iter()
        .map(|increment| {
            match lines.iter_mut().find(|(id, _)| *id == increment.product_id) {
                Some((_, quantity)) => {
                    *quantity = quantity
                        .saturating_add(increment.quantity)
                        .min(MAX_LINE_QUANTITY);
                    *quantity
                }
                None => {
                    let quantity = increment.quantity.min(MAX_LINE_QUANTITY);
                    lines.push((increment.product_id, quantity));
                    quantity
                }
            }
        })
        .collect()
}
