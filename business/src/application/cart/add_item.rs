use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, LineIncrement, MAX_LINE_QUANTITY};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddCartItemUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding {} x {} to cart of user {}",
            params.quantity, params.product_id, params.user_id
        ));

        if params.quantity == 0 || params.quantity > MAX_LINE_QUANTITY {
            return Err(CartError::QuantityInvalid);
        }

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        if !product.is_purchasable() {
            self.logger.warn(&format!(
                "Product {} is not purchasable (active: {}, available: {})",
                product.id, product.is_active, product.is_available
            ));
            return Err(CartError::ProductUnavailable);
        }

        let cart = self
            .cart_repository
            .get_or_create(&params.user_id)
            .await?;
        let increment = LineIncrement {
            product_id: product.id,
            quantity: params.quantity,
        };
        let line_quantities = self
            .cart_repository
            .merge_lines(cart.id, &[increment])
            .await?;

        if let Some(line_quantity) = line_quantities.first() {
            self.logger.info(&format!(
                "Cart {} line for {} now holds {}",
                cart.id, product.name, line_quantity
            ));
        }

        let cart = self
            .cart_repository
            .get_or_create(&params.user_id)
            .await?;
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartLine;
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{
        MockCartRepo, MockProductRepo, merge_in_memory, mock_logger, stored_product,
    };
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    fn product(id: Uuid, stock: u32, is_active: bool) -> Product {
        Product {
            id,
            ..stored_product("Teclado", "20.00", stock, is_active)
        }
    }

    fn product_repo_with(product: Product) -> MockProductRepo {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(product.clone()));
        repo
    }

    /// Cart repository backed by an in-memory line map.
    fn stateful_cart_repo(cart_id: Uuid) -> MockCartRepo {
        let lines: Arc<Mutex<Vec<(Uuid, u32)>>> = Arc::new(Mutex::new(Vec::new()));
        let mut repo = MockCartRepo::new();

        let read = lines.clone();
        repo.expect_get_or_create().returning(move |user_id| {
            let lines = read
                .lock()
                .unwrap()
                .iter()
                .map(|(product_id, quantity)| CartLine {
                    product_id: *product_id,
                    product_name: "Teclado".to_string(),
                    unit_price: "20.00".parse().unwrap(),
                    quantity: *quantity,
                })
                .collect();
            Ok(Cart::from_repository(
                cart_id,
                user_id.clone(),
                lines,
                Utc::now(),
            ))
        });

        let write = lines.clone();
        repo.expect_merge_lines().returning(move |_, increments| {
            Ok(merge_in_memory(&mut write.lock().unwrap(), increments))
        });
        repo
    }

    #[tokio::test]
    async fn should_add_item_to_cart() {
        let product_id = Uuid::new_v4();
        let use_case = AddCartItemUseCaseImpl {
            cart_repository: Arc::new(stateful_cart_repo(Uuid::new_v4())),
            product_repository: Arc::new(product_repo_with(product(product_id, 10, true))),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddCartItemParams {
                user_id: UserId::new("user-1"),
                product_id,
                quantity: 2,
            })
            .await
            .unwrap();

        assert_eq!(cart.line_for(product_id).unwrap().quantity, 2);
        assert_eq!(cart.total_price(), "40.00".parse::<BigDecimal>().unwrap());
    }

    #[tokio::test]
    async fn should_merge_repeated_additions_into_one_line() {
        let product_id = Uuid::new_v4();
        let use_case = AddCartItemUseCaseImpl {
            cart_repository: Arc::new(stateful_cart_repo(Uuid::new_v4())),
            product_repository: Arc::new(product_repo_with(product(product_id, 10, true))),
            logger: mock_logger(),
        };

        for quantity in [2, 3] {
            use_case
                .execute(AddCartItemParams {
                    user_id: UserId::new("user-1"),
                    product_id,
                    quantity,
                })
                .await
                .unwrap();
        }
        let cart = use_case
            .execute(AddCartItemParams {
                user_id: UserId::new("user-1"),
                product_id,
                quantity: 1,
            })
            .await
            .unwrap();

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.line_for(product_id).unwrap().quantity, 6);
    }

    #[tokio::test]
    async fn should_reject_zero_quantity() {
        let mut product_repo = MockProductRepo::new();
        product_repo.expect_get_by_id().never();

        let use_case = AddCartItemUseCaseImpl {
            cart_repository: Arc::new(MockCartRepo::new()),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                user_id: UserId::new("user-1"),
                product_id: Uuid::new_v4(),
                quantity: 0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::QuantityInvalid));
    }

    #[tokio::test]
    async fn should_reject_quantity_above_line_ceiling() {
        let mut product_repo = MockProductRepo::new();
        product_repo.expect_get_by_id().never();

        let use_case = AddCartItemUseCaseImpl {
            cart_repository: Arc::new(MockCartRepo::new()),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                user_id: UserId::new("user-1"),
                product_id: Uuid::new_v4(),
                quantity: MAX_LINE_QUANTITY + 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::QuantityInvalid));
    }

    #[tokio::test]
    async fn should_cap_accumulated_line_at_ceiling() {
        let product_id = Uuid::new_v4();
        let use_case = AddCartItemUseCaseImpl {
            cart_repository: Arc::new(stateful_cart_repo(Uuid::new_v4())),
            product_repository: Arc::new(product_repo_with(product(product_id, 10, true))),
            logger: mock_logger(),
        };

        for quantity in [MAX_LINE_QUANTITY, 5] {
            use_case
                .execute(AddCartItemParams {
                    user_id: UserId::new("user-1"),
                    product_id,
                    quantity,
                })
                .await
                .unwrap();
        }
        let cart = use_case
            .execute(AddCartItemParams {
                user_id: UserId::new("user-1"),
                product_id,
                quantity: 1,
            })
            .await
            .unwrap();

        assert_eq!(cart.line_for(product_id).unwrap().quantity, MAX_LINE_QUANTITY);
    }

    #[tokio::test]
    async fn should_return_product_not_found_when_missing() {
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = AddCartItemUseCaseImpl {
            cart_repository: Arc::new(MockCartRepo::new()),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                user_id: UserId::new("user-1"),
                product_id: Uuid::new_v4(),
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }

    #[tokio::test]
    async fn should_reject_out_of_stock_or_inactive_products() {
        for unavailable in [product(Uuid::new_v4(), 0, true), product(Uuid::new_v4(), 5, false)] {
            let product_id = unavailable.id;
            let mut cart_repo = MockCartRepo::new();
            cart_repo.expect_merge_lines().never();

            let use_case = AddCartItemUseCaseImpl {
                cart_repository: Arc::new(cart_repo),
                product_repository: Arc::new(product_repo_with(unavailable)),
                logger: mock_logger(),
            };

            let result = use_case
                .execute(AddCartItemParams {
                    user_id: UserId::new("user-1"),
                    product_id,
                    quantity: 1,
                })
                .await;

            assert!(matches!(result.unwrap_err(), CartError::ProductUnavailable));
        }
    }
}
