use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing {} from cart of user {}",
            params.product_id, params.user_id
        ));

        let cart = self.repository.get_or_create(&params.user_id).await?;
        let removed = self
            .repository
            .remove_line(cart.id, params.product_id)
            .await?;

        if removed == 0 {
            return Err(CartError::ItemNotFound);
        }

        let cart = self.repository.get_or_create(&params.user_id).await?;
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{MockCartRepo, mock_logger};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_remove_line_from_users_cart() {
        let cart_id = Uuid::new_v4();
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get_or_create().returning(move |user_id| {
            Ok(Cart::from_repository(
                cart_id,
                user_id.clone(),
                Vec::new(),
                chrono::Utc::now(),
            ))
        });
        mock_repo
            .expect_remove_line()
            .withf(move |c, p| *c == cart_id && *p == product_id)
            .times(1)
            .returning(|_, _| Ok(1));

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(RemoveCartItemParams {
                user_id: UserId::new("user-1"),
                product_id,
            })
            .await
            .unwrap();

        assert!(cart.line_for(product_id).is_none());
    }

    #[tokio::test]
    async fn should_return_item_not_found_when_line_absent() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_or_create()
            .returning(|user_id| Ok(Cart::new(user_id.clone())));
        mock_repo.expect_remove_line().returning(|_, _| Ok(0));

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveCartItemParams {
                user_id: UserId::new("user-1"),
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }
}
