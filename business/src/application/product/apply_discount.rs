use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, validate_discount};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::apply_discount::{
    ApplyDiscountParams, ApplyDiscountUseCase,
};

pub struct ApplyDiscountUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ApplyDiscountUseCase for ApplyDiscountUseCaseImpl {
    async fn execute(&self, params: ApplyDiscountParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Applying {}% discount to product {}",
            params.percentage, params.id
        ));

        validate_discount(&params.percentage)?;

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        product.apply_discount(params.percentage)?;
        self.repository.save(&product).await?;

        self.logger.info(&format!(
            "Product {} final price is now {}",
            product.id,
            product.final_price()
        ));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockProductRepo, mock_logger};
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use num_traits::Zero;
    use uuid::Uuid;

    fn stored(id: Uuid) -> Product {
        let now = Utc::now();
        Product::from_repository(
            id,
            "Audifonos".to_string(),
            String::new(),
            "40.00".parse().unwrap(),
            8,
            true,
            true,
            false,
            BigDecimal::zero(),
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_apply_discount_and_save() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().returning(move |_| Ok(stored(id)));
        mock_repo
            .expect_save()
            .withf(|p: &Product| p.has_discount)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = ApplyDiscountUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(ApplyDiscountParams {
                id,
                percentage: BigDecimal::from(25),
            })
            .await
            .unwrap();

        assert_eq!(product.final_price(), "30.00".parse::<BigDecimal>().unwrap());
    }

    #[tokio::test]
    async fn should_reject_out_of_range_discount_without_loading() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();

        let use_case = ApplyDiscountUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ApplyDiscountParams {
                id: Uuid::new_v4(),
                percentage: BigDecimal::from(120),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::DiscountOutOfRange
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = ApplyDiscountUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ApplyDiscountParams {
                id: Uuid::new_v4(),
                percentage: BigDecimal::from(10),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
