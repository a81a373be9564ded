use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, validate_price};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        if let Some(ref name) = params.name
            && name.trim().is_empty()
        {
            return Err(ProductError::NameEmpty);
        }
        if let Some(ref price) = params.price {
            validate_price(price)?;
        }

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        if let Some(name) = params.name {
            product.name = name;
        }
        if let Some(description) = params.description {
            product.description = description;
        }
        if let Some(price) = params.price {
            product.price = price;
        }
        if let Some(is_active) = params.is_active {
            product.is_active = is_active;
        }
        if let Some(stock) = params.stock {
            product.set_stock(stock);
        }
        product.updated_at = chrono::Utc::now();

        self.repository.save(&product).await?;

        self.logger.info(&format!(
            "Product updated: {} (available: {})",
            product.id, product.is_available
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

    fn stored(id: Uuid, stock: u32) -> Product {
        let now = Utc::now();
        Product::from_repository(
            id,
            "Monitor".to_string(),
            "24 pulgadas".to_string(),
            BigDecimal::from(150),
            stock,
            true,
            stock > 0,
            false,
            BigDecimal::zero(),
            now,
            now,
        )
    }

    fn empty_params(id: Uuid) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: None,
            description: None,
            price: None,
            stock: None,
            is_active: None,
        }
    }

    #[tokio::test]
    async fn should_keep_unspecified_fields() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored(id, 5)));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(UpdateProductParams {
                price: Some(BigDecimal::from(140)),
                ..empty_params(id)
            })
            .await
            .unwrap();

        assert_eq!(product.name, "Monitor");
        assert_eq!(product.description, "24 pulgadas");
        assert_eq!(product.price, BigDecimal::from(140));
        assert_eq!(product.stock, 5);
    }

    #[tokio::test]
    async fn should_mark_unavailable_when_stock_runs_out() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored(id, 5)));
        mock_repo
            .expect_save()
            .withf(|p: &Product| !p.is_available && p.stock == 0)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(UpdateProductParams {
                stock: Some(0),
                ..empty_params(id)
            })
            .await
            .unwrap();

        assert!(!product.is_purchasable());
    }

    #[tokio::test]
    async fn should_reject_blank_name_before_loading() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                name: Some("  ".to_string()),
                ..empty_params(Uuid::new_v4())
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(empty_params(Uuid::new_v4())).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
