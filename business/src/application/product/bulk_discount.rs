use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::validate_discount;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::bulk_discount::{BulkDiscountParams, BulkDiscountUseCase};

pub struct BulkDiscountUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BulkDiscountUseCase for BulkDiscountUseCaseImpl {
    async fn execute(&self, params: BulkDiscountParams) -> Result<u64, ProductError> {
        self.logger.info(&format!(
            "Applying {}% discount to {} products",
            params.percentage,
            params.product_ids.len()
        ));

        if params.product_ids.is_empty() {
            return Err(ProductError::NoProductIds);
        }
        validate_discount(&params.percentage)?;

        let updated = self
            .repository
            .apply_discount_to_many(&params.product_ids, &params.percentage)
            .await?;

        self.logger
            .info(&format!("Discount applied to {} products", updated));
        Ok(updated)
    }
}
