use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;

pub struct BulkDiscountParams {
    pub product_ids: Vec<Uuid>,
    /// Percentage in `[0, 100]`; zero removes the discount.
    pub percentage: BigDecimal,
}

#[async_trait]
pub trait BulkDiscountUseCase: Send + Sync {
    /// Returns how many products were updated.
    async fn execute(&self, params: BulkDiscountParams) -> Result<u64, ProductError>;
}
