use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct ApplyDiscountParams {
    pub id: Uuid,
    /// Percentage in `[0, 100]`; zero removes the discount.
    pub percentage: BigDecimal,
}

#[async_trait]
pub trait ApplyDiscountUseCase: Send + Sync {
    async fn execute(&self, params: ApplyDiscountParams) -> Result<Product, ProductError>;
}
