use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;

pub struct SetRelatedProductsParams {
    pub id: Uuid,
    pub related_ids: Vec<Uuid>,
}

#[async_trait]
pub trait SetRelatedProductsUseCase: Send + Sync {
    async fn execute(&self, params: SetRelatedProductsParams) -> Result<(), ProductError>;
}
