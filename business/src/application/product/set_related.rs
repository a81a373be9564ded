use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::set_related::{
    SetRelatedProductsParams, SetRelatedProductsUseCase,
};

pub struct SetRelatedProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetRelatedProductsUseCase for SetRelatedProductsUseCaseImpl {
    async fn execute(&self, params: SetRelatedProductsParams) -> Result<(), ProductError> {
        self.logger.info(&format!(
            "Relating {} products to product {}",
            params.related_ids.len(),
            params.id
        ));

        if params.related_ids.contains(&params.id) {
            return Err(ProductError::RelatedToItself);
        }

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.repository
            .set_related(params.id, &params.related_ids)
            .await?;
        Ok(())
    }
}
