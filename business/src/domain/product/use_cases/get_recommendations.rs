use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

/// Upper bound on the products suggested to one user.
pub const RECOMMENDATION_LIMIT: u32 = 5;

pub struct GetRecommendationsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetRecommendationsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetRecommendationsParams,
    ) -> Result<Vec<Product>, ProductError>;
}
