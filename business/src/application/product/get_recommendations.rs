use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_recommendations::{
    GetRecommendationsParams, GetRecommendationsUseCase, RECOMMENDATION_LIMIT,
};

/// Suggests products related to what the user already has in the cart, or
/// the newest products when the cart is empty.
pub struct GetRecommendationsUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecommendationsUseCase for GetRecommendationsUseCaseImpl {
    async fn execute(
        &self,
        params: GetRecommendationsParams,
    ) -> Result<Vec<Product>, ProductError> {
        let cart = self.cart_repository.get_or_create(&params.user_id).await?;
        let in_cart: Vec<Uuid> = cart.lines.iter().map(|line| line.product_id).collect();

        let products = if in_cart.is_empty() {
            self.logger.info(&format!(
                "Cart of user {} is empty; recommending newest products",
                params.user_id
            ));
            self.product_repository
                .get_newest_purchasable(RECOMMENDATION_LIMIT)
                .await?
        } else {
            self.product_repository
                .get_related_to(&in_cart, RECOMMENDATION_LIMIT)
                .await?
        };

        self.logger.info(&format!(
            "Recommending {} products to user {}",
            products.len(),
            params.user_id
        ));
        Ok(products)
    }
}
