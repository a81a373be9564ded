use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Fetching cart for user: {}", params.user_id));

        let cart = self.repository.get_or_create(&params.user_id).await?;

        self.logger.debug(&format!(
            "Cart {} has {} lines",
            cart.id,
            cart.lines.len()
        ));
        Ok(cart)
    }
}
