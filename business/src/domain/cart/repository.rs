use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Cart, LineIncrement};

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Returns the user's cart, creating an empty one on first use.
    async fn get_or_create(&self, user_id: &UserId) -> Result<Cart, RepositoryError>;
    /// Adds each increment to the line of its product, creating the line if
    /// needed. Line quantities saturate at `MAX_LINE_QUANTITY`.
    ///
    /// The whole batch is applied atomically: on error no line is changed.
    /// Returns the resulting line quantities in input order.
    async fn merge_lines(
        &self,
        cart_id: Uuid,
        increments: &[LineIncrement],
    ) -> Result<Vec<u32>, RepositoryError>;
    /// Returns the number of removed lines.
    async fn remove_line(&self, cart_id: Uuid, product_id: Uuid) -> Result<u64, RepositoryError>;
}
