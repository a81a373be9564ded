use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Products that are both active and in stock.
    async fn get_purchasable(&self) -> Result<Vec<Product>, RepositoryError>;
    /// Sets the same discount on every listed product; unknown ids are
    /// ignored. Returns the number of updated products.
    async fn apply_discount_to_many(
        &self,
        ids: &[Uuid],
        percentage: &BigDecimal,
    ) -> Result<u64, RepositoryError>;
    /// Replaces the products recommended alongside `id`. Unknown ids are
    /// ignored.
    async fn set_related(&self, id: Uuid, related_ids: &[Uuid]) -> Result<(), RepositoryError>;
    /// Purchasable products related to any of `ids`, excluding `ids`
    /// themselves.
    async fn get_related_to(
        &self,
        ids: &[Uuid],
        limit: u32,
    ) -> Result<Vec<Product>, RepositoryError>;
    /// Most recently created purchasable products.
    async fn get_newest_purchasable(&self, limit: u32) -> Result<Vec<Product>, RepositoryError>;
}
