#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.quantity_invalid")]
    QuantityInvalid,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.product_unavailable")]
    ProductUnavailable,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
