#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.discount_out_of_range")]
    DiscountOutOfRange,
    #[error("product.ids_empty")]
    NoProductIds,
    #[error("product.related_to_itself")]
    RelatedToItself,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
