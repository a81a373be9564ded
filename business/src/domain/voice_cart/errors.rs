#[derive(Debug, thiserror::Error)]
pub enum VoiceCartError {
    #[error("voice_cart.transcript_empty")]
    TranscriptEmpty,
    #[error("voice_cart.no_products_detected")]
    NoProductsDetected,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
