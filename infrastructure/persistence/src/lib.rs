pub mod db;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}

use business::domain::errors::RepositoryError;

/// Logs the driver error and hides it behind the domain error.
pub(crate) fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!(target: "SmartCart -- ", "database error: {}", e);
    RepositoryError::DatabaseError
}
