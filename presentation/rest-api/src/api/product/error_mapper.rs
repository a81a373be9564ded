use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            ProductError::NameEmpty
            | ProductError::PriceNegative
            | ProductError::DiscountOutOfRange
            | ProductError::NoProductIds
            | ProductError::RelatedToItself => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            ProductError::NotFound => error_response(StatusCode::NOT_FOUND, "NotFound", &message),
            ProductError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        for err in [
            ProductError::NameEmpty,
            ProductError::PriceNegative,
            ProductError::DiscountOutOfRange,
            ProductError::NoProductIds,
            ProductError::RelatedToItself,
        ] {
            let (status, _) = err.into_error_response();
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn should_map_not_found_with_code_message() {
        let (status, json) = ProductError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "product.not_found");
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, json) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
