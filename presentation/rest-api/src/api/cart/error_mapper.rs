use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            CartError::QuantityInvalid | CartError::ProductUnavailable => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            CartError::ProductNotFound | CartError::ItemNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", &message)
            }
            CartError::Repository(_) => error_response(
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

    #[test]
    fn should_map_cart_errors_to_statuses() {
        let cases = [
            (CartError::QuantityInvalid, StatusCode::BAD_REQUEST, "cart.quantity_invalid"),
            (CartError::ProductUnavailable, StatusCode::BAD_REQUEST, "cart.product_unavailable"),
            (CartError::ProductNotFound, StatusCode::NOT_FOUND, "cart.product_not_found"),
            (CartError::ItemNotFound, StatusCode::NOT_FOUND, "cart.item_not_found"),
        ];

        for (err, expected_status, expected_message) in cases {
            let (status, json) = err.into_error_response();
            assert_eq!(status, expected_status);
            assert_eq!(json.0.message, expected_message);
        }
    }
}
