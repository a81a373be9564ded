use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::voice_cart::errors::VoiceCartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for VoiceCartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            VoiceCartError::TranscriptEmpty => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "voice_cart.transcript_empty",
            ),
            VoiceCartError::NoProductsDetected => error_response(
                StatusCode::NOT_FOUND,
                "NotFound",
                "voice_cart.no_products_detected",
            ),
            VoiceCartError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
