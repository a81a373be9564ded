use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::voice_cart::use_cases::process::{
    ProcessVoiceCartParams, ProcessVoiceCartUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::AuthBearer;
use crate::api::tags::ApiTags;
use crate::api::voice_cart::dto::{VoiceCartRequest, VoiceCartResponse};

pub struct VoiceCartApi {
    process_use_case: Arc<dyn ProcessVoiceCartUseCase>,
}

impl VoiceCartApi {
    pub fn new(process_use_case: Arc<dyn ProcessVoiceCartUseCase>) -> Self {
        Self { process_use_case }
    }
}

#[OpenApi]
impl VoiceCartApi {
    /// Add products to my cart from a spoken request
    ///
    /// Detects catalog products and a quantity in a Spanish transcript
    /// ("quiero 2 camaras") and merges them into the caller's cart.
    #[oai(path = "/voice-to-cart", method = "post", tag = "ApiTags::VoiceCart")]
    async fn voice_to_cart(
        &self,
        auth: AuthBearer,
        body: Json<VoiceCartRequest>,
    ) -> VoiceToCartResponse {
        let params = ProcessVoiceCartParams {
            user_id: auth.0.user_id,
            transcript: body.0.transcript,
        };

        match self.process_use_case.execute(params).await {
            Ok(outcome) => VoiceToCartResponse::Ok(Json(outcome.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => VoiceToCartResponse::BadRequest(json),
                    404 => VoiceToCartResponse::NotFound(json),
                    _ => VoiceToCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum VoiceToCartResponse {
    #[oai(status = 200)]
    Ok(Json<VoiceCartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
