use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::voice_cart::errors::VoiceCartError;
use crate::domain::voice_cart::model::VoiceCartOutcome;

pub struct ProcessVoiceCartParams {
    pub user_id: UserId,
    pub transcript: String,
}

/// Turns a spoken request into cart lines for the requesting user.
#[async_trait]
pub trait ProcessVoiceCartUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ProcessVoiceCartParams,
    ) -> Result<VoiceCartOutcome, VoiceCartError>;
}
