use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::model::LineIncrement;
use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::voice_cart::errors::VoiceCartError;
use crate::domain::voice_cart::matcher::detect_products;
use crate::domain::voice_cart::model::{AddedItem, CatalogEntry, VoiceCartOutcome};
use crate::domain::voice_cart::use_cases::process::{
    ProcessVoiceCartParams, ProcessVoiceCartUseCase,
};

pub struct ProcessVoiceCartUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ProcessVoiceCartUseCase for ProcessVoiceCartUseCaseImpl {
    async fn execute(
        &self,
        params: ProcessVoiceCartParams,
    ) -> Result<VoiceCartOutcome, VoiceCartError> {
        let transcript = params.transcript.trim();
        if transcript.is_empty() {
            return Err(VoiceCartError::TranscriptEmpty);
        }

        self.logger.info(&format!(
            "Processing voice request for user {}: \"{}\"",
            params.user_id, transcript
        ));

        // Catalog order is the repository order; detection follows it.
        let products = self.product_repository.get_purchasable().await?;
        let catalog: Vec<CatalogEntry> = products
            .iter()
            .map(|p| CatalogEntry::new(p.id, p.name.clone()))
            .collect();
        let names: HashMap<Uuid, &str> = products
            .iter()
            .map(|p| (p.id, p.name.as_str()))
            .collect();

        let detected = detect_products(transcript, &catalog);
        self.logger.debug(&format!(
            "Detected {} of {} catalog products",
            detected.len(),
            catalog.len()
        ));

        if detected.is_empty() {
            self.logger
                .warn(&format!("No products detected in: \"{}\"", transcript));
            return Err(VoiceCartError::NoProductsDetected);
        }

        let cart = self.cart_repository.get_or_create(&params.user_id).await?;

        let increments: Vec<LineIncrement> = detected
            .iter()
            .map(|item| LineIncrement {
                product_id: item.product_id,
                quantity: item.quantity,
            })
            .collect();
        // Applied atomically: every line is merged or none is.
        let line_quantities = self
            .cart_repository
            .merge_lines(cart.id, &increments)
            .await?;

        let added_items: Vec<AddedItem> = detected
            .iter()
            .zip(line_quantities)
            .map(|(item, line_quantity)| AddedItem {
                product_id: item.product_id,
                product_name: names
                    .get(&item.product_id)
                    .map(|name| name.to_string())
                    .unwrap_or_default(),
                quantity: item.quantity,
                line_quantity,
            })
            .collect();

        let cart = self.cart_repository.get_or_create(&params.user_id).await?;
        let cart_total = cart.total_price();

        self.logger.info(&format!(
            "Voice request added {} products to cart {} (total {})",
            added_items.len(),
            cart.id,
            cart_total
        ));

        Ok(VoiceCartOutcome {
            added_items,
            cart_total,
        })
    }
}
