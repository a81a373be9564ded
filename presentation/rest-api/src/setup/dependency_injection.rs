use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::product::apply_discount::ApplyDiscountUseCaseImpl;
use business::application::product::bulk_discount::BulkDiscountUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_recommendations::GetRecommendationsUseCaseImpl;
use business::application::product::set_related::SetRelatedProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::voice_cart::process::ProcessVoiceCartUseCaseImpl;

use crate::api::cart::routes::CartApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::voice_cart::routes::VoiceCartApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub cart_api: CartApi,
    pub voice_cart_api: VoiceCartApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool));

        // Product use cases
        let product_api = ProductApi::new(
            Arc::new(CreateProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ApplyDiscountUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(BulkDiscountUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(SetRelatedProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetRecommendationsUseCaseImpl {
                product_repository: product_repository.clone(),
                cart_repository: cart_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Cart use cases
        let cart_api = CartApi::new(
            Arc::new(GetCartUseCaseImpl {
                repository: cart_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(AddCartItemUseCaseImpl {
                cart_repository: cart_repository.clone(),
                product_repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RemoveCartItemUseCaseImpl {
                repository: cart_repository.clone(),
                logger: logger.clone(),
            }),
        );

        let voice_cart_api = VoiceCartApi::new(Arc::new(ProcessVoiceCartUseCaseImpl {
            product_repository,
            cart_repository,
            logger,
        }));

        Self {
            health_api: HealthApi::new(),
            product_api,
            cart_api,
            voice_cart_api,
        }
    }
}
