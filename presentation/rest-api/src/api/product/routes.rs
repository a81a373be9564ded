use std::sync::Arc;

use num_traits::Zero;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use bigdecimal::BigDecimal;
use business::domain::product::use_cases::apply_discount::{
    ApplyDiscountParams, ApplyDiscountUseCase,
};
use business::domain::product::use_cases::bulk_discount::{BulkDiscountParams, BulkDiscountUseCase};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_recommendations::{
    GetRecommendationsParams, GetRecommendationsUseCase,
};
use business::domain::product::use_cases::set_related::{
    SetRelatedProductsParams, SetRelatedProductsUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::amount::from_amount;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    ApplyDiscountRequest, BulkDiscountRequest, BulkDiscountResponse, CreateProductRequest,
    ProductResponse, SetRelatedProductsRequest, UpdateProductRequest,
};
use crate::api::security::AuthBearer;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    apply_discount_use_case: Arc<dyn ApplyDiscountUseCase>,
    bulk_discount_use_case: Arc<dyn BulkDiscountUseCase>,
    set_related_use_case: Arc<dyn SetRelatedProductsUseCase>,
    recommendations_use_case: Arc<dyn GetRecommendationsUseCase>,
}

impl ProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        apply_discount_use_case: Arc<dyn ApplyDiscountUseCase>,
        bulk_discount_use_case: Arc<dyn BulkDiscountUseCase>,
        set_related_use_case: Arc<dyn SetRelatedProductsUseCase>,
        recommendations_use_case: Arc<dyn GetRecommendationsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            apply_discount_use_case,
            bulk_discount_use_case,
            set_related_use_case,
            recommendations_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::validation("product.invalid_id"))
}

fn parse_price(value: f64) -> Result<BigDecimal, Json<ErrorResponse>> {
    from_amount(value).ok_or_else(|| ErrorResponse::validation("product.price_invalid"))
}

/// Product catalog API
///
/// Reads are open to any authenticated user; changes require a staff token.
#[OpenApi]
impl ProductApi {
    /// Create a product
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        auth: AuthBearer,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        if !auth.0.is_staff {
            return CreateProductResponse::Forbidden(ErrorResponse::forbidden());
        }

        let body = body.0;
        let price = match parse_price(body.price) {
            Ok(price) => price,
            Err(json) => return CreateProductResponse::BadRequest(json),
        };
        let discount_percentage = match body.discount_percentage {
            None => BigDecimal::zero(),
            Some(pct) => match from_amount(pct) {
                Some(pct) => pct,
                None => {
                    return CreateProductResponse::BadRequest(ErrorResponse::validation(
                        "product.discount_out_of_range",
                    ));
                }
            },
        };

        let params = CreateProductParams {
            name: body.name,
            description: body.description,
            price,
            stock: body.stock,
            is_active: body.is_active.unwrap_or(true),
            discount_percentage,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Staff see the whole catalog; customers only see purchasable products.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self, auth: AuthBearer) -> GetAllProductsResponse {
        let params = GetAllProductsParams {
            include_unpurchasable: auth.0.is_staff,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, _auth: AuthBearer, id: Path<String>) -> GetProductByIdResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetProductByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: AuthBearer,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        if !auth.0.is_staff {
            return UpdateProductResponse::Forbidden(ErrorResponse::forbidden());
        }
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let body = body.0;
        let price = match body.price.map(parse_price).transpose() {
            Ok(price) => price,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let params = UpdateProductParams {
            id,
            name: body.name,
            description: body.description,
            price,
            stock: body.stock,
            is_active: body.is_active,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, auth: AuthBearer, id: Path<String>) -> DeleteProductResponse {
        if !auth.0.is_staff {
            return DeleteProductResponse::Forbidden(ErrorResponse::forbidden());
        }
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Apply a discount
    ///
    /// Sets the discount percentage; zero removes it.
    #[oai(
        path = "/products/:id/discount",
        method = "post",
        tag = "ApiTags::Products"
    )]
    async fn apply_discount(
        &self,
        auth: AuthBearer,
        id: Path<String>,
        body: Json<ApplyDiscountRequest>,
    ) -> ApplyDiscountResponse {
        if !auth.0.is_staff {
            return ApplyDiscountResponse::Forbidden(ErrorResponse::forbidden());
        }
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return ApplyDiscountResponse::BadRequest(json),
        };
        let Some(percentage) = from_amount(body.0.percentage) else {
            return ApplyDiscountResponse::BadRequest(ErrorResponse::validation(
                "product.discount_out_of_range",
            ));
        };

        match self
            .apply_discount_use_case
            .execute(ApplyDiscountParams { id, percentage })
            .await
        {
            Ok(product) => ApplyDiscountResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ApplyDiscountResponse::BadRequest(json),
                    404 => ApplyDiscountResponse::NotFound(json),
                    _ => ApplyDiscountResponse::InternalError(json),
                }
            }
        }
    }

    /// Apply a discount to several products
    ///
    /// Unknown ids are ignored; the response counts the updated products.
    #[oai(
        path = "/products/bulk-discount",
        method = "post",
        tag = "ApiTags::Products"
    )]
    async fn bulk_discount(
        &self,
        auth: AuthBearer,
        body: Json<BulkDiscountRequest>,
    ) -> BulkDiscountApiResponse {
        if !auth.0.is_staff {
            return BulkDiscountApiResponse::Forbidden(ErrorResponse::forbidden());
        }
        let body = body.0;
        let Some(percentage) = from_amount(body.percentage) else {
            return BulkDiscountApiResponse::BadRequest(ErrorResponse::validation(
                "product.discount_out_of_range",
            ));
        };

        let params = BulkDiscountParams {
            product_ids: body.product_ids,
            percentage,
        };

        match self.bulk_discount_use_case.execute(params).await {
            Ok(updated_count) => {
                BulkDiscountApiResponse::Ok(Json(BulkDiscountResponse { updated_count }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => BulkDiscountApiResponse::BadRequest(json),
                    _ => BulkDiscountApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Set the products recommended alongside a product
    #[oai(
        path = "/products/:id/related",
        method = "put",
        tag = "ApiTags::Products"
    )]
    async fn set_related_products(
        &self,
        auth: AuthBearer,
        id: Path<String>,
        body: Json<SetRelatedProductsRequest>,
    ) -> SetRelatedProductsResponse {
        if !auth.0.is_staff {
            return SetRelatedProductsResponse::Forbidden(ErrorResponse::forbidden());
        }
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return SetRelatedProductsResponse::BadRequest(json),
        };

        let params = SetRelatedProductsParams {
            id,
            related_ids: body.0.related_product_ids,
        };

        match self.set_related_use_case.execute(params).await {
            Ok(()) => SetRelatedProductsResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SetRelatedProductsResponse::BadRequest(json),
                    404 => SetRelatedProductsResponse::NotFound(json),
                    _ => SetRelatedProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Recommended products for me
    ///
    /// Up to five purchasable products related to my cart, or the newest
    /// products while my cart is empty.
    #[oai(
        path = "/products/recommendations",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn recommendations(&self, auth: AuthBearer) -> RecommendationsResponse {
        let params = GetRecommendationsParams {
            user_id: auth.0.user_id,
        };

        match self.recommendations_use_case.execute(params).await {
            Ok(products) => RecommendationsResponse::Ok(Json(
                products.into_iter().map(|p| p.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RecommendationsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ApplyDiscountResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum BulkDiscountApiResponse {
    #[oai(status = 200)]
    Ok(Json<BulkDiscountResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SetRelatedProductsResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecommendationsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
