//! Product CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header, header::HeaderName},
    routing::get,
};

use crate::api::doc::PRODUCT_TAG;
use crate::api::dto::{
    CreateProductRequest, ErrorResponse, ProductListQuery, ProductResponse, UpdateProductRequest,
};
use crate::api::handlers::ensure_matching_id;
use crate::error::AppError;
use crate::repositories::UnitOfWork;
use crate::state::AppState;

/// Creates product-related routes.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// GET /api/products - List products
#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductListQuery),
    responses((status = 200, description = "All products", body = [ProductResponse])),
    tag = PRODUCT_TAG
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let products = match query.name {
        Some(name) => uow.products().find_by_name(&name).await?,
        None => uow.products().get_all().await?,
    };
    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// GET /api/products/{id} - Get product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = PRODUCT_TAG
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponse>, AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let product = uow
        .products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("product", id))?;
    Ok(Json(ProductResponse::from(product)))
}

/// POST /api/products - Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses((status = 201, description = "Product created", body = ProductResponse)),
    tag = PRODUCT_TAG
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<ProductResponse>), AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let product = uow.products().add(payload.into_new_product()).await?;
    uow.complete().await?;

    let location = format!("/api/products/{}", product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ProductResponse::from(product)),
    ))
}

/// PUT /api/products/{id} - Replace a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product identifier")),
    request_body = UpdateProductRequest,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Path id does not match payload id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = PRODUCT_TAG
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<StatusCode, AppError> {
    ensure_matching_id(id, payload.id)?;

    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    uow.products().update(payload.into_product()).await?;
    uow.complete().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/products/{id} - Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product identifier")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = PRODUCT_TAG
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let Some(product) = uow.products().get_by_id(id).await? else {
        return Err(AppError::not_found("product", id));
    };
    uow.products().remove(product).await?;
    uow.complete().await?;
    Ok(StatusCode::NO_CONTENT)
}
