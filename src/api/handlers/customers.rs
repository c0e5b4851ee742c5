//! Customer CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header, header::HeaderName},
    routing::get,
};

use crate::api::doc::CUSTOMER_TAG;
use crate::api::dto::{
    CreateCustomerRequest, CustomerListQuery, CustomerResponse, CustomerWithOrdersResponse,
    ErrorResponse, UpdateCustomerRequest,
};
use crate::api::handlers::ensure_matching_id;
use crate::error::AppError;
use crate::repositories::UnitOfWork;
use crate::state::AppState;

/// Creates customer-related routes.
///
/// Routes:
/// - GET /            - List customers (optional email filter)
/// - POST /           - Create a customer
/// - GET /{id}        - Get customer by ID
/// - PUT /{id}        - Update customer by ID
/// - DELETE /{id}     - Delete customer by ID
/// - GET /{id}/orders - Customer with orders and items eagerly loaded
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/{id}/orders", get(get_customer_orders))
}

/// GET /api/customers - List customers
#[utoipa::path(
    get,
    path = "/api/customers",
    params(CustomerListQuery),
    responses((status = 200, description = "All customers", body = [CustomerResponse])),
    tag = CUSTOMER_TAG
)]
pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<CustomerListQuery>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let customers = match query.email {
        Some(email) => uow.customers().find_by_email(&email).await?,
        None => uow.customers().get_all().await?,
    };
    Ok(Json(
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}

/// GET /api/customers/{id} - Get customer by ID
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(("id" = i32, Path, description = "Customer identifier")),
    responses(
        (status = 200, description = "Customer found", body = CustomerResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = CUSTOMER_TAG
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CustomerResponse>, AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let customer = uow
        .customers()
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("customer", id))?;
    Ok(Json(CustomerResponse::from(customer)))
}

/// GET /api/customers/{id}/orders - Customer with its orders eagerly loaded
#[utoipa::path(
    get,
    path = "/api/customers/{id}/orders",
    params(("id" = i32, Path, description = "Customer identifier")),
    responses(
        (status = 200, description = "Customer with orders", body = CustomerWithOrdersResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = CUSTOMER_TAG
)]
pub async fn get_customer_orders(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CustomerWithOrdersResponse>, AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let graph = uow
        .customers()
        .get_with_orders(id)
        .await?
        .ok_or_else(|| AppError::not_found("customer", id))?;
    Ok(Json(CustomerWithOrdersResponse::from(graph)))
}

/// POST /api/customers - Create a customer
#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = CreateCustomerRequest,
    responses((status = 201, description = "Customer created", body = CustomerResponse)),
    tag = CUSTOMER_TAG
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<CustomerResponse>), AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let customer = uow.customers().add(payload.into_new_customer()).await?;
    uow.complete().await?;

    let location = format!("/api/customers/{}", customer.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CustomerResponse::from(customer)),
    ))
}

/// PUT /api/customers/{id} - Replace a customer
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    params(("id" = i32, Path, description = "Customer identifier")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 204, description = "Customer updated"),
        (status = 400, description = "Path id does not match payload id", body = ErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = CUSTOMER_TAG
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCustomerRequest>,
) -> Result<StatusCode, AppError> {
    ensure_matching_id(id, payload.id)?;

    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    uow.customers().update(payload.into_customer()).await?;
    uow.complete().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/customers/{id} - Delete a customer
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    params(("id" = i32, Path, description = "Customer identifier")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = CUSTOMER_TAG
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let Some(customer) = uow.customers().get_by_id(id).await? else {
        return Err(AppError::not_found("customer", id));
    };
    uow.customers().remove(customer).await?;
    uow.complete().await?;
    Ok(StatusCode::NO_CONTENT)
}
