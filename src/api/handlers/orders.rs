//! Order CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header, header::HeaderName},
    routing::get,
};

use crate::api::doc::ORDER_TAG;
use crate::api::dto::{
    CreateOrderRequest, ErrorResponse, OrderListQuery, OrderResponse, UpdateOrderRequest,
};
use crate::api::handlers::ensure_matching_id;
use crate::error::AppError;
use crate::repositories::UnitOfWork;
use crate::state::AppState;

/// Creates order-related routes.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route(
            "/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
}

/// GET /api/orders - List orders
#[utoipa::path(
    get,
    path = "/api/orders",
    params(OrderListQuery),
    responses((status = 200, description = "All orders", body = [OrderResponse])),
    tag = ORDER_TAG
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let filter = query.into_filter();
    let orders = if filter.is_empty() {
        uow.orders().get_all().await?
    } else {
        uow.orders().find(filter).await?
    };
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

/// GET /api/orders/{id} - Get order by ID
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i32, Path, description = "Order identifier")),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = ORDER_TAG
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<OrderResponse>, AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let order = uow
        .orders()
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("order", id))?;
    Ok(Json(OrderResponse::from(order)))
}

/// POST /api/orders - Create an order
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses((status = 201, description = "Order created", body = OrderResponse)),
    tag = ORDER_TAG
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<OrderResponse>), AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let order = uow.orders().add(payload.into_new_order()).await?;
    uow.complete().await?;

    let location = format!("/api/orders/{}", order.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(OrderResponse::from(order)),
    ))
}

/// PUT /api/orders/{id} - Replace an order
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    params(("id" = i32, Path, description = "Order identifier")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 204, description = "Order updated"),
        (status = 400, description = "Path id does not match payload id", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = ORDER_TAG
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderRequest>,
) -> Result<StatusCode, AppError> {
    ensure_matching_id(id, payload.id)?;

    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    uow.orders().update(payload.into_order()).await?;
    uow.complete().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/orders/{id} - Delete an order
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(("id" = i32, Path, description = "Order identifier")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = ORDER_TAG
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let Some(order) = uow.orders().get_by_id(id).await? else {
        return Err(AppError::not_found("order", id));
    };
    uow.orders().remove(order).await?;
    uow.complete().await?;
    Ok(StatusCode::NO_CONTENT)
}
