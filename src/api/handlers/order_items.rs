//! Order item CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header, header::HeaderName},
    routing::get,
};

use crate::api::doc::ORDER_ITEM_TAG;
use crate::api::dto::{
    CreateOrderItemRequest, ErrorResponse, OrderItemListQuery, OrderItemResponse,
    UpdateOrderItemRequest,
};
use crate::api::handlers::ensure_matching_id;
use crate::error::AppError;
use crate::repositories::UnitOfWork;
use crate::state::AppState;

/// Creates order-item-related routes.
pub fn order_item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_order_items).post(create_order_item))
        .route(
            "/{id}",
            get(get_order_item)
                .put(update_order_item)
                .delete(delete_order_item),
        )
}

/// GET /api/orderitems - List order items
#[utoipa::path(
    get,
    path = "/api/orderitems",
    params(OrderItemListQuery),
    responses((status = 200, description = "All order items", body = [OrderItemResponse])),
    tag = ORDER_ITEM_TAG
)]
pub async fn list_order_items(
    State(state): State<AppState>,
    Query(query): Query<OrderItemListQuery>,
) -> Result<Json<Vec<OrderItemResponse>>, AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let items = match query.order_id {
        Some(order_id) => uow.order_items().find_by_order(order_id).await?,
        None => uow.order_items().get_all().await?,
    };
    Ok(Json(items.into_iter().map(OrderItemResponse::from).collect()))
}

/// GET /api/orderitems/{id} - Get order item by ID
#[utoipa::path(
    get,
    path = "/api/orderitems/{id}",
    params(("id" = i32, Path, description = "Order item identifier")),
    responses(
        (status = 200, description = "Order item found", body = OrderItemResponse),
        (status = 404, description = "Order item not found", body = ErrorResponse)
    ),
    tag = ORDER_ITEM_TAG
)]
pub async fn get_order_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<OrderItemResponse>, AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let item = uow
        .order_items()
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("order item", id))?;
    Ok(Json(OrderItemResponse::from(item)))
}

/// POST /api/orderitems - Create an order item
#[utoipa::path(
    post,
    path = "/api/orderitems",
    request_body = CreateOrderItemRequest,
    responses((status = 201, description = "Order item created", body = OrderItemResponse)),
    tag = ORDER_ITEM_TAG
)]
pub async fn create_order_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderItemRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<OrderItemResponse>), AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let item = uow.order_items().add(payload.into_new_order_item()).await?;
    uow.complete().await?;

    let location = format!("/api/orderitems/{}", item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(OrderItemResponse::from(item)),
    ))
}

/// PUT /api/orderitems/{id} - Replace an order item
#[utoipa::path(
    put,
    path = "/api/orderitems/{id}",
    params(("id" = i32, Path, description = "Order item identifier")),
    request_body = UpdateOrderItemRequest,
    responses(
        (status = 204, description = "Order item updated"),
        (status = 400, description = "Path id does not match payload id", body = ErrorResponse),
        (status = 404, description = "Order item not found", body = ErrorResponse)
    ),
    tag = ORDER_ITEM_TAG
)]
pub async fn update_order_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderItemRequest>,
) -> Result<StatusCode, AppError> {
    ensure_matching_id(id, payload.id)?;

    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    uow.order_items().update(payload.into_order_item()).await?;
    uow.complete().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/orderitems/{id} - Delete an order item
#[utoipa::path(
    delete,
    path = "/api/orderitems/{id}",
    params(("id" = i32, Path, description = "Order item identifier")),
    responses(
        (status = 204, description = "Order item deleted"),
        (status = 404, description = "Order item not found", body = ErrorResponse)
    ),
    tag = ORDER_ITEM_TAG
)]
pub async fn delete_order_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let mut uow = UnitOfWork::begin(&state.db_pool).await?;
    let Some(item) = uow.order_items().get_by_id(id).await? else {
        return Err(AppError::not_found("order item", id));
    };
    uow.order_items().remove(item).await?;
    uow.complete().await?;
    Ok(StatusCode::NO_CONTENT)
}
