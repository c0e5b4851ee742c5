//! Router configuration for the API.
//!
//! Central route registration and middleware assembly.

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the application router with all routes and middleware.
///
/// Middleware is applied in reverse order of declaration (last added runs
/// first), so the request-id middleware runs before logging.
///
/// Routes:
/// - `/api/customers`, `/api/products`, `/api/orders`, `/api/orderitems`
/// - `/health`, `/health/ready`, `/health/live`
/// - `/swagger-ui`, `/api-docs/openapi.json`
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest("/customers", handlers::customers::customer_routes())
        .nest("/products", handlers::products::product_routes())
        .nest("/orders", handlers::orders::order_routes())
        .nest("/orderitems", handlers::order_items::order_item_routes());

    Router::new()
        .merge(handlers::health::health_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    //! Dispatch tests over an unconnected pool: every request below is
    //! answered before any database access happens.

    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use diesel_async::AsyncPgConnection;
    use diesel_async::pooled_connection::AsyncDieselConnectionManager;
    use diesel_async::pooled_connection::bb8::Pool;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(
            "postgres://localhost/unreachable",
        );
        let pool = Pool::builder().build_unchecked(manager);
        create_router(AppState::new(pool))
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/invoices")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_integer_id_is_rejected() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/customers/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn put_with_mismatched_ids_is_rejected_before_store_access() {
        let body = serde_json::json!({
            "id": 2,
            "name": "John Doe",
            "email": "john@example.com",
        });
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method(Method::PUT)
                    .uri("/api/customers/1")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn put_order_with_mismatched_ids_is_rejected() {
        let body = serde_json::json!({
            "id": 7,
            "orderDate": "2024-01-15T10:30:00",
            "status": "Pending",
            "customerId": 1,
        });
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method(Method::PUT)
                    .uri("/api/orders/8")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn liveness_probe_responds() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn provided_request_id_is_echoed() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .header("x-request-id", "req-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()["x-request-id"], "req-42");
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
