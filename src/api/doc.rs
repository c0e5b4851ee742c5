use utoipa::OpenApi;

pub const CUSTOMER_TAG: &str = "Customers";
pub const PRODUCT_TAG: &str = "Products";
pub const ORDER_TAG: &str = "Orders";
pub const ORDER_ITEM_TAG: &str = "OrderItems";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Tracking API",
        description = "CRUD API for customers, products, orders, and order items",
    ),
    paths(
        crate::api::handlers::customers::list_customers,
        crate::api::handlers::customers::get_customer,
        crate::api::handlers::customers::get_customer_orders,
        crate::api::handlers::customers::create_customer,
        crate::api::handlers::customers::update_customer,
        crate::api::handlers::customers::delete_customer,
        crate::api::handlers::products::list_products,
        crate::api::handlers::products::get_product,
        crate::api::handlers::products::create_product,
        crate::api::handlers::products::update_product,
        crate::api::handlers::products::delete_product,
        crate::api::handlers::orders::list_orders,
        crate::api::handlers::orders::get_order,
        crate::api::handlers::orders::create_order,
        crate::api::handlers::orders::update_order,
        crate::api::handlers::orders::delete_order,
        crate::api::handlers::order_items::list_order_items,
        crate::api::handlers::order_items::get_order_item,
        crate::api::handlers::order_items::create_order_item,
        crate::api::handlers::order_items::update_order_item,
        crate::api::handlers::order_items::delete_order_item,
        crate::api::handlers::health::health_check,
        crate::api::handlers::health::readiness_check,
        crate::api::handlers::health::liveness_check,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = CUSTOMER_TAG, description = "Customer management endpoints"),
        (name = PRODUCT_TAG, description = "Product management endpoints"),
        (name = ORDER_TAG, description = "Order management endpoints"),
        (name = ORDER_ITEM_TAG, description = "Order item management endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_all_entity_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/customers"));
        assert!(paths.contains_key("/api/customers/{id}"));
        assert!(paths.contains_key("/api/customers/{id}/orders"));
        assert!(paths.contains_key("/api/products/{id}"));
        assert!(paths.contains_key("/api/orders/{id}"));
        assert!(paths.contains_key("/api/orderitems/{id}"));
        assert!(paths.contains_key("/health"));
    }
}
