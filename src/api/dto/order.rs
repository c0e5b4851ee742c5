//! Order DTOs for API requests and responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::dto::OrderItemResponse;
use crate::models::{NewOrder, Order, OrderWithItems};
use crate::repositories::OrderFilter;

/// Wire format for order timestamps.
const ORDER_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Request body for creating an order. A client-supplied id is ignored;
/// the store assigns one.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[schema(value_type = String, format = DateTime, example = "2024-01-15T10:30:00")]
    pub order_date: NaiveDateTime,
    pub status: String,
    pub customer_id: i32,
}

impl CreateOrderRequest {
    pub fn into_new_order(self) -> NewOrder {
        NewOrder {
            order_date: self.order_date,
            status: self.status,
            customer_id: self.customer_id,
        }
    }
}

/// Request body for updating an order: the full entity state, including
/// the id, which must match the path.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub id: i32,
    #[schema(value_type = String, format = DateTime, example = "2024-01-15T10:30:00")]
    pub order_date: NaiveDateTime,
    pub status: String,
    pub customer_id: i32,
}

impl UpdateOrderRequest {
    pub fn into_order(self) -> Order {
        Order {
            id: self.id,
            order_date: self.order_date,
            status: self.status,
            customer_id: self.customer_id,
        }
    }
}

/// Optional filters for the order list endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    /// Return only orders with this exact status
    pub status: Option<String>,
    /// Return only orders belonging to this customer
    pub customer_id: Option<i32>,
}

impl OrderListQuery {
    pub fn into_filter(self) -> OrderFilter {
        OrderFilter {
            status: self.status,
            customer_id: self.customer_id,
        }
    }
}

/// Response body for order data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i32,
    #[schema(value_type = String, format = DateTime)]
    pub order_date: String,
    pub status: String,
    pub customer_id: i32,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            order_date: order.order_date.format(ORDER_DATE_FORMAT).to_string(),
            status: order.status,
            customer_id: order.customer_id,
        }
    }
}

/// Response body for an order inside the eager-loaded customer graph.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithItemsResponse {
    pub id: i32,
    #[schema(value_type = String, format = DateTime)]
    pub order_date: String,
    pub status: String,
    pub customer_id: i32,
    pub items: Vec<OrderItemResponse>,
}

impl From<OrderWithItems> for OrderWithItemsResponse {
    fn from(graph: OrderWithItems) -> Self {
        Self {
            id: graph.order.id,
            order_date: graph.order.order_date.format(ORDER_DATE_FORMAT).to_string(),
            status: graph.order.status,
            customer_id: graph.order.customer_id,
            items: graph
                .items
                .into_iter()
                .map(OrderItemResponse::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn create_request_uses_camel_case_keys() {
        let request: CreateOrderRequest = serde_json::from_str(
            r#"{"orderDate": "2024-01-15T10:30:00", "status": "Pending", "customerId": 1}"#,
        )
        .unwrap();
        let new_order = request.into_new_order();
        assert_eq!(new_order.order_date, order_date());
        assert_eq!(new_order.status, "Pending");
        assert_eq!(new_order.customer_id, 1);
    }

    #[test]
    fn response_formats_date_and_camel_cases_keys() {
        let response = OrderResponse::from(Order {
            id: 5,
            order_date: order_date(),
            status: "Pending".to_string(),
            customer_id: 1,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["orderDate"], "2024-01-15T10:30:00.000");
        assert_eq!(json["customerId"], 1);
    }

    #[test]
    fn response_date_round_trips_into_update_request() {
        let response = OrderResponse::from(Order {
            id: 5,
            order_date: order_date(),
            status: "Pending".to_string(),
            customer_id: 1,
        });
        let body = serde_json::json!({
            "id": response.id,
            "orderDate": response.order_date,
            "status": "Shipped",
            "customerId": response.customer_id,
        });
        let request: UpdateOrderRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.into_order().order_date, order_date());
    }

    #[test]
    fn list_query_maps_to_filter() {
        let query = OrderListQuery {
            status: Some("Pending".to_string()),
            customer_id: Some(3),
        };
        let filter = query.into_filter();
        assert_eq!(filter.status.as_deref(), Some("Pending"));
        assert_eq!(filter.customer_id, Some(3));
    }
}
