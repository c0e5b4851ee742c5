//! Order item DTOs for API requests and responses.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{NewOrderItem, OrderItem};

/// Request body for creating an order item. A client-supplied id is
/// ignored; the store assigns one.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItemRequest {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    #[schema(value_type = String, example = "9.99")]
    pub unit_price: BigDecimal,
}

impl CreateOrderItemRequest {
    pub fn into_new_order_item(self) -> NewOrderItem {
        NewOrderItem {
            order_id: self.order_id,
            product_id: self.product_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

/// Request body for updating an order item: the full entity state,
/// including the id, which must match the path.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderItemRequest {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    #[schema(value_type = String, example = "9.99")]
    pub unit_price: BigDecimal,
}

impl UpdateOrderItemRequest {
    pub fn into_order_item(self) -> OrderItem {
        OrderItem {
            id: self.id,
            order_id: self.order_id,
            product_id: self.product_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

/// Optional filters for the order item list endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemListQuery {
    /// Return only items belonging to this order
    pub order_id: Option<i32>,
}

/// Response body for order item data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    #[schema(value_type = String, example = "9.99")]
    pub unit_price: BigDecimal,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            order_id: item.order_id,
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_uses_camel_case_keys() {
        let request: CreateOrderItemRequest = serde_json::from_str(
            r#"{"orderId": 1, "productId": 2, "quantity": 3, "unitPrice": "4.50"}"#,
        )
        .unwrap();
        let item = request.into_new_order_item();
        assert_eq!(item.order_id, 1);
        assert_eq!(item.product_id, 2);
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn response_serializes_camel_case_keys() {
        let response = OrderItemResponse::from(OrderItem {
            id: 1,
            order_id: 2,
            product_id: 3,
            quantity: 4,
            unit_price: "5.25".parse().unwrap(),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["orderId"], 2);
        assert_eq!(json["productId"], 3);
        assert_eq!(json["unitPrice"], "5.25");
    }
}
