//! Customer DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::dto::OrderWithItemsResponse;
use crate::models::{Customer, CustomerWithOrders, NewCustomer};

/// Request body for creating a customer. A client-supplied id is ignored;
/// the store assigns one.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
}

impl CreateCustomerRequest {
    pub fn into_new_customer(self) -> NewCustomer {
        NewCustomer {
            name: self.name,
            email: self.email,
        }
    }
}

/// Request body for updating a customer: the full entity state, including
/// the id, which must match the path.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl UpdateCustomerRequest {
    pub fn into_customer(self) -> Customer {
        Customer {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Optional filters for the customer list endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListQuery {
    /// Return only customers with this exact email
    pub email: Option<String>,
}

/// Response body for customer data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
        }
    }
}

/// Response body for the eager-loaded customer graph.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerWithOrdersResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub orders: Vec<OrderWithItemsResponse>,
}

impl From<CustomerWithOrders> for CustomerWithOrdersResponse {
    fn from(graph: CustomerWithOrders) -> Self {
        Self {
            id: graph.customer.id,
            name: graph.customer.name,
            email: graph.customer.email,
            orders: graph
                .orders
                .into_iter()
                .map(OrderWithItemsResponse::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_ignores_client_supplied_id() {
        let request: CreateCustomerRequest = serde_json::from_str(
            r#"{"id": 99, "name": "John Doe", "email": "john@example.com"}"#,
        )
        .unwrap();
        let new_customer = request.into_new_customer();
        assert_eq!(new_customer.name, "John Doe");
        assert_eq!(new_customer.email, "john@example.com");
    }

    #[test]
    fn update_request_converts_to_full_row() {
        let request: UpdateCustomerRequest = serde_json::from_str(
            r#"{"id": 1, "name": "Updated Name", "email": "updated@example.com"}"#,
        )
        .unwrap();
        let customer = request.into_customer();
        assert_eq!(customer.id, 1);
        assert_eq!(customer.name, "Updated Name");
    }

    #[test]
    fn response_serializes_expected_fields() {
        let response = CustomerResponse::from(Customer {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "John Doe", "email": "john@example.com"})
        );
    }
}
