//! Product DTOs for API requests and responses.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{NewProduct, Product};

/// Request body for creating a product. A client-supplied id is ignored;
/// the store assigns one.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "9.99")]
    pub price: BigDecimal,
}

impl CreateProductRequest {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

/// Request body for updating a product: the full entity state, including
/// the id, which must match the path.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "9.99")]
    pub price: BigDecimal,
}

impl UpdateProductRequest {
    pub fn into_product(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

/// Optional filters for the product list endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    /// Return only products whose name contains this term (case-insensitive)
    pub name: Option<String>,
}

/// Response body for product data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "9.99")]
    pub price: BigDecimal,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_decimal_price() {
        let request: CreateProductRequest = serde_json::from_str(
            r#"{"name": "Widget", "description": "A widget", "price": "19.95"}"#,
        )
        .unwrap();
        let new_product = request.into_new_product();
        assert_eq!(new_product.price, "19.95".parse::<BigDecimal>().unwrap());
    }

    #[test]
    fn update_request_converts_to_full_row() {
        let request: UpdateProductRequest = serde_json::from_str(
            r#"{"id": 3, "name": "Widget", "description": "Improved", "price": "24.50"}"#,
        )
        .unwrap();
        let product = request.into_product();
        assert_eq!(product.id, 3);
        assert_eq!(product.description, "Improved");
    }
}
