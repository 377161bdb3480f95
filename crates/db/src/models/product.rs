//! Product entity model and DTOs.

use catalog_core::error::CoreError;
use catalog_core::product::{validate_product, ProductFields};
use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
}

impl Product {
    /// Build a row from validated fields and a store-assigned id.
    pub fn from_fields(id: DbId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            quantity: fields.quantity,
        }
    }

    /// Overwrite all four mutable fields. The id is left untouched.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.quantity = fields.quantity;
    }
}

/// Transfer shape used for request bodies and single/list responses.
///
/// Every field is nullable on input; [`ProductDto::into_fields`] enforces the
/// bounds. A client-supplied `id` is never honoured on writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl ProductDto {
    /// Validate the mutable fields, discarding any supplied id.
    pub fn into_fields(self) -> Result<ProductFields, CoreError> {
        validate_product(self.name, self.description, self.price, self.quantity)
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: Some(product.name),
            description: product.description,
            price: Some(product.price),
            quantity: Some(product.quantity),
        }
    }
}

/// Result of a stock availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockDto {
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_deserializes_with_missing_fields_as_none() {
        let dto: ProductDto = serde_json::from_str(r#"{"name": "Widget"}"#).unwrap();
        assert_eq!(dto.name.as_deref(), Some("Widget"));
        assert!(dto.id.is_none());
        assert!(dto.price.is_none());
        assert!(dto.quantity.is_none());
    }

    #[test]
    fn into_fields_ignores_supplied_id() {
        let dto = ProductDto {
            id: Some(42),
            name: Some("Widget".into()),
            description: None,
            price: Some(9.99),
            quantity: Some(3),
        };
        let fields = dto.into_fields().unwrap();
        let product = Product::from_fields(7, fields);
        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Widget");
    }

    #[test]
    fn dto_from_product_serializes_all_fields() {
        let product = Product {
            id: 1,
            name: "Product1".into(),
            description: Some("Desc1".into()),
            price: 100.5,
            quantity: 50,
        };
        let json = serde_json::to_value(ProductDto::from(product)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Product1",
                "description": "Desc1",
                "price": 100.5,
                "quantity": 50,
            })
        );
    }

    #[test]
    fn apply_keeps_id() {
        let mut product = Product {
            id: 3,
            name: "Old".into(),
            description: Some("old".into()),
            price: 1.0,
            quantity: 1,
        };
        let fields = ProductDto {
            id: Some(99),
            name: Some("New".into()),
            description: None,
            price: Some(2.0),
            quantity: Some(4),
        }
        .into_fields()
        .unwrap();

        product.apply(fields);

        assert_eq!(product.id, 3);
        assert_eq!(product.name, "New");
        assert!(product.description.is_none());
        assert_eq!(product.quantity, 4);
    }
}
