//! Product validation rules and error messages.
//!
//! Field violations are accumulated into a single message with no separator
//! between fragments, in field order: name, description, price, quantity.
//! Clients match on the exact text, so the fragments must not change.

use validator::ValidateLength;

use crate::error::CoreError;
use crate::types::DbId;

/* --------------------------------------------------------------------------
Messages
-------------------------------------------------------------------------- */

pub const INVALID_ID: &str = "Invalid product ID. ID must be greater than 0.";
pub const NAME_REQUIRED: &str = "Name is required.";
pub const NAME_LENGTH: &str = "Name should be between 1 and 100 characters.";
pub const DESCRIPTION_LENGTH: &str = "Description should be between 1 and 1000 characters.";
pub const PRICE_RANGE: &str = "Price should be greater than or equal to 0.";
pub const QUANTITY_RANGE: &str = "Quantity should be greater than or equal to 0.";

/// Maximum product name length in characters.
pub const MAX_NAME_LEN: u64 = 100;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LEN: u64 = 1000;

/* --------------------------------------------------------------------------
Types
-------------------------------------------------------------------------- */

/// The four mutable product fields after validation.
///
/// Only [`validate_product`] builds this, so holding one means every field
/// bound has been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
}

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate a product id. Absent and non-positive ids are rejected.
pub fn validate_id(id: Option<DbId>) -> Result<DbId, CoreError> {
    match id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(CoreError::BadRequest(INVALID_ID.to_string())),
    }
}

fn is_blank(name: &str) -> bool {
    name.trim_matches(|c: char| c <= ' ').is_empty()
}

/// Validate raw product fields, returning them in checked form.
///
/// A blank name reports only [`NAME_REQUIRED`]; the length check is skipped
/// in that case. Blank means empty after stripping ASCII control characters
/// and spaces (`<= U+0020`); other Unicode whitespace counts as content.
pub fn validate_product(
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    quantity: Option<i64>,
) -> Result<ProductFields, CoreError> {
    let mut message = String::new();

    let name = match name {
        Some(name) if !is_blank(&name) => {
            if !name.validate_length(Some(1), Some(MAX_NAME_LEN), None) {
                message.push_str(NAME_LENGTH);
            }
            Some(name)
        }
        _ => {
            message.push_str(NAME_REQUIRED);
            None
        }
    };

    if let Some(description) = &description {
        if !description.validate_length(None, Some(MAX_DESCRIPTION_LEN), None) {
            message.push_str(DESCRIPTION_LENGTH);
        }
    }

    let price = match price {
        Some(price) if price >= 0.0 => Some(price),
        _ => {
            message.push_str(PRICE_RANGE);
            None
        }
    };

    let quantity = match quantity {
        Some(quantity) if quantity >= 0 => Some(quantity),
        _ => {
            message.push_str(QUANTITY_RANGE);
            None
        }
    };

    match (name, price, quantity) {
        (Some(name), Some(price), Some(quantity)) if message.is_empty() => Ok(ProductFields {
            name,
            description,
            price,
            quantity,
        }),
        _ => Err(CoreError::BadRequest(message)),
    }
}

/* --------------------------------------------------------------------------
Not-found errors
-------------------------------------------------------------------------- */

/// Not-found error for a single-product fetch.
pub fn not_found_by_id(id: DbId) -> CoreError {
    CoreError::NotFound(format!("Product not found with ID: {id}"))
}

/// Not-found error for update, delete and stock checks.
pub fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound(format!("Product with ID {id} not found"))
}

/// Whether `quantity` in stock covers a request for `count` units.
pub fn is_available(quantity: i64, count: i64) -> bool {
    quantity >= count
}
