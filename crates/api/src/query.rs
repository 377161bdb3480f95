//! Query parameter types for the product endpoints.

use serde::{Deserialize, Deserializer};

/// `GET /product?sortByPrice=`
///
/// Any casing of `true` turns sorting on; every other value, including an
/// empty one, leaves it off. A malformed flag never fails the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsParams {
    #[serde(rename = "sortByPrice", default, deserialize_with = "lenient_bool")]
    pub sort_by_price: bool,
}

/// `GET /product/{id}/check-stock?count=`
///
/// A missing `count` means zero units requested.
#[derive(Debug, Default, Deserialize)]
pub struct CheckStockParams {
    #[serde(default)]
    pub count: i64,
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.eq_ignore_ascii_case("true"))
}
