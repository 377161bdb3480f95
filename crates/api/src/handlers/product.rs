//! Handlers for the `/product` resource.
//!
//! Every id-taking handler validates the id before touching the store, and
//! create/update validate the body before any write, so the store only ever
//! sees in-bounds rows.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::product::{is_available, not_found, not_found_by_id, validate_id};
use catalog_core::types::DbId;
use catalog_db::models::product::{Product, ProductDto, StockDto};
use catalog_db::store::{ProductOrder, ProductStore};

use crate::error::AppResult;
use crate::query::{CheckStockParams, ListProductsParams};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate the `{id}` path segment. A segment that is not an integer counts
/// as a missing id.
fn path_id(id: Result<Path<DbId>, PathRejection>) -> Result<DbId, CoreError> {
    validate_id(id.ok().map(|Path(id)| id))
}

/// Unwrap a JSON body, reporting malformed payloads as a bad request.
fn json_body(body: Result<Json<ProductDto>, JsonRejection>) -> Result<ProductDto, CoreError> {
    body.map(|Json(dto)| dto)
        .map_err(|rejection| CoreError::BadRequest(rejection.body_text()))
}

/// Unwrap query parameters, reporting malformed values as a bad request.
fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, CoreError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| CoreError::BadRequest(rejection.body_text()))
}

/// Fetch a product, turning absence into the update/delete/stock not-found error.
async fn ensure_product_exists(store: &dyn ProductStore, id: DbId) -> AppResult<Product> {
    match store.find_by_id(id).await? {
        Some(product) => Ok(product),
        None => {
            tracing::warn!(product_id = id, "Product not found");
            Err(not_found(id).into())
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /product/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<ProductDto>> {
    let id = path_id(id)?;
    tracing::info!(product_id = id, "Fetching product");

    let Some(product) = state.products.find_by_id(id).await? else {
        tracing::warn!(product_id = id, "Product not found");
        return Err(not_found_by_id(id).into());
    };

    tracing::info!(product_id = id, "Product retrieved");
    Ok(Json(ProductDto::from(product)))
}

/// GET /product?sortByPrice=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListProductsParams>,
) -> AppResult<Json<Vec<ProductDto>>> {
    tracing::info!(sort_by_price = params.sort_by_price, "Listing products");

    let products = state
        .products
        .list(ProductOrder::from_sort_by_price(params.sort_by_price))
        .await?;

    tracing::info!(count = products.len(), "Products listed");
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

/// POST /product
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ProductDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    tracing::info!("Creating product");
    let fields = json_body(body)?.into_fields()?;

    let product = state.products.insert(fields).await?;

    tracing::info!(product_id = product.id, name = %product.name, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /product/{id}
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    body: Result<Json<ProductDto>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let id = path_id(id)?;
    tracing::info!(product_id = id, "Updating product");
    let fields = json_body(body)?.into_fields()?;

    let mut product = ensure_product_exists(state.products.as_ref(), id).await?;
    product.apply(fields);

    let Some(updated) = state.products.update(product).await? else {
        // Deleted between the lookup and the write.
        tracing::warn!(product_id = id, "Product vanished during update");
        return Err(not_found(id).into());
    };

    tracing::info!(product_id = id, "Product updated");
    Ok(Json(updated))
}

/// DELETE /product/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = path_id(id)?;
    tracing::info!(product_id = id, "Deleting product");

    ensure_product_exists(state.products.as_ref(), id).await?;

    if state.products.delete(id).await? {
        tracing::info!(product_id = id, "Product deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        tracing::warn!(product_id = id, "Product vanished during delete");
        Err(not_found(id).into())
    }
}

/// GET /product/{id}/check-stock?count=
pub async fn check_stock(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    params: Result<Query<CheckStockParams>, QueryRejection>,
) -> AppResult<Json<StockDto>> {
    let id = path_id(id)?;
    let count = query_params(params)?.count;

    let product = ensure_product_exists(state.products.as_ref(), id).await?;
    let available = is_available(product.quantity, count);

    tracing::info!(
        product_id = id,
        requested = count,
        in_stock = product.quantity,
        available,
        "Stock checked"
    );
    Ok(Json(StockDto { available }))
}
