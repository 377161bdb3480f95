//! The persistence seam used by the HTTP layer.
//!
//! [`ProductStore`] reports a missing row as `None` (or `false` for deletes)
//! and leaves the translation into a not-found error to the caller.

use std::collections::BTreeMap;

use async_trait::async_trait;
use catalog_core::product::ProductFields;
use catalog_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::product::Product;
use crate::repositories::ProductRepo;
use crate::DbPool;

/// Ordering for [`ProductStore::list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOrder {
    /// Storage-native order, which is creation order.
    Insertion,
    /// Ascending price, ties broken by creation order.
    Price,
}

impl ProductOrder {
    pub fn from_sort_by_price(sort_by_price: bool) -> Self {
        if sort_by_price {
            Self::Price
        } else {
            Self::Insertion
        }
    }
}

/// Single-row CRUD plus listing over the product table.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a new product and return it with its assigned id.
    async fn insert(&self, fields: ProductFields) -> Result<Product, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error>;

    async fn list(&self, order: ProductOrder) -> Result<Vec<Product>, sqlx::Error>;

    /// Write every mutable field of `product` to the row with the same id.
    ///
    /// Returns `None` if the row no longer exists.
    async fn update(&self, product: Product) -> Result<Option<Product>, sqlx::Error>;

    /// Remove a product permanently. Returns `true` if a row was removed.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Whether the backing store is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

/* --------------------------------------------------------------------------
PostgreSQL
-------------------------------------------------------------------------- */

/// [`ProductStore`] backed by the `products` table.
#[derive(Clone)]
pub struct PgProductStore {
    pool: DbPool,
}

impl PgProductStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, fields: ProductFields) -> Result<Product, sqlx::Error> {
        ProductRepo::create(&self.pool, &fields).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        ProductRepo::find_by_id(&self.pool, id).await
    }

    async fn list(&self, order: ProductOrder) -> Result<Vec<Product>, sqlx::Error> {
        match order {
            ProductOrder::Insertion => ProductRepo::list(&self.pool).await,
            ProductOrder::Price => ProductRepo::list_by_price(&self.pool).await,
        }
    }

    async fn update(&self, product: Product) -> Result<Option<Product>, sqlx::Error> {
        let fields = ProductFields {
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
        };
        ProductRepo::update(&self.pool, product.id, &fields).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        ProductRepo::delete(&self.pool, id).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}

/* --------------------------------------------------------------------------
In-memory
-------------------------------------------------------------------------- */

struct MemoryTable {
    next_id: DbId,
    rows: BTreeMap<DbId, Product>,
}

/// [`ProductStore`] held entirely in process memory.
///
/// Ids start at 1 and are never reused, so iterating the map in key order
/// yields creation order. Used when no database is configured.
pub struct MemoryProductStore {
    table: RwLock<MemoryTable>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(MemoryTable {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, fields: ProductFields) -> Result<Product, sqlx::Error> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let product = Product::from_fields(id, fields);
        table.rows.insert(id, product.clone());
        tracing::debug!(product_id = id, rows = table.rows.len(), "Inserted in-memory product");
        Ok(product)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list(&self, order: ProductOrder) -> Result<Vec<Product>, sqlx::Error> {
        let mut products: Vec<Product> = self.table.read().await.rows.values().cloned().collect();
        if order == ProductOrder::Price {
            // Stable sort keeps creation order for equal prices.
            products.sort_by(|a, b| a.price.total_cmp(&b.price));
        }
        Ok(products)
    }

    async fn update(&self, product: Product) -> Result<Option<Product>, sqlx::Error> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&product.id) {
            Some(row) => {
                *row = product;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let removed = self.table.write().await.rows.remove(&id).is_some();
        tracing::debug!(product_id = id, removed, "Deleted in-memory product");
        Ok(removed)
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
