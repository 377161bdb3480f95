//! Query layer: one zero-sized repo struct per table.

mod product_repo;

pub use product_repo::ProductRepo;
