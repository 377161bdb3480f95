//! Domain types, errors and validation rules for the product catalog.
//!
//! Nothing in this crate performs I/O; the database and HTTP crates build on
//! top of it.

pub mod error;
pub mod product;
pub mod types;
