//! Request handlers.
//!
//! Handlers validate input with `catalog_core`, call the product store held
//! in [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod product;
