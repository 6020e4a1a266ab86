//! `stocksheet-catalog` — the product catalog domain.
//!
//! This crate contains **pure domain** state (no I/O, no HTTP, no file
//! formats): the `Product` record and the in-memory `CatalogStore` that
//! assigns identifiers and keeps insertion order.

pub mod product;
pub mod store;

pub use product::{NewProduct, Product};
pub use store::{CatalogStore, ID_SEED};
