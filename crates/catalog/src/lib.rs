//! Catalog domain module (shared product catalog).
//!
//! Products are globally readable reference data: no tenant ownership, not
//! created or deleted through the HTTP surface.

pub mod product;

pub use product::Product;
