//! Product catalog domain module.
//!
//! This crate contains the product entity and category grouping, as pure
//! domain logic (no storage, no presentation).

pub mod product;

pub use product::{Category, Product};
