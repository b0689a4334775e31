//! Warehouse stock ledger. A plain counter per product; order placement
//! does not consult it.

pub mod warehouse;

pub use warehouse::Warehouse;
