//! shoplite-store — in-memory repositories behind shared handles.
//!
//! Every store takes `&self` and guards its map with an `RwLock`, so
//! several services can share one handle through an `Arc`. Nothing here
//! survives process exit.

pub mod customer_store;
pub mod order_store;
pub mod product_store;
pub mod warehouse_store;

pub use customer_store::CustomerStore;
pub use order_store::OrderStore;
pub use product_store::ProductStore;
pub use warehouse_store::WarehouseStore;
