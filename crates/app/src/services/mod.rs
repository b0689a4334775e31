//! Service layer: validation, store lookups, and DTO conversion around
//! the domain crates.

pub mod app_service;
pub mod cart_service;
pub mod customer_service;
pub mod order_service;
pub mod product_service;

pub use app_service::{AppService, SeedError, SeedSummary, Statistics};
pub use cart_service::CartService;
pub use customer_service::CustomerService;
pub use order_service::OrderService;
pub use product_service::ProductService;
