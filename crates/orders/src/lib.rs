//! shoplite-orders — the order aggregate: pricing and lifecycle.
//!
//! An order owns its line items, shares its customer and products, and
//! prices itself as subtotal, minus discount, plus delivery.

pub mod order;

pub use order::{Order, OrderItem, OrderStatus, OrderTotals};
