//! Shopping cart: mutable line items accumulated before an order exists.

pub mod cart;

pub use cart::{CartItem, ShoppingCart};
