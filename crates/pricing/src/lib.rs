//! shoplite-pricing — pluggable discount, delivery, and payment policies.
//!
//! Each family is a closed enum dispatched with `match`. Values are plain
//! data; an order holds at most one selection per family.

pub mod delivery;
pub mod discount;
pub mod payment;

pub use delivery::Delivery;
pub use discount::Discount;
pub use payment::Payment;
