//! Customer domain module.

pub mod customer;

pub use customer::{Address, Customer};
