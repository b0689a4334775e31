//! shoplite-app — the application layer over the shoplite domain.
//!
//! DTOs for the wire boundary, a sample-data loader, and the services
//! that resolve DTOs against the in-memory stores. The binary in this
//! crate walks a full shop flow end to end.

pub mod dto;
pub mod loader;
pub mod services;

pub use services::{AppService, SeedError, SeedSummary, Statistics};
