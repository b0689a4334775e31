//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are positive integers assigned by the owning store (the
//! order store mints them from its own counter; products and customers
//! arrive with externally chosen ids). Validation happens once, at
//! construction: a zero or negative value never becomes an id.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ProductId(i64);

/// Identifier of a customer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct CustomerId(i64);

/// Identifier of an order, unset until assigned by the order store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct OrderId(i64);

macro_rules! impl_positive_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a validated identifier. Zero and negative values are rejected.
            pub fn new(value: i64) -> DomainResult<Self> {
                if value <= 0 {
                    return Err(DomainError::invalid_id(format!(
                        "{} must be positive, got {}",
                        $name, value
                    )));
                }
                Ok(Self(value))
            }

            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl TryFrom<i64> for $t {
            type Error = DomainError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_positive_id!(ProductId, "ProductId");
impl_positive_id!(CustomerId, "CustomerId");
impl_positive_id!(OrderId, "OrderId");
