use serde::{Deserialize, Serialize};

/// Order-level discount policy.
///
/// `apply` takes the pre-discount subtotal and returns the amount to
/// subtract, never the discounted subtotal itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Discount {
    /// Percentage of the subtotal. Rates above 100 are not rejected and
    /// yield a discount larger than the subtotal.
    Percentage(f64),
    /// Flat amount, capped at the subtotal, so this step alone can never
    /// subtract more than there is.
    Fixed(f64),
}

impl Discount {
    pub fn apply(self, amount: f64) -> f64 {
        match self {
            Discount::Percentage(rate) => amount * (rate / 100.0),
            Discount::Fixed(value) => value.min(amount),
        }
    }
}
