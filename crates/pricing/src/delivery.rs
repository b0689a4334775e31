use serde::{Deserialize, Serialize};

/// Flat-rate delivery options. Cost is independent of order contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delivery {
    Standard,
    Express,
}

impl Delivery {
    pub fn cost(self) -> f64 {
        match self {
            Delivery::Standard => 5.0,
            Delivery::Express => 15.0,
        }
    }
}
