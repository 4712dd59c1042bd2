//! Sale model
//!
//! A time limited price reduction on a product.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A running or scheduled sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: u64,
    pub product_id: u64,
    #[serde(default)]
    pub regular_price: String,
    #[serde(default)]
    pub sale_price: String,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
}

impl Sale {
    pub fn new(id: u64, product_id: u64) -> Self {
        Self {
            id,
            product_id,
            regular_price: String::new(),
            sale_price: String::new(),
            ends_at: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}
