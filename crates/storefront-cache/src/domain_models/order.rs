//! Order model

use serde::{Deserialize, Serialize};

/// A customer order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    /// Order number shown to the customer
    pub number: String,
    /// Backend status (pending, processing, completed, ...)
    #[serde(default)]
    pub status: String,
    /// Order total as a decimal string
    #[serde(default)]
    pub total: String,
    #[serde(default)]
    pub customer_id: Option<u64>,
}

impl Order {
    pub fn new(id: u64, number: impl Into<String>) -> Self {
        Self {
            id,
            number: number.into(),
            status: String::new(),
            total: String::new(),
            customer_id: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}
