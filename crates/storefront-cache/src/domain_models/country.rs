//! Country model
//!
//! Shipping/billing countries, keyed by their ISO code.

use serde::{Deserialize, Serialize};

/// A country the shop ships to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code
    pub code: String,
    pub name: String,
    /// States/regions, empty for countries without subdivisions
    #[serde(default)]
    pub states: Vec<Region>,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            states: Vec::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

/// A state or region inside a country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub code: String,
    pub name: String,
}
