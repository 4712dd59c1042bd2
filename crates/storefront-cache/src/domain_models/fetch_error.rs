//! Fetch errors
//!
//! The cache does not interpret errors; it stores whatever the network layer
//! reported so the UI can show it next to the (possibly stale) data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A failed fetch as reported by the network layer
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct FetchError {
    /// Human readable description
    pub message: String,
    /// HTTP status code, when the failure came from a response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}
