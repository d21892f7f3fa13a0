//! Centralized error types for shopgraph.

use thiserror::Error;

/// Main error type for domain-level operations.
#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Unknown event type: '{0}' (expected view, click or add_to_cart)")]
    UnknownEventType(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for domain-level operations.
pub type ShopResult<T> = Result<T, ShopError>;

impl ShopError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
