//! Error types for the observable store.

use thiserror::Error;

/// Main error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A listener failed while handling a published event.
    ///
    /// Delivery stops at the failing listener; listeners later in
    /// subscription order are not invoked for that publish.
    #[error("Listener failed: {0}")]
    Listener(String),
}

impl StoreError {
    /// Build a listener fault from any displayable cause.
    pub fn listener(cause: impl std::fmt::Display) -> Self {
        StoreError::Listener(cause.to_string())
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
