//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur during view registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The view ID is invalid or the view has been destroyed.
    #[error("invalid or destroyed view ID")]
    InvalidViewId,

    /// The view registry has not been initialized.
    #[error("view registry not initialized. Call init_view_registry() first")]
    RegistryNotInitialized,
}

/// Result type for view registry operations.
pub type ViewResult<T> = Result<T, ViewError>;
