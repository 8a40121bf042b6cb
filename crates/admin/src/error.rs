//! Admin error types.

use thiserror::Error;

use terrazul_core::CatalogError;

/// Errors surfaced by admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// No active admin session.
    #[error("admin session required")]
    Unauthorized,

    /// Sign-in rejected by the auth backend.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Input rejected before reaching the backend.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Catalog or image backend failure.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
