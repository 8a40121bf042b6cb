//! Trait seams for the hosted catalog and image storage collaborators.
//!
//! The row store and blob store behind the admin panel are external
//! services; the core only fixes the seams. Implementations live with the
//! consumers - the storefront ships a bundled in-memory catalog, production
//! backends are out of tree.

use thiserror::Error;

use crate::types::{Product, ProductId, ProductPatch};

/// Errors surfaced by catalog and image storage backends.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with the requested id.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// A product with the same id already exists.
    #[error("product already exists: {0}")]
    Conflict(ProductId),

    /// The backing service failed.
    #[error("catalog backend error: {0}")]
    Backend(String),
}

/// Read/write access to the product catalog.
pub trait ProductCatalog {
    /// List all products in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Backend` if the backing service fails.
    fn list(&self) -> Result<Vec<Product>, CatalogError>;

    /// Fetch a single product, `None` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Backend` if the backing service fails.
    fn get(&self, id: &ProductId) -> Result<Option<Product>, CatalogError>;

    /// Insert a new product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Conflict` if the id is already taken.
    fn create(&mut self, product: Product) -> Result<Product, CatalogError>;

    /// Apply a partial update to an existing product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the id is unknown.
    fn update(&mut self, id: &ProductId, patch: ProductPatch) -> Result<Product, CatalogError>;

    /// Delete a product. Deleting an unknown id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Backend` if the backing service fails.
    fn delete(&mut self, id: &ProductId) -> Result<(), CatalogError>;
}

/// Write access to the product image blob store.
pub trait ImageStore {
    /// Store an object under `key` and return its public URL.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Backend` if the upload fails.
    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<String, CatalogError>;
}
