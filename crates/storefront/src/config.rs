//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TERRAZUL_CART_PATH` - Cart persistence file (default: data/cart.json)
//! - `TERRAZUL_CATALOG_PATH` - JSON catalog file; the bundled lineup is used
//!   when unset

use std::path::PathBuf;

use crate::cart::JsonFileStore;
use crate::catalog::BundledCatalog;

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Cart persistence file path.
    pub cart_path: PathBuf,
    /// Optional JSON catalog file.
    pub catalog_path: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self {
            cart_path: PathBuf::from(get_env_or_default("TERRAZUL_CART_PATH", "data/cart.json")),
            catalog_path: get_optional_env("TERRAZUL_CATALOG_PATH").map(PathBuf::from),
        }
    }

    /// Open the cart store at the configured path.
    #[must_use]
    pub fn cart_store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.cart_path)
    }

    /// Build the catalog: the configured JSON file when set, the bundled
    /// lineup otherwise.
    #[must_use]
    pub fn catalog(&self) -> BundledCatalog {
        self.catalog_path
            .as_deref()
            .map_or_else(BundledCatalog::bundled, BundledCatalog::load)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
