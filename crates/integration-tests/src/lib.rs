//! Integration tests for Terrazul.
//!
//! These tests exercise the crates together the way a real session does:
//! the admin panel edits the catalog while carts keep their snapshots, and
//! cart state survives restarts through the file store.
//!
//! # Test Categories
//!
//! - `cart_persistence` - Write-through persistence and rehydration
//! - `admin_catalog` - Admin CRUD, gating, and catalog/cart interplay
//!
//! Shared doubles for the external collaborators live in this library.

use std::sync::Once;

use secrecy::SecretString;

use terrazul_admin::auth::AdminSession;
use terrazul_admin::config::AdminConfig;
use terrazul_admin::error::AdminError;
use terrazul_core::{CatalogError, ImageStore};

/// Initialize tracing once across all test binaries.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Always-active admin session double.
pub struct ActiveSession;

impl AdminSession for ActiveSession {
    fn is_active(&self) -> bool {
        true
    }

    fn sign_in(&mut self, _email: &str, _password: &SecretString) -> Result<(), AdminError> {
        Ok(())
    }

    fn sign_out(&mut self) {}
}

/// Blob-store double serving URLs from a fake CDN.
pub struct FakeImageStore {
    config: AdminConfig,
    /// Recorded (key, byte length) pairs, in upload order.
    pub uploads: Vec<(String, usize)>,
}

impl Default for FakeImageStore {
    fn default() -> Self {
        Self {
            config: AdminConfig {
                image_bucket: "product-images".to_owned(),
                image_base_url: "https://cdn.terrazul.cl".to_owned(),
            },
            uploads: Vec::new(),
        }
    }
}

impl ImageStore for FakeImageStore {
    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<String, CatalogError> {
        self.uploads.push((key.to_owned(), bytes.len()));
        Ok(self.config.public_image_url(key))
    }
}
