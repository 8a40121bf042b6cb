//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `TERRAZUL_IMAGE_BASE_URL` - Public URL prefix for uploaded images
//!
//! ## Optional
//! - `TERRAZUL_IMAGE_BUCKET` - Blob-store bucket (default: product-images)

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Blob-store bucket holding product images.
    pub image_bucket: String,
    /// Public URL prefix under which uploaded images are served.
    pub image_base_url: String,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            image_bucket: get_env_or_default("TERRAZUL_IMAGE_BUCKET", "product-images"),
            image_base_url: get_required_env("TERRAZUL_IMAGE_BASE_URL")?,
        })
    }

    /// Public URL for an object key in the image bucket.
    #[must_use]
    pub fn public_image_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.image_base_url.trim_end_matches('/'),
            self.image_bucket,
            key
        )
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
