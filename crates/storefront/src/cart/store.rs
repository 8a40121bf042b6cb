//! Cart persistence stores.
//!
//! The cart keeps one serialized payload under a fixed slot, mirroring the
//! single browser-storage key the web client used. Stores only move strings
//! around; the engine owns the serialization format.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from reading or writing the persisted cart payload.
#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("cart store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single-slot persistent store for the serialized cart.
pub trait CartStore {
    /// Read the stored payload, `None` when nothing has been written yet.
    ///
    /// # Errors
    ///
    /// Returns `CartStoreError::Io` when the slot exists but cannot be read.
    fn read(&self) -> Result<Option<String>, CartStoreError>;

    /// Replace the stored payload.
    ///
    /// # Errors
    ///
    /// Returns `CartStoreError::Io` when the slot cannot be written.
    fn write(&mut self, payload: &str) -> Result<(), CartStoreError>;
}

/// File-backed store. Writes go through a temp file in the same directory
/// so the slot is replaced atomically and never observed half-written.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStore for JsonFileStore {
    fn read(&self) -> Result<Option<String>, CartStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, payload: &str) -> Result<(), CartStoreError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(payload.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// In-memory store for tests and sessions that opt out of durability.
#[derive(Debug, Default)]
pub struct MemoryStore {
    payload: Option<String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a payload.
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
        }
    }
}

impl CartStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, CartStoreError> {
        Ok(self.payload.clone())
    }

    fn write(&mut self, payload: &str) -> Result<(), CartStoreError> {
        self.payload = Some(payload.to_owned());
        Ok(())
    }
}
