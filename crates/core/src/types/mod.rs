//! Core types for Terrazul.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod grind;
pub mod id;
pub mod price;
pub mod product;

pub use grind::{Grind, GrindParseError};
pub use id::*;
pub use price::Price;
pub use product::{ArtInfo, ArtistSocials, Product, ProductDraft, ProductPatch};
