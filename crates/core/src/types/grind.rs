//! Grind options for coffee preparation.

use serde::{Deserialize, Serialize};

/// A coffee grind, as offered on product pages and recommended by the
/// barista quiz.
///
/// Serialized with the catalog's Spanish labels so values round-trip with
/// stored carts and product grind option lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Grind {
    #[default]
    #[serde(rename = "Grano entero")]
    WholeBean,
    #[serde(rename = "Molido fino")]
    Fine,
    #[serde(rename = "Molido medio")]
    Medium,
    #[serde(rename = "Molido grueso")]
    Coarse,
}

/// Error returned when a grind label is not recognized.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown grind label: {0}")]
pub struct GrindParseError(String);

impl Grind {
    /// The label used across the catalog and the UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WholeBean => "Grano entero",
            Self::Fine => "Molido fino",
            Self::Medium => "Molido medio",
            Self::Coarse => "Molido grueso",
        }
    }

    /// All grinds in menu order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::WholeBean, Self::Fine, Self::Medium, Self::Coarse]
    }
}

impl std::fmt::Display for Grind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Grind {
    type Err = GrindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Grano entero" => Ok(Self::WholeBean),
            "Molido fino" => Ok(Self::Fine),
            "Molido medio" => Ok(Self::Medium),
            "Molido grueso" => Ok(Self::Coarse),
            other => Err(GrindParseError(other.to_owned())),
        }
    }
}
