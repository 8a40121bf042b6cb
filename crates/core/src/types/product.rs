//! Product data model.
//!
//! Catalog snapshots have shipped with two price shapes over time: a flat
//! default price (`priceNumber`) and a per-weight price map (`prices`). The
//! model carries the superset; the map is authoritative whenever it has an
//! entry for the selected weight.
//!
//! Field names serialize in camelCase to stay compatible with the hosted
//! catalog rows and previously persisted carts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Default unit price, used when no weight variant applies.
    pub price_number: Price,
    /// Weight-variant label (e.g. "250g", "1kg") to price.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub prices: BTreeMap<String, Price>,
    pub img: String,
    #[serde(default)]
    pub is_new: bool,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roast_level: Option<String>,
    /// Ordered for display.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasting_notes: Vec<String>,
    /// 1-5 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acidity: Option<u8>,
    /// 1-5 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<u8>,
    /// 1-5 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitterness: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grind_options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasting_profile_image: Option<String>,
    /// Gallery placard data for the alternate art view. Pure display data;
    /// the cart and quiz engines never look inside it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub art_info: Option<ArtInfo>,
}

impl Product {
    /// Unit price for the given weight selection.
    ///
    /// The per-weight map wins when it has an entry; otherwise the default
    /// `price_number` applies, including when no weight is selected.
    #[must_use]
    pub fn price_for(&self, weight: Option<&str>) -> Price {
        weight
            .and_then(|w| self.prices.get(w).copied())
            .unwrap_or(self.price_number)
    }
}

/// Artwork commissioned for a product edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtInfo {
    pub title: String,
    pub description: String,
    pub artist_name: String,
    pub artist_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_socials: Option<ArtistSocials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illustration: Option<String>,
}

/// Public links for a commissioned artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ArtistSocials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
}

/// Input for creating a product.
///
/// The id is optional; when absent, a slug is derived from the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    #[serde(default)]
    pub price_number: Price,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub prices: BTreeMap<String, Price>,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roast_level: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasting_notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acidity: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitterness: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grind_options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasting_profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub art_info: Option<ArtInfo>,
}

impl ProductDraft {
    /// Materialize the draft into a product under `id`.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price_number: self.price_number,
            prices: self.prices,
            img: self.img,
            is_new: self.is_new,
            description: self.description,
            region: self.region,
            roast_level: self.roast_level,
            tasting_notes: self.tasting_notes,
            acidity: self.acidity,
            intensity: self.intensity,
            bitterness: self.bitterness,
            grind_options: self.grind_options,
            tasting_profile_image: self.tasting_profile_image,
            art_info: self.art_info,
        }
    }
}

/// Partial update for a product. Absent fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_number: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<BTreeMap<String, Price>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roast_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasting_notes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acidity: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitterness: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grind_options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasting_profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub art_info: Option<ArtInfo>,
}

impl ProductPatch {
    /// Apply every present field to `product`, leaving the rest untouched.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price_number) = self.price_number {
            product.price_number = price_number;
        }
        if let Some(prices) = self.prices {
            product.prices = prices;
        }
        if let Some(img) = self.img {
            product.img = img;
        }
        if let Some(is_new) = self.is_new {
            product.is_new = is_new;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(region) = self.region {
            product.region = Some(region);
        }
        if let Some(roast_level) = self.roast_level {
            product.roast_level = Some(roast_level);
        }
        if let Some(tasting_notes) = self.tasting_notes {
            product.tasting_notes = tasting_notes;
        }
        if let Some(acidity) = self.acidity {
            product.acidity = Some(acidity);
        }
        if let Some(intensity) = self.intensity {
            product.intensity = Some(intensity);
        }
        if let Some(bitterness) = self.bitterness {
            product.bitterness = Some(bitterness);
        }
        if let Some(grind_options) = self.grind_options {
            product.grind_options = grind_options;
        }
        if let Some(tasting_profile_image) = self.tasting_profile_image {
            product.tasting_profile_image = Some(tasting_profile_image);
        }
        if let Some(art_info) = self.art_info {
            product.art_info = Some(art_info);
        }
    }
}
