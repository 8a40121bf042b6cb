//! Shopping cart engine.
//!
//! One logical cart per session. Line items snapshot the product at add
//! time, so later catalog edits never touch what is already in the cart.
//! Every mutation writes the full item list through to the backing store;
//! the store is read once, at hydration.
//!
//! Identity: two additions merge into one line exactly when product id,
//! selected weight, and selected grind all match. Any difference - even the
//! same product in another weight - makes a distinct line.

pub mod store;

pub use store::{CartStore, CartStoreError, JsonFileStore, MemoryStore};

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use terrazul_core::{LineItemId, Price, Product, ProductId};

/// One cart row: a product snapshot plus the user's selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Identity key composed from the product id and both selections.
    pub cart_id: LineItemId,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_grind: Option<String>,
    /// Product fields as they were when the item was added.
    #[serde(flatten)]
    pub product: Product,
}

impl LineItem {
    /// Line subtotal: snapshot unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.product.price_number.times(self.quantity)
    }
}

/// Compose the identity key for a (product, weight, grind) combination.
fn cart_id_for(product: &ProductId, weight: Option<&str>, grind: Option<&str>) -> LineItemId {
    LineItemId::new(format!(
        "{}-{}-{}",
        product.as_str(),
        weight.unwrap_or("default"),
        grind.unwrap_or("default"),
    ))
}

/// The session shopping cart.
pub struct Cart {
    items: Vec<LineItem>,
    store: Box<dyn CartStore>,
    open: bool,
}

impl Cart {
    /// Hydrate a cart from the backing store.
    ///
    /// A missing payload starts an empty cart. Unreadable or malformed
    /// payloads are discarded with a warning rather than propagated, so a
    /// corrupt slot never takes the shop down.
    #[must_use]
    pub fn load(store: Box<dyn CartStore>) -> Self {
        let items = match store.read() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<LineItem>>(&payload) {
                Ok(items) => items,
                Err(e) => {
                    warn!(error = %e, "Discarding malformed cart payload");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read persisted cart");
                Vec::new()
            }
        };

        Self {
            items,
            store,
            open: false,
        }
    }

    /// Add `quantity` units of a product with the given selections.
    ///
    /// Re-adding the same (product, weight, grind) combination merges into
    /// the existing line by bumping its quantity; the snapshot taken at the
    /// first add - price included - is left alone. Non-positive quantities
    /// are clamped to 1. Opens the cart drawer.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: u32,
        selected_weight: Option<&str>,
        selected_grind: Option<&str>,
    ) {
        let quantity = quantity.max(1);
        let cart_id = cart_id_for(&product.id, selected_weight, selected_grind);

        if let Some(item) = self.items.iter_mut().find(|i| i.cart_id == cart_id) {
            item.quantity = item.quantity.saturating_add(quantity);
        } else {
            // Snapshot with the weight-specific unit price so total() and
            // the per-item display price cannot diverge.
            let mut snapshot = product.clone();
            snapshot.price_number = product.price_for(selected_weight);

            self.items.push(LineItem {
                cart_id,
                quantity,
                selected_weight: selected_weight.map(str::to_owned),
                selected_grind: selected_grind.map(str::to_owned),
                product: snapshot,
            });
        }

        self.open = true;
        self.persist();
    }

    /// Remove the line with `cart_id`. Unknown ids are a silent no-op.
    pub fn remove_item(&mut self, cart_id: &LineItemId) {
        self.items.retain(|i| &i.cart_id != cart_id);
        self.persist();
    }

    /// Replace the quantity on the line with `cart_id`.
    ///
    /// Requests below 1 are ignored entirely: the line keeps its quantity,
    /// nothing is removed, and nothing is written. Unknown ids are a silent
    /// no-op. Line order is preserved.
    pub fn update_quantity(&mut self, cart_id: &LineItemId, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| &i.cart_id == cart_id) {
            item.quantity = quantity;
        }
        self.persist();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Sum of snapshot unit price times quantity across all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Total units across all lines, for the header badge.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items
            .iter()
            .map(|i| i.quantity)
            .fold(0, u32::saturating_add)
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the cart drawer should be shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the cart drawer open state.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Collapse the cart drawer.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Write the full line list through to the store. Failures are logged
    /// and absorbed; the in-memory cart stays usable either way.
    fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.items) {
            Ok(payload) => payload,
            Err(e) => {
                error!(error = %e, "Failed to serialize cart");
                return;
            }
        };

        if let Err(e) = self.store.write(&payload) {
            error!(error = %e, "Failed to persist cart");
        }
    }
}
