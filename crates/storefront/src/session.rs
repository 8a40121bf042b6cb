//! Per-session state container.
//!
//! The web client held cart and skin state in ambient context providers;
//! here the same state lives in one explicit object handed to the
//! presentation layer - created at session start, reset on teardown.

use crate::cart::{Cart, CartStore};

/// Mutable state for one storefront session.
pub struct StoreSession {
    cart: Cart,
    magic_mode: bool,
}

impl StoreSession {
    /// Start a session, hydrating the cart from `store`.
    #[must_use]
    pub fn start(store: Box<dyn CartStore>) -> Self {
        Self {
            cart: Cart::load(store),
            magic_mode: false,
        }
    }

    /// The session cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable access to the session cart.
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Whether the cosmic skin is active.
    #[must_use]
    pub const fn magic_mode(&self) -> bool {
        self.magic_mode
    }

    /// Flip the cosmic skin on or off.
    pub fn toggle_magic_mode(&mut self) {
        self.magic_mode = !self.magic_mode;
    }

    /// Tear the session down: empty and close the cart, restore default
    /// flags. The cleared state is written through like any other mutation.
    pub fn reset(&mut self) {
        self.cart.clear();
        self.cart.close();
        self.magic_mode = false;
    }
}
