//! Terrazul Storefront library.
//!
//! The computational core behind the shop: the session cart with
//! write-through persistence, the bundled product catalog, and the virtual
//! barista quiz. The presentation layer drives everything through
//! [`session::StoreSession`] and reads back derived values.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod barista;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod session;
