//! Integration tests for cart persistence across sessions.
//!
//! The cart writes through to a single file slot after every mutation and
//! rehydrates from it at session start, so these tests repeatedly "restart"
//! by building a fresh session over the same path.

#![allow(clippy::unwrap_used)]

use terrazul_core::{Price, ProductCatalog, ProductId};
use terrazul_integration_tests::init_tracing;
use terrazul_storefront::cart::{Cart, JsonFileStore};
use terrazul_storefront::catalog::BundledCatalog;
use terrazul_storefront::session::StoreSession;

fn kantutani() -> terrazul_core::Product {
    BundledCatalog::bundled()
        .get(&ProductId::new("kantutani-bolivia"))
        .unwrap()
        .unwrap()
}

#[test]
fn test_cart_survives_restart() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    {
        let mut cart = Cart::load(Box::new(JsonFileStore::new(&path)));
        cart.add_item(&kantutani(), 2, Some("250g"), Some("Molido fino"));
        cart.add_item(&kantutani(), 1, Some("1kg"), Some("Molido fino"));
    }

    let restarted = Cart::load(Box::new(JsonFileStore::new(&path)));
    assert_eq!(restarted.items().len(), 2);
    assert_eq!(restarted.count(), 3);
    // 2 x 14.000 (250g) + 1 x 39.000 (1kg).
    assert_eq!(restarted.total(), Price::new(67_000));
}

#[test]
fn test_every_mutation_writes_through() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    let mut cart = Cart::load(Box::new(JsonFileStore::new(&path)));

    cart.add_item(&kantutani(), 1, None, None);
    let after_add = std::fs::read_to_string(&path).unwrap();
    assert!(after_add.contains("kantutani-bolivia"));

    let id = cart.items()[0].cart_id.clone();
    cart.update_quantity(&id, 4);
    let after_update = std::fs::read_to_string(&path).unwrap();
    assert!(after_update.contains("\"quantity\":4"));

    cart.remove_item(&id);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_malformed_slot_fails_open_then_recovers() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");
    std::fs::write(&path, "definitely not json").unwrap();

    let mut cart = Cart::load(Box::new(JsonFileStore::new(&path)));
    assert!(cart.is_empty());

    // The next mutation replaces the corrupt slot with valid JSON.
    cart.add_item(&kantutani(), 1, None, None);
    let payload = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
}

#[test]
fn test_reloaded_items_preserve_order_and_snapshots() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    let catalog = BundledCatalog::bundled();
    let huila = catalog
        .get(&ProductId::new("huila-colombia"))
        .unwrap()
        .unwrap();

    {
        let mut cart = Cart::load(Box::new(JsonFileStore::new(&path)));
        cart.add_item(&huila, 1, Some("1kg"), Some("Grano entero"));
        cart.add_item(&kantutani(), 1, Some("250g"), None);
    }

    let restarted = Cart::load(Box::new(JsonFileStore::new(&path)));
    let ids: Vec<&str> = restarted
        .items()
        .iter()
        .map(|i| i.product.id.as_str())
        .collect();
    assert_eq!(ids, ["huila-colombia", "kantutani-bolivia"]);
    // The 1kg snapshot price came from the weight map.
    assert_eq!(restarted.items()[0].product.price_number, Price::new(108_000));
}

#[test]
fn test_session_reset_persists_empty_cart() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    let mut session = StoreSession::start(Box::new(JsonFileStore::new(&path)));
    session.cart_mut().add_item(&kantutani(), 3, None, None);
    session.toggle_magic_mode();

    session.reset();

    let restarted = StoreSession::start(Box::new(JsonFileStore::new(&path)));
    assert!(restarted.cart().is_empty());
    assert!(!restarted.magic_mode());
}
