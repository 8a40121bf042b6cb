//! Integration tests for the admin panel backend.
//!
//! Runs the `CatalogAdmin` service against the storefront's bundled catalog
//! and checks the interplay the shop relies on: carts keep their snapshots
//! while the admin edits rows, and quiz winners resolve against the live
//! catalog.

#![allow(clippy::unwrap_used)]

use secrecy::SecretString;

use terrazul_admin::auth::AdminSession;
use terrazul_admin::error::AdminError;
use terrazul_admin::services::CatalogAdmin;
use terrazul_core::{Price, ProductCatalog, ProductDraft, ProductId, ProductPatch};
use terrazul_integration_tests::{ActiveSession, FakeImageStore, init_tracing};
use terrazul_storefront::barista::{self, QuizAnswers};
use terrazul_storefront::cart::{Cart, MemoryStore};
use terrazul_storefront::catalog::BundledCatalog;

/// Session double that starts signed out.
struct TogglingSession {
    active: bool,
}

impl AdminSession for TogglingSession {
    fn is_active(&self) -> bool {
        self.active
    }

    fn sign_in(&mut self, email: &str, _password: &SecretString) -> Result<(), AdminError> {
        if email.ends_with("@terrazul.cl") {
            self.active = true;
            Ok(())
        } else {
            Err(AdminError::InvalidCredentials)
        }
    }

    fn sign_out(&mut self) {
        self.active = false;
    }
}

fn admin() -> CatalogAdmin<BundledCatalog, FakeImageStore, ActiveSession> {
    CatalogAdmin::new(
        BundledCatalog::bundled(),
        FakeImageStore::default(),
        ActiveSession,
    )
}

#[test]
fn test_full_crud_cycle_over_bundled_catalog() {
    init_tracing();
    let mut admin = admin();

    assert_eq!(admin.list_products().unwrap().len(), 5);

    let created = admin
        .create_product(ProductDraft {
            name: "Sidamo, Etiopía".to_owned(),
            price_number: Price::new(38_000),
            ..ProductDraft::default()
        })
        .unwrap();
    assert_eq!(created.id.as_str(), "sidamo-etiop-a");
    assert_eq!(admin.list_products().unwrap().len(), 6);

    let updated = admin
        .update_product(
            &created.id,
            ProductPatch {
                price_number: Some(Price::new(39_500)),
                ..ProductPatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.price_number, Price::new(39_500));

    admin.delete_product(&created.id).unwrap();
    assert!(admin.get_product(&created.id).unwrap().is_none());
    assert_eq!(admin.list_products().unwrap().len(), 5);
}

#[test]
fn test_gate_follows_sign_in_and_out() {
    init_tracing();
    let mut admin = CatalogAdmin::new(
        BundledCatalog::bundled(),
        FakeImageStore::default(),
        TogglingSession { active: false },
    );

    assert!(matches!(
        admin.list_products(),
        Err(AdminError::Unauthorized)
    ));

    assert!(matches!(
        admin
            .session_mut()
            .sign_in("intruso@otra.cl", &SecretString::from("pw")),
        Err(AdminError::InvalidCredentials)
    ));
    assert!(matches!(
        admin.list_products(),
        Err(AdminError::Unauthorized)
    ));

    admin
        .session_mut()
        .sign_in("hola@terrazul.cl", &SecretString::from("pw"))
        .unwrap();
    assert_eq!(admin.list_products().unwrap().len(), 5);

    admin.session_mut().sign_out();
    assert!(matches!(
        admin.list_products(),
        Err(AdminError::Unauthorized)
    ));
}

#[test]
fn test_cart_snapshot_survives_catalog_edit() {
    init_tracing();
    let mut catalog = BundledCatalog::bundled();
    let id = ProductId::new("huila-colombia");

    let mut cart = Cart::load(Box::new(MemoryStore::new()));
    cart.add_item(&catalog.get(&id).unwrap().unwrap(), 2, Some("250g"), None);
    assert_eq!(cart.total(), Price::new(80_000));

    // Admin raises the price after the shopper added the item.
    catalog
        .update(
            &id,
            ProductPatch {
                price_number: Some(Price::new(44_000)),
                ..ProductPatch::default()
            },
        )
        .unwrap();

    // The existing line is a snapshot; the total does not move.
    assert_eq!(cart.total(), Price::new(80_000));
    assert_eq!(cart.items()[0].product.price_number, Price::new(40_000));
}

#[test]
fn test_quiz_winner_resolves_against_catalog() {
    init_tracing();
    let catalog = BundledCatalog::bundled();

    let mut answers = QuizAnswers::default();
    answers.set(1, "nutty").unwrap();
    answers.set(2, "mild").unwrap();
    answers.set(3, "low").unwrap();
    answers.set(4, "filter").unwrap();

    let recommendation = barista::recommend(&answers);
    let product = catalog.get(&recommendation.product_id).unwrap();
    assert!(product.is_some(), "quiz winner must exist in the catalog");

    // The recommended grind is one the product actually offers.
    let product = product.unwrap();
    assert!(
        product
            .grind_options
            .iter()
            .any(|g| g == recommendation.grind.label())
    );
}

#[test]
fn test_deleted_winner_is_simply_absent() {
    init_tracing();
    let mut admin = admin();

    let recommendation = barista::recommend(&QuizAnswers::default());
    admin.delete_product(&recommendation.product_id).unwrap();

    // Resolution is a plain Option; display is skipped, not an error.
    assert!(
        admin
            .get_product(&recommendation.product_id)
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_image_upload_returns_public_url() {
    init_tracing();
    let mut admin = admin();

    let url = admin.upload_image("etiqueta.webp", &[0_u8; 64]).unwrap();
    assert!(url.starts_with("https://cdn.terrazul.cl/product-images/"));
    assert!(url.ends_with(".webp"));
}
