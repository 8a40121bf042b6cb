//! Catalog management service.
//!
//! Wraps the catalog and image-store collaborators behind the admin session
//! gate. Every operation checks the session first; the panel UI never
//! reaches the backends directly.

use tracing::{info, instrument};

use terrazul_core::{
    ImageStore, Product, ProductCatalog, ProductDraft, ProductId, ProductPatch,
};

use crate::auth::AdminSession;
use crate::error::AdminError;

/// Catalog CRUD service gated by the admin session.
pub struct CatalogAdmin<C, I, S> {
    catalog: C,
    images: I,
    session: S,
}

impl<C, I, S> CatalogAdmin<C, I, S>
where
    C: ProductCatalog,
    I: ImageStore,
    S: AdminSession,
{
    /// Create a service over the given collaborators.
    #[must_use]
    pub const fn new(catalog: C, images: I, session: S) -> Self {
        Self {
            catalog,
            images,
            session,
        }
    }

    /// Access the session for sign-in/sign-out.
    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    fn ensure_admin(&self) -> Result<(), AdminError> {
        if self.session.is_active() {
            Ok(())
        } else {
            Err(AdminError::Unauthorized)
        }
    }

    /// List all products for the dashboard table.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Unauthorized` without an active session.
    pub fn list_products(&self) -> Result<Vec<Product>, AdminError> {
        self.ensure_admin()?;
        Ok(self.catalog.list()?)
    }

    /// Fetch one product for the edit form.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Unauthorized` without an active session.
    pub fn get_product(&self, id: &ProductId) -> Result<Option<Product>, AdminError> {
        self.ensure_admin()?;
        Ok(self.catalog.get(id)?)
    }

    /// Create a product, deriving the id from the name when none is given.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Validation` when the name yields an empty slug
    /// and `AdminError::Catalog` on id conflicts.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub fn create_product(&mut self, draft: ProductDraft) -> Result<Product, AdminError> {
        self.ensure_admin()?;

        let id = match draft.id.clone() {
            Some(id) => id,
            None => {
                let slug = slugify(&draft.name);
                if slug.is_empty() {
                    return Err(AdminError::Validation(
                        "product name yields an empty id".to_owned(),
                    ));
                }
                ProductId::new(slug)
            }
        };

        let created = self.catalog.create(draft.into_product(id))?;
        info!(id = %created.id, "Created product");
        Ok(created)
    }

    /// Apply a partial update to an existing product.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Catalog` when the id is unknown.
    #[instrument(skip(self, patch))]
    pub fn update_product(
        &mut self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Product, AdminError> {
        self.ensure_admin()?;
        let updated = self.catalog.update(id, patch)?;
        info!(id = %updated.id, "Updated product");
        Ok(updated)
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Unauthorized` without an active session.
    #[instrument(skip(self))]
    pub fn delete_product(&mut self, id: &ProductId) -> Result<(), AdminError> {
        self.ensure_admin()?;
        self.catalog.delete(id)?;
        info!(id = %id, "Deleted product");
        Ok(())
    }

    /// Upload a product image and return its public URL.
    ///
    /// The stored object gets a random name so repeated uploads of the same
    /// file never collide; the original extension is kept.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Catalog` when the blob store rejects the upload.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub fn upload_image(&mut self, filename: &str, bytes: &[u8]) -> Result<String, AdminError> {
        self.ensure_admin()?;

        let key = object_key(filename);
        let url = self.images.put(&key, bytes)?;
        info!(key = %key, "Uploaded product image");
        Ok(url)
    }
}

/// Derive a URL-safe id slug from a product name: lowercase, runs of
/// non-alphanumerics collapse to a single dash, no leading/trailing dash.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Storage key for an uploaded file: random stem, original extension.
fn object_key(filename: &str) -> String {
    let stem = uuid::Uuid::new_v4().simple().to_string();
    std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map_or_else(|| stem.clone(), |ext| format!("{stem}.{ext}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use terrazul_core::CatalogError;

    use super::*;

    /// Session stub: active or not, flipped by sign-in/sign-out.
    struct StubSession {
        active: bool,
    }

    impl AdminSession for StubSession {
        fn is_active(&self) -> bool {
            self.active
        }

        fn sign_in(&mut self, _email: &str, _password: &SecretString) -> Result<(), AdminError> {
            self.active = true;
            Ok(())
        }

        fn sign_out(&mut self) {
            self.active = false;
        }
    }

    /// Catalog stub over a plain vec.
    #[derive(Default)]
    struct VecCatalog {
        products: Vec<Product>,
    }

    impl ProductCatalog for VecCatalog {
        fn list(&self) -> Result<Vec<Product>, CatalogError> {
            Ok(self.products.clone())
        }

        fn get(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
            Ok(self.products.iter().find(|p| &p.id == id).cloned())
        }

        fn create(&mut self, product: Product) -> Result<Product, CatalogError> {
            if self.products.iter().any(|p| p.id == product.id) {
                return Err(CatalogError::Conflict(product.id));
            }
            self.products.push(product.clone());
            Ok(product)
        }

        fn update(
            &mut self,
            id: &ProductId,
            patch: ProductPatch,
        ) -> Result<Product, CatalogError> {
            let product = self
                .products
                .iter_mut()
                .find(|p| &p.id == id)
                .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
            patch.apply(product);
            Ok(product.clone())
        }

        fn delete(&mut self, id: &ProductId) -> Result<(), CatalogError> {
            self.products.retain(|p| &p.id != id);
            Ok(())
        }
    }

    /// Image store stub recording the last key.
    #[derive(Default)]
    struct KeyRecorder {
        keys: Vec<String>,
    }

    impl ImageStore for KeyRecorder {
        fn put(&mut self, key: &str, _bytes: &[u8]) -> Result<String, CatalogError> {
            self.keys.push(key.to_owned());
            Ok(format!("https://cdn.terrazul.cl/product-images/{key}"))
        }
    }

    fn service(active: bool) -> CatalogAdmin<VecCatalog, KeyRecorder, StubSession> {
        CatalogAdmin::new(
            VecCatalog::default(),
            KeyRecorder::default(),
            StubSession { active },
        )
    }

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_owned(),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn test_inactive_session_is_unauthorized_everywhere() {
        let mut admin = service(false);

        assert!(matches!(
            admin.list_products(),
            Err(AdminError::Unauthorized)
        ));
        assert!(matches!(
            admin.create_product(draft("Nuevo Origen")),
            Err(AdminError::Unauthorized)
        ));
        assert!(matches!(
            admin.delete_product(&ProductId::new("x")),
            Err(AdminError::Unauthorized)
        ));
        assert!(matches!(
            admin.upload_image("foto.webp", b"bytes"),
            Err(AdminError::Unauthorized)
        ));
    }

    #[test]
    fn test_sign_in_opens_the_gate() {
        let mut admin = service(false);
        admin
            .session_mut()
            .sign_in("hola@terrazul.cl", &SecretString::from("s3cret"))
            .unwrap();

        assert!(admin.list_products().unwrap().is_empty());

        admin.session_mut().sign_out();
        assert!(matches!(
            admin.list_products(),
            Err(AdminError::Unauthorized)
        ));
    }

    #[test]
    fn test_create_derives_slug_from_name() {
        let mut admin = service(true);
        let created = admin.create_product(draft("Yirgacheffe, Etiopía")).unwrap();
        assert_eq!(created.id.as_str(), "yirgacheffe-etiop-a");

        let listed = admin.list_products().unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[test]
    fn test_create_keeps_explicit_id() {
        let mut admin = service(true);
        let mut d = draft("Otro Nombre");
        d.id = Some(ProductId::new("slug-a-mano"));

        let created = admin.create_product(d).unwrap();
        assert_eq!(created.id.as_str(), "slug-a-mano");
    }

    #[test]
    fn test_create_rejects_unsluggable_name() {
        let mut admin = service(true);
        assert!(matches!(
            admin.create_product(draft("¡¡¡")),
            Err(AdminError::Validation(_))
        ));
    }

    #[test]
    fn test_create_conflict_bubbles_up() {
        let mut admin = service(true);
        admin.create_product(draft("Nuevo Origen")).unwrap();

        let err = admin.create_product(draft("Nuevo Origen")).unwrap_err();
        assert!(matches!(err, AdminError::Catalog(CatalogError::Conflict(_))));
    }

    #[test]
    fn test_update_patches_only_given_fields() {
        let mut admin = service(true);
        let created = admin.create_product(draft("Nuevo Origen")).unwrap();

        let patch = ProductPatch {
            description: Some("Lote 2026.".to_owned()),
            ..ProductPatch::default()
        };
        let updated = admin.update_product(&created.id, patch).unwrap();

        assert_eq!(updated.description, "Lote 2026.");
        assert_eq!(updated.name, "Nuevo Origen");
    }

    #[test]
    fn test_delete_then_get_none() {
        let mut admin = service(true);
        let created = admin.create_product(draft("Nuevo Origen")).unwrap();

        admin.delete_product(&created.id).unwrap();
        assert!(admin.get_product(&created.id).unwrap().is_none());
    }

    #[test]
    fn test_upload_keys_are_unique_and_keep_extension() {
        let mut admin = service(true);

        let first = admin.upload_image("foto.webp", b"a").unwrap();
        let second = admin.upload_image("foto.webp", b"b").unwrap();

        assert_ne!(first, second);
        assert!(first.ends_with(".webp"));
        assert!(second.ends_with(".webp"));
    }

    #[test]
    fn test_slugify_matches_panel_rules() {
        assert_eq!(slugify("Huila, Colombia"), "huila-colombia");
        assert_eq!(slugify("  Pack Tres Orígenes  "), "pack-tres-or-genes");
        assert_eq!(slugify("1kg Especial"), "1kg-especial");
        assert_eq!(slugify("---"), "");
    }
}
