//! Bundled product catalog.
//!
//! In production the catalog lives in a hosted row store reached through the
//! `ProductCatalog` seam; this in-memory implementation seeds the Terrazul
//! lineup for local sessions and tests, optionally replaced by a JSON file.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{info, warn};

use terrazul_core::{
    ArtInfo, ArtistSocials, CatalogError, Grind, Price, Product, ProductCatalog, ProductId,
    ProductPatch,
};

/// In-memory `ProductCatalog` seeded with the Terrazul lineup.
#[derive(Debug, Clone)]
pub struct BundledCatalog {
    products: Vec<Product>,
}

impl BundledCatalog {
    /// The built-in five-product lineup.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            products: seed_products(),
        }
    }

    /// Load products from a JSON file, falling back to the bundled lineup
    /// when the file is missing or malformed.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Vec<Product>>(&content) {
                Ok(products) => {
                    info!(count = products.len(), path = %path.display(), "Loaded catalog");
                    Self { products }
                }
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "Malformed catalog file, using bundled lineup");
                    Self::bundled()
                }
            },
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Unreadable catalog file, using bundled lineup");
                Self::bundled()
            }
        }
    }
}

impl Default for BundledCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}

impl ProductCatalog for BundledCatalog {
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

    fn update(&mut self, id: &ProductId, patch: ProductPatch) -> Result<Product, CatalogError> {
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

fn clp(amount: i64) -> Price {
    Price::new(amount)
}

fn all_grinds() -> Vec<String> {
    Grind::all().iter().map(|g| g.label().to_owned()).collect()
}

fn weights(quarter: i64, kilo: i64) -> BTreeMap<String, Price> {
    BTreeMap::from([
        ("250g".to_owned(), clp(quarter)),
        ("1kg".to_owned(), clp(kilo)),
    ])
}

#[allow(clippy::too_many_lines)]
fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("kantutani-bolivia"),
            name: "Kantutani, Bolivia".to_owned(),
            price_number: clp(14_000),
            prices: weights(14_000, 39_000),
            img: "/Kantutani.webp".to_owned(),
            is_new: true,
            description: "Un café excepcional cultivado en las alturas de Bolivia. Kantutani \
                          ofrece un perfil de taza equilibrado con notas dulces y un cuerpo \
                          sedoso."
                .to_owned(),
            region: Some("Bolivia".to_owned()),
            roast_level: Some("Medio".to_owned()),
            tasting_notes: vec![
                "Chocolate".to_owned(),
                "Nuez".to_owned(),
                "Caramelo".to_owned(),
            ],
            acidity: Some(4),
            intensity: Some(3),
            bitterness: Some(2),
            grind_options: all_grinds(),
            tasting_profile_image: None,
            art_info: Some(ArtInfo {
                title: "Arte de Kantutani".to_owned(),
                description: "Una científica-exploradora estudia la planta del café como un \
                              organismo precioso, entre lo ancestral del origen y un \
                              laboratorio espacial futurista."
                    .to_owned(),
                artist_name: "Catalina Cartagena".to_owned(),
                artist_description: "Ilustradora y ceramista chilena de figuras expresivas, \
                                     humor sutil y una estética que mezcla lo íntimo con lo \
                                     fantástico."
                    .to_owned(),
                artist_socials: Some(ArtistSocials {
                    instagram: Some("@catalinagena".to_owned()),
                    web: Some(
                        "cl.fineartlatinoamerica.com/collections/catalina-cartagena".to_owned(),
                    ),
                }),
                illustration: Some("/Kantutani-Ilustracion.png".to_owned()),
            }),
        },
        Product {
            id: ProductId::new("pack-tres-origenes"),
            name: "Pack Tres Orígenes".to_owned(),
            price_number: clp(32_000),
            prices: BTreeMap::new(),
            img: "/Pack Tres Origenes.webp".to_owned(),
            is_new: true,
            description: "Viaja por el mundo a través del café con nuestro pack de tres \
                          orígenes. Incluye selecciones de Guatemala, Colombia y Brasil."
                .to_owned(),
            region: None,
            roast_level: None,
            tasting_notes: Vec::new(),
            acidity: None,
            intensity: None,
            bitterness: None,
            grind_options: all_grinds(),
            tasting_profile_image: None,
            art_info: None,
        },
        Product {
            id: ProductId::new("huehuetenango-guatemala"),
            name: "Huehuetenango, Guatemala".to_owned(),
            price_number: clp(36_500),
            prices: weights(36_500, 99_000),
            img: "/Huehuetenango.webp".to_owned(),
            is_new: false,
            description: "Proveniente de la famosa región de Huehuetenango, este café destaca \
                          por su acidez brillante y sus complejas notas frutales."
                .to_owned(),
            region: Some("Guatemala".to_owned()),
            roast_level: Some("Medio-Alto".to_owned()),
            tasting_notes: vec![
                "Frutos rojos".to_owned(),
                "Cacao".to_owned(),
                "Cítricos".to_owned(),
            ],
            acidity: Some(5),
            intensity: Some(3),
            bitterness: Some(2),
            grind_options: all_grinds(),
            tasting_profile_image: None,
            art_info: Some(ArtInfo {
                title: "Arte de Huehuetenango".to_owned(),
                description: "Estética retro-cósmica con humor gráfico: un auto flotando en el \
                              espacio y un haz que ilumina una planta de café, recordatorio \
                              del terroir y del viaje del grano."
                    .to_owned(),
                artist_name: "Buen Muchacho".to_owned(),
                artist_description: "Artista gráfico de colores saturados, formas \
                                     caricaturescas y humor visual, con influencias de cómics \
                                     clásicos y psicodelia."
                    .to_owned(),
                artist_socials: Some(ArtistSocials {
                    instagram: Some("@buen.muchacho_".to_owned()),
                    web: Some("www.buenmuchacho.com".to_owned()),
                }),
                illustration: Some("/Huehuetenango-Ilustracion.png".to_owned()),
            }),
        },
        Product {
            id: ProductId::new("huila-colombia"),
            name: "Huila, Colombia".to_owned(),
            price_number: clp(40_000),
            prices: weights(40_000, 108_000),
            img: "/Huila.webp".to_owned(),
            is_new: false,
            description: "El clásico café colombiano elevado a su máxima expresión. Dulzura \
                          pronunciada, acidez media y un final limpio que invita a seguir \
                          bebiendo."
                .to_owned(),
            region: Some("Colombia".to_owned()),
            roast_level: Some("Medio".to_owned()),
            tasting_notes: vec![
                "Caramelo".to_owned(),
                "Manzana".to_owned(),
                "Vainilla".to_owned(),
            ],
            acidity: Some(4),
            intensity: Some(4),
            bitterness: Some(3),
            grind_options: all_grinds(),
            tasting_profile_image: None,
            art_info: Some(ArtInfo {
                title: "Arte de Huila".to_owned(),
                description: "Un astronauta contempla una cafetera de filtro suspendida en un \
                              halo de luz: el café como ritual personal incluso en el vacío."
                    .to_owned(),
                artist_name: "Lía Sandoval".to_owned(),
                artist_description: "Artista visual chilena de arte digital atmosférico, \
                                     ciencia ficción suave y objetos cotidianos elevados a \
                                     íconos."
                    .to_owned(),
                artist_socials: None,
                illustration: Some("/Huila-Ilustracion.png".to_owned()),
            }),
        },
        Product {
            id: ProductId::new("minas-gerais-brasil"),
            name: "Minas Gerais, Brasil".to_owned(),
            price_number: clp(34_000),
            prices: weights(34_000, 92_000),
            img: "/Minas Gerais.webp".to_owned(),
            is_new: false,
            description: "Cuerpo denso y baja acidez, típico de los mejores cafés brasileños. \
                          Ideal para espresso o para quienes prefieren sabores intensos y \
                          achocolatados."
                .to_owned(),
            region: Some("Brasil".to_owned()),
            roast_level: Some("Medio-Oscuro".to_owned()),
            tasting_notes: vec![
                "Chocolate oscuro".to_owned(),
                "Avellana".to_owned(),
                "Melaza".to_owned(),
            ],
            acidity: Some(2),
            intensity: Some(3),
            bitterness: Some(4),
            grind_options: all_grinds(),
            tasting_profile_image: None,
            art_info: Some(ArtInfo {
                title: "Arte de Minas Gerais".to_owned(),
                description: "Paisaje espacial agresivo y geométrico: un diamante mecánico \
                              flota sobre un mundo erosionado, en una paleta reducida de \
                              verde, blanco y negro."
                    .to_owned(),
                artist_name: "Ramiro Ossa".to_owned(),
                artist_description: "Ilustrador chileno de gráfica espacial inspirada en la \
                                     estética pulp de los 70 y el grabado tradicional."
                    .to_owned(),
                artist_socials: None,
                illustration: Some("/Minas Gerais-Ilustracion.png".to_owned()),
            }),
        },
    ]
}
