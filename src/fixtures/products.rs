//! Product Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::products::Product;

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product key -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Product brand
    #[serde(default)]
    pub brand: Option<String>,

    /// Product category
    pub category: String,

    /// Unit descriptor (e.g., "500g")
    pub unit: String,
}

impl From<ProductFixture> for Product {
    fn from(fixture: ProductFixture) -> Self {
        Product {
            name: fixture.name,
            brand: fixture.brand,
            category: fixture.category,
            unit: fixture.unit,
        }
    }
}
