//! Products

use slotmap::new_key_type;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product name
    pub name: String,

    /// Product brand, if known
    pub brand: Option<String>,

    /// Product category (e.g. "Pasta & Rice")
    pub category: String,

    /// Unit descriptor (e.g. "500g")
    pub unit: String,
}

impl Product {
    /// Creates a new unbranded product.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            brand: None,
            category: category.into(),
            unit: unit.into(),
        }
    }

    /// Sets the brand of the product.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Returns true if the search term appears in the name, brand or category.
    ///
    /// Matching is case-insensitive. An empty term matches every product.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();

        if needle.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&needle)
            || self
                .brand
                .as_deref()
                .is_some_and(|brand| brand.to_lowercase().contains(&needle))
            || self.category.to_lowercase().contains(&needle)
    }

    /// Returns true if the product is in exactly `category`.
    ///
    /// `None` selects every category.
    pub fn in_category(&self, category: Option<&str>) -> bool {
        category.is_none_or(|category| self.category == category)
    }
}
