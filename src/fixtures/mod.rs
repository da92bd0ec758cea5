//! Fixtures
//!
//! YAML-backed catalog data: products, stores, price records and named shopping
//! lists, loaded from `{base}/{products,stores,prices,lists}/{name}.yml`.

use std::{fs, path::PathBuf};

use rustc_hash::{FxHashMap, FxHashSet};
use rusty_money::{Money, iso::Currency};
use slotmap::SlotMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    fixtures::{
        lists::ListsFixture, prices::PricesFixture, products::ProductsFixture,
        stores::StoresFixture,
    },
    lists::{ListError, ShoppingList},
    prices::{PriceError, PriceRecord},
    products::{Product, ProductKey},
    source::CatalogSource,
    stores::{Store, StoreKey},
};

pub mod lists;
pub mod prices;
pub mod products;
pub mod stores;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Store not found
    #[error("Store not found: {0}")]
    StoreNotFound(String),

    /// Shopping list not found
    #[error("Shopping list not found: {0}")]
    ListNotFound(String),

    /// Two stores share a fixture key
    #[error("Duplicate store key: {0}")]
    DuplicateStore(String),

    /// Currency mismatch between prices
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No prices loaded yet
    #[error("No prices loaded yet; currency unknown")]
    NoCurrency,

    /// Invalid price record
    #[error(transparent)]
    Price(#[from] PriceError),

    /// Invalid shopping list
    #[error("Invalid shopping list {name}: {source}")]
    List {
        /// Name of the list being loaded
        name: String,

        /// The underlying list error
        source: ListError,
    },
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// `SlotMaps` to store the actual types with generated keys
    product_meta: SlotMap<ProductKey, Product>,
    store_meta: SlotMap<StoreKey, Store>,

    /// String key -> `SlotMap` key mappings for lookups
    product_keys: FxHashMap<String, ProductKey>,
    store_keys: FxHashMap<String, StoreKey>,

    /// Stores in fixture order
    store_order: Vec<StoreKey>,

    /// Towns to restrict `fetch_stores` to, if any
    towns: Option<Vec<String>>,

    /// Price records in fixture order
    prices: Vec<PriceRecord<'static>>,

    /// Named shopping lists
    lists: FxHashMap<String, ShoppingList>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            product_meta: SlotMap::with_key(),
            store_meta: SlotMap::with_key(),
            product_keys: FxHashMap::default(),
            store_keys: FxHashMap::default(),
            store_order: Vec::new(),
            towns: None,
            prices: Vec::new(),
            lists: FxHashMap::default(),
            currency: None,
        }
    }

    fn read(&self, category: &str, name: &str) -> Result<String, FixtureError> {
        let file_path = self.base_path.join(category).join(format!("{name}.yml"));

        debug!(path = %file_path.display(), "reading fixture");

        Ok(fs::read_to_string(&file_path)?)
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ProductsFixture = serde_norway::from_str(&self.read("products", name)?)?;

        for (key, product_fixture) in fixture.products {
            let product_key = self.product_meta.insert(product_fixture.into());

            self.product_keys.insert(key, product_key);
        }

        Ok(self)
    }

    /// Load stores from a YAML fixture file, keeping their order
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or repeats a store key.
    pub fn load_stores(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: StoresFixture = serde_norway::from_str(&self.read("stores", name)?)?;

        for store_fixture in fixture.stores {
            if self.store_keys.contains_key(&store_fixture.key) {
                return Err(FixtureError::DuplicateStore(store_fixture.key));
            }

            let key = store_fixture.key.clone();
            let store_key = self.store_meta.insert(store_fixture.into());

            self.store_keys.insert(key, store_key);
            self.store_order.push(store_key);
        }

        Ok(self)
    }

    /// Load price records from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a price refers to
    /// an unknown product or store, or if currencies differ.
    pub fn load_prices(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: PricesFixture = serde_norway::from_str(&self.read("prices", name)?)?;

        for price_fixture in fixture.prices {
            let (minor_units, currency) = prices::parse_price(&price_fixture.price)?;

            // Validate currency consistency
            if let Some(existing_currency) = self.currency {
                if existing_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        existing_currency.iso_alpha_code.to_string(),
                        currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                self.currency = Some(currency);
            }

            let product = self.product_key(&price_fixture.product)?;
            let store = self.store_key(&price_fixture.store)?;

            let mut record = PriceRecord::new(
                product,
                store,
                Money::from_minor(minor_units, currency),
                price_fixture.recorded,
            )?;

            if price_fixture.promotion {
                record = record.with_promotion(price_fixture.promotion_ends);
            }

            self.prices.push(record);
        }

        Ok(self)
    }

    /// Load named shopping lists from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if an item refers to
    /// an unknown product, or if a list repeats a product or has a zero quantity.
    pub fn load_lists(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ListsFixture = serde_norway::from_str(&self.read("lists", name)?)?;

        for (list_name, items) in fixture.lists {
            let mut list = ShoppingList::new();

            for item in items {
                let product = self.product_key(&item.product)?;

                list.add(product, item.quantity)
                    .map_err(|source| FixtureError::List {
                        name: list_name.clone(),
                        source,
                    })?;
            }

            self.lists.insert(list_name, list);
        }

        Ok(self)
    }

    /// Load a complete fixture set (products, stores, prices and lists with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_products(name)?
            .load_stores(name)?
            .load_prices(name)?
            .load_lists(name)?;

        Ok(fixture)
    }

    /// Only offer stores in the given towns to comparisons.
    #[must_use]
    pub fn in_towns<S: Into<String>>(mut self, towns: impl IntoIterator<Item = S>) -> Self {
        self.towns = Some(towns.into_iter().map(Into::into).collect());
        self
    }

    /// Get a product by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, key: &str) -> Result<&Product, FixtureError> {
        let product_key = self.product_key(key)?;

        self.product_meta
            .get(product_key)
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Get a product key by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product_key(&self, key: &str) -> Result<ProductKey, FixtureError> {
        self.product_keys
            .get(key)
            .copied()
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Get a store by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the store is not found.
    pub fn store(&self, key: &str) -> Result<&Store, FixtureError> {
        let store_key = self.store_key(key)?;

        self.store_meta
            .get(store_key)
            .ok_or_else(|| FixtureError::StoreNotFound(key.to_string()))
    }

    /// Get a store key by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the store is not found.
    pub fn store_key(&self, key: &str) -> Result<StoreKey, FixtureError> {
        self.store_keys
            .get(key)
            .copied()
            .ok_or_else(|| FixtureError::StoreNotFound(key.to_string()))
    }

    /// Get a shopping list by name
    ///
    /// # Errors
    ///
    /// Returns an error if the list is not found.
    pub fn list(&self, name: &str) -> Result<&ShoppingList, FixtureError> {
        self.lists
            .get(name)
            .ok_or_else(|| FixtureError::ListNotFound(name.to_string()))
    }

    /// Stores in fixture order, restricted to the selected towns if any
    pub fn stores(&self) -> Vec<StoreKey> {
        self.store_order
            .iter()
            .copied()
            .filter(|key| match (&self.towns, self.store_meta.get(*key)) {
                (None, _) => true,
                (Some(towns), Some(store)) => store.is_in_any(towns),
                (Some(_), None) => false,
            })
            .collect()
    }

    /// Selected stores grouped by town
    ///
    /// Towns appear in the order of their first store; stores keep fixture order.
    pub fn stores_by_town(&self) -> Vec<(&str, Vec<StoreKey>)> {
        let mut groups: Vec<(&str, Vec<StoreKey>)> = Vec::new();

        for key in self.stores() {
            let Some(store) = self.store_meta.get(key) else {
                continue;
            };

            match groups.iter_mut().find(|(town, _)| *town == store.town) {
                Some((_, keys)) => keys.push(key),
                None => groups.push((store.town.as_str(), vec![key])),
            }
        }

        groups
    }

    /// Get all price records
    pub fn prices(&self) -> &[PriceRecord<'static>] {
        &self.prices
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no prices have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    /// Get the product metadata `SlotMap`
    pub fn product_meta_map(&self) -> &SlotMap<ProductKey, Product> {
        &self.product_meta
    }

    /// Get the store metadata `SlotMap`
    pub fn store_meta_map(&self) -> &SlotMap<StoreKey, Store> {
        &self.store_meta
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource<'static> for Fixture {
    type Error = FixtureError;

    fn currency(&self) -> Result<&'static Currency, Self::Error> {
        Fixture::currency(self)
    }

    fn fetch_list_items(&self, list: &str) -> Result<ShoppingList, Self::Error> {
        self.list(list).cloned()
    }

    fn fetch_prices_for_products(
        &self,
        products: &FxHashSet<ProductKey>,
    ) -> Result<Vec<PriceRecord<'static>>, Self::Error> {
        Ok(self
            .prices
            .iter()
            .filter(|record| products.contains(&record.product()))
            .copied()
            .collect())
    }

    fn fetch_stores(&self) -> Result<Vec<StoreKey>, Self::Error> {
        Ok(self.stores())
    }
}
