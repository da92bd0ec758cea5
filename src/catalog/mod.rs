//! Catalog Index
//!
//! Reduces raw price records to the current price of every (product, store) pair
//! and the cheapest current price of every product.

use std::{fmt::Debug, hash::Hash};

use rustc_hash::{FxHashMap, FxHashSet};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::{debug, trace};

use crate::{prices::PriceRecord, products::ProductKey, stores::StoreKey};

pub mod picker;

/// Errors that can occur while building a catalog index.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// A price's currency differs from the index currency (index, price currency, index currency).
    #[error("Price {0} has currency {1}, but the catalog has currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),
}

/// The cheapest current price of a product and the store offering it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheapestPrice<'a> {
    /// Cheapest current price
    pub price: Money<'a, Currency>,

    /// Store offering the price
    pub store: StoreKey,
}

/// Lookup structure built once per comparison.
#[derive(Debug, Clone)]
pub struct CatalogIndex<'a> {
    current: FxHashMap<(ProductKey, StoreKey), PriceRecord<'a>>,
    cheapest: FxHashMap<ProductKey, CheapestPrice<'a>>,
    latest: FxHashMap<ProductKey, PriceRecord<'a>>,
    currency: &'static Currency,
}

impl<'a> CatalogIndex<'a> {
    /// Build an index from price records and the stores taking part in the comparison.
    ///
    /// The most recently recorded price wins for each (product, store) pair; records
    /// sharing a date keep whichever came first. Cheapest prices only consider the
    /// given stores, and equal prices go to the store listed first.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CurrencyMismatch`] if a price is not in `currency`.
    #[tracing::instrument(
        name = "catalog.build",
        skip_all,
        fields(prices = prices.len(), stores = stores.len())
    )]
    pub fn build(
        prices: &[PriceRecord<'a>],
        stores: &[StoreKey],
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let mut current: FxHashMap<(ProductKey, StoreKey), PriceRecord<'a>> =
            FxHashMap::default();
        let mut latest: FxHashMap<ProductKey, PriceRecord<'a>> = FxHashMap::default();
        let mut products: Vec<ProductKey> = Vec::new();
        let mut seen: FxHashSet<ProductKey> = FxHashSet::default();

        for (idx, record) in prices.iter().enumerate() {
            let record_currency = record.price().currency();

            if record_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    idx,
                    record_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            if seen.insert(record.product()) {
                products.push(record.product());
            }

            keep_most_recent(&mut current, (record.product(), record.store()), record);
            keep_most_recent(&mut latest, record.product(), record);
        }

        let mut cheapest = FxHashMap::default();

        for product in products {
            let mut best: Option<&PriceRecord<'a>> = None;

            for store in stores {
                let Some(record) = current.get(&(product, *store)) else {
                    continue;
                };

                let cheaper = best.is_none_or(|best| {
                    record.price().to_minor_units() < best.price().to_minor_units()
                });

                if cheaper {
                    best = Some(record);
                }
            }

            if let Some(record) = best {
                cheapest.insert(
                    product,
                    CheapestPrice {
                        price: *record.price(),
                        store: record.store(),
                    },
                );
            }
        }

        debug!(
            current_prices = current.len(),
            priced_products = cheapest.len(),
            "built catalog index"
        );

        Ok(Self {
            current,
            cheapest,
            latest,
            currency,
        })
    }

    /// Current price of a product at a store, if the store carries it.
    pub fn current_price(&self, product: ProductKey, store: StoreKey) -> Option<&PriceRecord<'a>> {
        self.current.get(&(product, store))
    }

    /// Cheapest current price of a product across the indexed stores.
    pub fn cheapest(&self, product: ProductKey) -> Option<&CheapestPrice<'a>> {
        self.cheapest.get(&product)
    }

    /// Most recently recorded price of a product at any store.
    pub fn latest_price(&self, product: ProductKey) -> Option<&PriceRecord<'a>> {
        self.latest.get(&product)
    }

    /// Currency of every price in the index.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Number of (product, store) pairs with a current price.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Check if the index holds no prices at all.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

/// Returns the cheapest current price for a product, with the store offering it.
pub fn cheapest_price_for<'a>(
    product: ProductKey,
    index: &CatalogIndex<'a>,
) -> Option<CheapestPrice<'a>> {
    index.cheapest(product).copied()
}

fn keep_most_recent<'a, K: Eq + Hash + Debug>(
    map: &mut FxHashMap<K, PriceRecord<'a>>,
    key: K,
    record: &PriceRecord<'a>,
) {
    match map.get(&key) {
        Some(existing) if existing.recorded() >= record.recorded() => {
            if existing.recorded() == record.recorded() {
                trace!(?key, recorded = %record.recorded(), "same-day price ignored");
            }
        }
        _ => {
            map.insert(key, *record);
        }
    }
}
