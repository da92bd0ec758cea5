//! Comparison service

use std::error::Error as StdError;

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::info;

use crate::{
    catalog::{CatalogError, CatalogIndex},
    comparison::{Comparison, ComparisonError, compare_list},
    lists::ShoppingList,
    products::ProductKey,
    source::CatalogSource,
};

/// Errors that can occur while running a comparison against a data source.
#[derive(Debug, Error)]
pub enum ServiceError<E: StdError + 'static> {
    /// The data source failed.
    #[error("data source error: {0}")]
    Source(#[source] E),

    /// The catalog index could not be built.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The comparison could not be calculated.
    #[error(transparent)]
    Comparison(#[from] ComparisonError),
}

/// Fetches catalog data and compares shopping lists against it.
#[derive(Debug, Clone)]
pub struct ComparisonService<S> {
    source: S,
}

impl<S> ComparisonService<S> {
    /// Creates a service reading from `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying data source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<'a, S: CatalogSource<'a>> ComparisonService<S> {
    /// Fetches a stored shopping list and compares it across stores.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if fetching, indexing or comparing fails.
    #[tracing::instrument(name = "service.compare", skip(self))]
    pub fn compare(&self, list: &str) -> Result<Comparison<'a>, ServiceError<S::Error>> {
        let items = self
            .source
            .fetch_list_items(list)
            .map_err(ServiceError::Source)?;

        self.compare_items(&items)
    }

    /// Compares an in-memory shopping list, e.g. after a quantity change.
    ///
    /// Prices are fetched for the list's products only and the index is rebuilt
    /// from scratch on every call.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if fetching, indexing or comparing fails.
    pub fn compare_items(
        &self,
        items: &ShoppingList,
    ) -> Result<Comparison<'a>, ServiceError<S::Error>> {
        let products: FxHashSet<ProductKey> = items.products().collect();

        let currency = self.source.currency().map_err(ServiceError::Source)?;
        let prices = self
            .source
            .fetch_prices_for_products(&products)
            .map_err(ServiceError::Source)?;
        let stores = self.source.fetch_stores().map_err(ServiceError::Source)?;

        let index = CatalogIndex::build(&prices, &stores, currency)?;
        let comparison = compare_list(items, &index, &stores)?;

        info!(
            items = items.len(),
            stores = stores.len(),
            best = comparison.best().is_some(),
            "compared shopping list"
        );

        Ok(comparison)
    }
}
