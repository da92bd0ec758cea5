//! Catalog data sources

use std::error::Error;

use rustc_hash::FxHashSet;
use rusty_money::iso::Currency;

use crate::{lists::ShoppingList, prices::PriceRecord, products::ProductKey, stores::StoreKey};

/// Read access to the catalog data a comparison needs.
///
/// Implementations do the I/O; everything downstream works on the returned
/// in-memory collections.
pub trait CatalogSource<'a> {
    /// Error returned by the data layer.
    type Error: Error + 'static;

    /// Currency every price is recorded in.
    ///
    /// # Errors
    ///
    /// Returns an error if the currency cannot be determined.
    fn currency(&self) -> Result<&'static Currency, Self::Error>;

    /// Fetches the items of a shopping list.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be fetched.
    fn fetch_list_items(&self, list: &str) -> Result<ShoppingList, Self::Error>;

    /// Fetches every price record for the given products, in recording order.
    ///
    /// # Errors
    ///
    /// Returns an error if the prices cannot be fetched.
    fn fetch_prices_for_products(
        &self,
        products: &FxHashSet<ProductKey>,
    ) -> Result<Vec<PriceRecord<'a>>, Self::Error>;

    /// Fetches the stores to compare, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the stores cannot be fetched.
    fn fetch_stores(&self) -> Result<Vec<StoreKey>, Self::Error>;
}

impl<'a, T: CatalogSource<'a>> CatalogSource<'a> for &T {
    type Error = T::Error;

    fn currency(&self) -> Result<&'static Currency, Self::Error> {
        (**self).currency()
    }

    fn fetch_list_items(&self, list: &str) -> Result<ShoppingList, Self::Error> {
        (**self).fetch_list_items(list)
    }

    fn fetch_prices_for_products(
        &self,
        products: &FxHashSet<ProductKey>,
    ) -> Result<Vec<PriceRecord<'a>>, Self::Error> {
        (**self).fetch_prices_for_products(products)
    }

    fn fetch_stores(&self) -> Result<Vec<StoreKey>, Self::Error> {
        (**self).fetch_stores()
    }
}
