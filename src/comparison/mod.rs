//! Store Comparison
//!
//! Prices a shopping list at every store, ranks the stores that carry the whole
//! list and reports how much more each of them costs than the cheapest one.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::CatalogIndex,
    lists::ShoppingList,
    pricing::{MinorTotal, PricingError},
    products::ProductKey,
    stores::StoreKey,
};

mod render;

pub use render::RenderError;

/// Errors that can occur while comparing stores.
#[derive(Debug, Error, PartialEq)]
pub enum ComparisonError {
    /// A store total could not be calculated.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// The cost of a shopping list at a single store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreComparison<'a> {
    store: StoreKey,
    total: Money<'a, Currency>,
    available_items: usize,
    missing_products: SmallVec<[ProductKey; 4]>,
    savings: Option<Money<'a, Currency>>,
}

impl<'a> StoreComparison<'a> {
    /// Store the result is for
    pub fn store(&self) -> StoreKey {
        self.store
    }

    /// Cost of the items the store carries
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Number of list items the store carries
    pub fn available_items(&self) -> usize {
        self.available_items
    }

    /// Number of list items the store does not carry
    pub fn missing_items(&self) -> usize {
        self.missing_products.len()
    }

    /// Products on the list the store does not carry
    pub fn missing_products(&self) -> &[ProductKey] {
        &self.missing_products
    }

    /// Returns true if the store carries every item on the list.
    pub fn is_complete(&self) -> bool {
        self.missing_products.is_empty()
    }

    /// How much more the store costs than the cheapest complete store.
    ///
    /// Always `None` for stores missing items.
    pub fn savings(&self) -> Option<Money<'a, Currency>> {
        self.savings
    }
}

/// Ranked per-store results for one shopping list.
///
/// Complete stores come first, cheapest first, followed by incomplete stores in
/// the order they were given.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<'a> {
    results: Vec<StoreComparison<'a>>,
    list_len: usize,
    currency: &'static Currency,
}

impl<'a> Comparison<'a> {
    /// Iterate over the ranked results.
    pub fn iter(&self) -> impl Iterator<Item = &StoreComparison<'a>> {
        self.results.iter()
    }

    /// Ranked results as a slice.
    pub fn results(&self) -> &[StoreComparison<'a>] {
        &self.results
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true when there was nothing to compare.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of items on the compared list.
    pub fn list_len(&self) -> usize {
        self.list_len
    }

    /// Currency of every amount in the comparison.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// The cheapest store carrying every item, if there is one.
    pub fn best(&self) -> Option<&StoreComparison<'a>> {
        self.results.first().filter(|result| result.is_complete())
    }

    /// Stores carrying every item, cheapest first.
    pub fn complete(&self) -> impl Iterator<Item = &StoreComparison<'a>> {
        self.results.iter().filter(|result| result.is_complete())
    }

    /// Returns true if at least one store carries every item.
    pub fn has_complete_store(&self) -> bool {
        self.best().is_some()
    }

    /// Difference between the most expensive and the cheapest complete store.
    ///
    /// `None` when no store carries the whole list.
    pub fn potential_savings(&self) -> Option<Money<'a, Currency>> {
        self.complete().last().and_then(StoreComparison::savings)
    }

    /// Potential savings as a fraction of the most expensive complete total.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn potential_savings_percent(&self) -> Result<Option<Percentage>, MoneyError> {
        let (Some(best), Some(worst)) = (self.best(), self.complete().last()) else {
            return Ok(None);
        };

        let savings = worst.total().sub(best.total())?;
        let worst_minor = worst.total().to_minor_units();

        if worst_minor == 0 {
            return Ok(Some(Percentage::from(0.0)));
        }

        let savings_dec = Decimal::from_i64(savings.to_minor_units()).unwrap_or(Decimal::ZERO);
        let worst_dec = Decimal::from_i64(worst_minor).unwrap_or(Decimal::ZERO);

        Ok(Some(Percentage::from(savings_dec / worst_dec)))
    }
}

/// Compares the cost of a shopping list across stores.
///
/// Every store appears exactly once. Items a store does not carry add nothing to
/// its total and count as missing. An empty list gives an empty comparison.
///
/// # Errors
///
/// Returns [`ComparisonError::Pricing`] if a total does not fit in minor units.
#[tracing::instrument(
    name = "comparison.compare_list",
    skip_all,
    fields(items = list.len(), stores = stores.len())
)]
pub fn compare_list<'a>(
    list: &ShoppingList,
    index: &CatalogIndex<'a>,
    stores: &[StoreKey],
) -> Result<Comparison<'a>, ComparisonError> {
    let currency = index.currency();

    if list.is_empty() {
        debug!("empty shopping list, nothing to compare");

        return Ok(Comparison {
            results: Vec::new(),
            list_len: 0,
            currency,
        });
    }

    let mut complete = Vec::new();
    let mut incomplete = Vec::new();

    for &store in stores {
        let result = price_at_store(list, index, store)?;

        if result.is_complete() {
            complete.push(result);
        } else {
            incomplete.push(result);
        }
    }

    // Stable, so equal totals keep store order
    complete.sort_by_key(|result| result.total.to_minor_units());

    if let Some(cheapest) = complete.first().map(StoreComparison::total) {
        for result in &mut complete {
            result.savings = Some(result.total.sub(cheapest)?);
        }
    }

    debug!(
        complete = complete.len(),
        incomplete = incomplete.len(),
        "compared stores"
    );

    complete.append(&mut incomplete);

    Ok(Comparison {
        results: complete,
        list_len: list.len(),
        currency,
    })
}

fn price_at_store<'a>(
    list: &ShoppingList,
    index: &CatalogIndex<'a>,
    store: StoreKey,
) -> Result<StoreComparison<'a>, ComparisonError> {
    let mut total = MinorTotal::default();
    let mut available_items = 0;
    let mut missing_products = SmallVec::new();

    for (_, item) in list.iter() {
        match index.current_price(item.product(), store) {
            Some(record) => {
                total.add_line(record.price(), item.quantity())?;
                available_items += 1;
            }
            None => missing_products.push(item.product()),
        }
    }

    Ok(StoreComparison {
        store,
        total: total.to_money(index.currency()),
        available_items,
        missing_products,
        savings: None,
    })
}
