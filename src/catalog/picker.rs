//! Product picker ordering

use std::cmp::Ordering;

use slotmap::SlotMap;

use crate::{
    catalog::{CatalogIndex, CheapestPrice},
    products::{Product, ProductKey},
};

/// A product offered in the picker, annotated with its cheapest price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerEntry<'a> {
    /// Product
    pub product: ProductKey,

    /// Cheapest current price, if any store carries the product
    pub cheapest: Option<CheapestPrice<'a>>,
}

/// Orders products for the "add to list" picker.
///
/// Products matching `term` with a price come first, cheapest first. Products
/// without any price follow in name order. Equal prices also fall back to name.
pub fn rank_products<'a>(
    products: &SlotMap<ProductKey, Product>,
    index: &CatalogIndex<'a>,
    term: &str,
) -> Vec<PickerEntry<'a>> {
    let mut entries: Vec<(&Product, PickerEntry<'a>)> = products
        .iter()
        .filter(|(_, product)| product.matches(term))
        .map(|(key, product)| {
            (
                product,
                PickerEntry {
                    product: key,
                    cheapest: index.cheapest(key).copied(),
                },
            )
        })
        .collect();

    entries.sort_by(|(a_product, a), (b_product, b)| {
        let by_price = match (&a.cheapest, &b.cheapest) {
            (Some(a), Some(b)) => a.price.to_minor_units().cmp(&b.price.to_minor_units()),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };

        by_price.then_with(|| a_product.name.cmp(&b_product.name))
    });

    entries.into_iter().map(|(_, entry)| entry).collect()
}
