//! Shopping Lists

use slotmap::{SlotMap, new_key_type};
use thiserror::Error;

use crate::products::ProductKey;

new_key_type! {
    /// Shopping List Item Key
    pub struct ListItemKey;
}

/// Errors related to shopping list edits.
#[derive(Debug, Error, PartialEq)]
pub enum ListError {
    /// Quantities must be at least one.
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// The product is already on the list.
    #[error("product {0:?} is already on the list")]
    DuplicateProduct(ProductKey),

    /// The item was not found on the list.
    #[error("item {0:?} not found")]
    ItemNotFound(ListItemKey),
}

/// A product and the quantity wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem {
    product: ProductKey,
    quantity: u32,
}

impl ListItem {
    /// Returns the product of the item
    pub fn product(&self) -> ProductKey {
        self.product
    }

    /// Returns the quantity wanted
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Shopping List
///
/// Every product appears at most once and every quantity is at least one.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: SlotMap<ListItemKey, ListItem>,
}

impl PartialEq for ShoppingList {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .all(|(key, item)| other.items.get(key) == Some(item))
    }
}

impl ShoppingList {
    /// Create a new, empty shopping list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the list.
    ///
    /// # Errors
    ///
    /// - [`ListError::InvalidQuantity`]: the quantity is zero.
    /// - [`ListError::DuplicateProduct`]: the product is already on the list.
    pub fn add(&mut self, product: ProductKey, quantity: u32) -> Result<ListItemKey, ListError> {
        if quantity < 1 {
            return Err(ListError::InvalidQuantity);
        }

        if self.contains_product(product) {
            return Err(ListError::DuplicateProduct(product));
        }

        Ok(self.items.insert(ListItem { product, quantity }))
    }

    /// Remove an item from the list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::ItemNotFound`] if the item is not on the list.
    pub fn remove(&mut self, item: ListItemKey) -> Result<ListItem, ListError> {
        self.items.remove(item).ok_or(ListError::ItemNotFound(item))
    }

    /// Get an item from the list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::ItemNotFound`] if the item is not on the list.
    pub fn get(&self, item: ListItemKey) -> Result<&ListItem, ListError> {
        self.items.get(item).ok_or(ListError::ItemNotFound(item))
    }

    /// Returns a copy of the list with the item's quantity replaced.
    ///
    /// Quantities below one, and unknown items, leave the list unchanged.
    #[must_use]
    pub fn update_quantity(&self, item: ListItemKey, quantity: u32) -> Self {
        let mut updated = self.clone();

        if quantity < 1 {
            return updated;
        }

        if let Some(entry) = updated.items.get_mut(item) {
            entry.quantity = quantity;
        }

        updated
    }

    /// Returns true if the product is already on the list.
    pub fn contains_product(&self, product: ProductKey) -> bool {
        self.items.values().any(|item| item.product == product)
    }

    /// Iterate over the items on the list.
    pub fn iter(&self) -> impl Iterator<Item = (ListItemKey, &ListItem)> {
        self.items.iter()
    }

    /// Iterate over the distinct products on the list.
    pub fn products(&self) -> impl Iterator<Item = ProductKey> + '_ {
        self.items.values().map(ListItem::product)
    }

    /// Get the number of items on the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;
    use testresult::TestResult;

    use crate::products::Product;

    use super::*;

    fn products(n: usize) -> Vec<ProductKey> {
        let mut map: SlotMap<ProductKey, Product> = SlotMap::with_key();

        (0..n)
            .map(|i| map.insert(Product::new(format!("Product {i}"), "Pantry", "1pc")))
            .collect()
    }

    #[test]
    fn add_rejects_zero_quantity() {
        let mut list = ShoppingList::new();

        assert_eq!(
            list.add(ProductKey::default(), 0),
            Err(ListError::InvalidQuantity)
        );
        assert!(list.is_empty());
    }

    #[test]
    fn add_rejects_duplicate_product() -> TestResult {
        let product = ProductKey::default();
        let mut list = ShoppingList::new();

        list.add(product, 1)?;

        assert_eq!(list.add(product, 3), Err(ListError::DuplicateProduct(product)));
        assert_eq!(list.len(), 1);

        Ok(())
    }

    #[test]
    fn update_quantity_returns_new_list() -> TestResult {
        let mut list = ShoppingList::new();
        let item = list.add(ProductKey::default(), 1)?;

        let updated = list.update_quantity(item, 4);

        assert_eq!(updated.get(item)?.quantity(), 4);
        assert_eq!(list.get(item)?.quantity(), 1);

        Ok(())
    }

    #[test]
    fn update_quantity_below_one_is_a_no_op() -> TestResult {
        let mut list = ShoppingList::new();
        let item = list.add(ProductKey::default(), 2)?;

        assert_eq!(list.update_quantity(item, 0), list);

        Ok(())
    }

    #[test]
    fn update_quantity_of_unknown_item_is_a_no_op() -> TestResult {
        let mut list = ShoppingList::new();
        let item = list.add(ProductKey::default(), 2)?;

        list.remove(item)?;

        assert_eq!(list.update_quantity(item, 5), list);

        Ok(())
    }

    #[test]
    fn lists_with_different_quantities_differ() -> TestResult {
        let mut list = ShoppingList::new();
        let item = list.add(ProductKey::default(), 2)?;

        assert_ne!(list.update_quantity(item, 3), list);

        Ok(())
    }

    #[test]
    fn get_and_remove_by_item_key() -> TestResult {
        let &[apple, pear] = products(2).as_slice() else {
            return Err("expected two products".into());
        };

        let mut list = ShoppingList::new();

        let first = list.add(apple, 2)?;
        let second = list.add(pear, 1)?;

        assert_eq!(list.get(first)?.quantity(), 2);

        let removed = list.remove(first)?;

        assert_eq!(removed.product(), apple);
        assert_eq!(list.get(first), Err(ListError::ItemNotFound(first)));
        assert_eq!(list.get(second)?.product(), pear);
        assert!(!list.contains_product(apple));

        Ok(())
    }

    #[test]
    fn remove_missing_item_returns_error() {
        let mut list = ShoppingList::new();

        assert_eq!(
            list.remove(ListItemKey::default()),
            Err(ListError::ItemNotFound(ListItemKey::default()))
        );
    }

    #[test]
    fn products_lists_every_item() -> TestResult {
        let keys = products(3);
        let mut list = ShoppingList::new();

        for key in &keys {
            list.add(*key, 1)?;
        }

        let listed: Vec<ProductKey> = list.products().collect();

        assert_eq!(listed, keys);

        Ok(())
    }
}
