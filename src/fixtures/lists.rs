//! Shopping List Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Wrapper for shopping lists in YAML
#[derive(Debug, Deserialize)]
pub struct ListsFixture {
    /// Map of list name -> items
    pub lists: FxHashMap<String, Vec<ListItemFixture>>,
}

/// Shopping List Item Fixture
#[derive(Debug, Deserialize)]
pub struct ListItemFixture {
    /// Product fixture key
    pub product: String,

    /// Quantity wanted
    pub quantity: u32,
}
