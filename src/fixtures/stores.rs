//! Store Fixtures

use serde::Deserialize;

use crate::stores::Store;

/// Wrapper for stores in YAML.
///
/// Stores are a sequence so the fixture order is the comparison order.
#[derive(Debug, Deserialize)]
pub struct StoresFixture {
    /// Stores in comparison order
    pub stores: Vec<StoreFixture>,
}

/// Store Fixture
#[derive(Debug, Deserialize)]
pub struct StoreFixture {
    /// Fixture key used by price records
    pub key: String,

    /// Store name
    pub name: String,

    /// Town the store is in
    pub town: String,
}

impl From<StoreFixture> for Store {
    fn from(fixture: StoreFixture) -> Self {
        Store {
            name: fixture.name,
            town: fixture.town,
        }
    }
}
