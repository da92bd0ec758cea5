//! Stores

use slotmap::new_key_type;

new_key_type! {
    /// Store Key
    pub struct StoreKey;
}

/// Store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    /// Store name
    pub name: String,

    /// Town the store is located in
    pub town: String,
}

impl Store {
    /// Creates a new store.
    pub fn new(name: impl Into<String>, town: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            town: town.into(),
        }
    }

    /// Returns true if the store is in one of the given towns.
    pub fn is_in_any<S: AsRef<str>>(&self, towns: &[S]) -> bool {
        towns
            .iter()
            .any(|town| town.as_ref().eq_ignore_ascii_case(&self.town))
    }
}
