//! ShukList prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{
        CatalogError, CatalogIndex, CheapestPrice, cheapest_price_for,
        picker::{PickerEntry, rank_products},
    },
    comparison::{Comparison, ComparisonError, RenderError, StoreComparison, compare_list},
    fixtures::{Fixture, FixtureError},
    lists::{ListError, ListItem, ListItemKey, ShoppingList},
    prices::{PriceError, PriceRecord},
    pricing::{MinorTotal, PricingError},
    products::{Product, ProductKey},
    service::{ComparisonService, ServiceError},
    source::CatalogSource,
    stores::{Store, StoreKey},
};
