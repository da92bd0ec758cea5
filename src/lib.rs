//! ShukList
//!
//! ShukList compares what a grocery shopping list costs across stores. Raw price
//! records are reduced to a per-comparison [`catalog::CatalogIndex`], and
//! [`comparison::compare_list`] ranks every store by the cost of the list, marking
//! which stores carry all of it and how much more each costs than the cheapest.

pub mod catalog;
pub mod comparison;
pub mod fixtures;
pub mod lists;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod service;
pub mod source;
pub mod stores;
pub mod utils;
