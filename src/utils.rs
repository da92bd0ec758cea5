//! Utils

use clap::Parser;

/// Arguments for the comparison demo
#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// Fixture set to load products, stores, prices and lists from
    #[clap(short, long, default_value = "weekly")]
    pub fixture: String,

    /// Shopping list to compare
    #[clap(short, long, default_value = "weekly")]
    pub list: String,

    /// Only compare stores in these towns (repeatable)
    #[clap(short, long)]
    pub town: Vec<String>,
}
