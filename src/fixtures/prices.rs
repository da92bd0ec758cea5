//! Price Fixtures

use jiff::civil::Date;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;

use crate::fixtures::FixtureError;

/// Wrapper for price records in YAML
#[derive(Debug, Deserialize)]
pub struct PricesFixture {
    /// Price records in recording order
    pub prices: Vec<PriceFixture>,
}

/// Price Fixture
#[derive(Debug, Deserialize)]
pub struct PriceFixture {
    /// Product fixture key
    pub product: String,

    /// Store fixture key
    pub store: String,

    /// Price (e.g., "1.29 EUR")
    pub price: String,

    /// Date the price was recorded
    pub recorded: Date,

    /// Whether the price is a promotion
    #[serde(default)]
    pub promotion: bool,

    /// Last day of the promotion
    #[serde(default)]
    pub promotion_ends: Option<Date>,
}

/// Parse price string (e.g., "1.29 EUR") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match currency_code {
        "EUR" => EUR,
        "GBP" => GBP,
        "USD" => USD,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
