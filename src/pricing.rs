//! Pricing
//!
//! Totals are accumulated in integer minor units and only turned back into
//! [`Money`] at the boundary, so long lists never drift through rounding.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors that can occur while calculating totals.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A line or running total does not fit in 64-bit minor units.
    #[error("total overflowed while pricing {0} minor units x {1}")]
    Overflow(i64, u32),
}

/// Calculates the cost of `quantity` units at `price`, in minor units.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the result does not fit in an `i64`.
pub fn line_total(price: &Money<'_, Currency>, quantity: u32) -> Result<i64, PricingError> {
    let minor = price.to_minor_units();

    minor
        .checked_mul(i64::from(quantity))
        .ok_or(PricingError::Overflow(minor, quantity))
}

/// A running total in minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinorTotal(i64);

impl MinorTotal {
    /// Adds `quantity` units at `price` to the total.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the total no longer fits in an `i64`.
    pub fn add_line(
        &mut self,
        price: &Money<'_, Currency>,
        quantity: u32,
    ) -> Result<(), PricingError> {
        let line = line_total(price, quantity)?;

        self.0 = self
            .0
            .checked_add(line)
            .ok_or(PricingError::Overflow(price.to_minor_units(), quantity))?;

        Ok(())
    }

    /// Returns the total in minor units.
    pub fn minor_units(self) -> i64 {
        self.0
    }

    /// Converts the total into money of the given currency.
    pub fn to_money<'a>(self, currency: &'a Currency) -> Money<'a, Currency> {
        Money::from_minor(self.0, currency)
    }
}
