//! Prices

use jiff::{ToSpan, civil::Date};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{products::ProductKey, stores::StoreKey};

/// Errors that can occur while constructing a price record.
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// The price amount is below zero.
    #[error("price must not be negative, got {0} minor units")]
    Negative(i64),
}

/// A price observed for a product at a store on a given date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRecord<'a> {
    product: ProductKey,
    store: StoreKey,
    price: Money<'a, Currency>,
    promotion: bool,
    promotion_ends: Option<Date>,
    recorded: Date,
}

impl<'a> PriceRecord<'a> {
    /// Creates a new regular (non-promotional) price record.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the price is below zero.
    pub fn new(
        product: ProductKey,
        store: StoreKey,
        price: Money<'a, Currency>,
        recorded: Date,
    ) -> Result<Self, PriceError> {
        if price.is_negative() {
            return Err(PriceError::Negative(price.to_minor_units()));
        }

        Ok(Self {
            product,
            store,
            price,
            promotion: false,
            promotion_ends: None,
            recorded,
        })
    }

    /// Marks the record as a promotional price, optionally ending on the given date.
    #[must_use]
    pub fn with_promotion(mut self, ends: Option<Date>) -> Self {
        self.promotion = true;
        self.promotion_ends = ends;
        self
    }

    /// Returns the product the price is for
    pub fn product(&self) -> ProductKey {
        self.product
    }

    /// Returns the store the price was recorded at
    pub fn store(&self) -> StoreKey {
        self.store
    }

    /// Returns the price
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Returns true if the price was recorded as a promotion.
    pub fn is_promotion(&self) -> bool {
        self.promotion
    }

    /// Returns the last day of the promotion, if one was recorded.
    pub fn promotion_ends(&self) -> Option<Date> {
        self.promotion_ends
    }

    /// Returns the date the price was recorded.
    pub fn recorded(&self) -> Date {
        self.recorded
    }

    /// Returns true if this is a promotion that has not ended on the given day.
    ///
    /// Promotions without an end date are considered running.
    pub fn is_active_promotion(&self, on: Date) -> bool {
        self.promotion && self.promotion_ends.is_none_or(|ends| ends >= on)
    }

    /// Returns true if this is an active promotion ending within `days` of the given day.
    pub fn promotion_ends_within(&self, on: Date, days: i32) -> bool {
        let Some(ends) = self.promotion_ends else {
            return false;
        };

        let Ok(horizon) = on.checked_add(days.days()) else {
            return self.is_active_promotion(on);
        };

        self.is_active_promotion(on) && ends <= horizon
    }
}
