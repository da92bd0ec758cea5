//! Comparison table

use std::io;

use slotmap::SlotMap;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    comparison::{Comparison, StoreComparison},
    stores::{Store, StoreKey},
};

/// Errors that can occur when printing a comparison.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A result refers to a store with no metadata.
    #[error("Missing store")]
    MissingStore(StoreKey),

    /// IO error
    #[error("IO error")]
    IO,
}

impl Comparison<'_> {
    /// Prints the comparison as a table followed by a one-line summary.
    ///
    /// # Errors
    ///
    /// Returns an error if a store is unknown or the output cannot be written.
    pub fn write_to(
        &self,
        mut out: impl io::Write,
        store_meta: &SlotMap<StoreKey, Store>,
    ) -> Result<(), RenderError> {
        if self.is_empty() {
            return writeln!(out, "Nothing to compare: the list has no items.")
                .map_err(|_err| RenderError::IO);
        }

        let mut builder = Builder::default();

        builder.push_record(["", "Store", "Town", "Items", "Total", "vs. Best"]);

        for (idx, result) in self.iter().enumerate() {
            let store = store_meta
                .get(result.store())
                .ok_or(RenderError::MissingStore(result.store()))?;

            builder.push_record(row(idx, result, store, self.list_len()));
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(4..6), Alignment::right());

        for (idx, result) in self.iter().enumerate() {
            let color = if self.best().is_some_and(|best| best.store() == result.store()) {
                Color::FG_GREEN
            } else if result.is_complete() {
                continue;
            } else {
                color_dark_grey()
            };

            // header is row 0
            for col in 0..6 {
                table.modify((idx + 1, col), color.clone());
            }
        }

        writeln!(out, "\n{table}").map_err(|_err| RenderError::IO)?;

        self.write_summary(&mut out, store_meta)
    }

    fn write_summary(
        &self,
        out: &mut impl io::Write,
        store_meta: &SlotMap<StoreKey, Store>,
    ) -> Result<(), RenderError> {
        let (Some(best), Some(savings)) = (self.best(), self.potential_savings()) else {
            return writeln!(out, " No store has all items.").map_err(|_err| RenderError::IO);
        };

        let name = store_meta
            .get(best.store())
            .map_or("<unknown>", |store| store.name.as_str());

        writeln!(
            out,
            " Shopping at {name} saves you {savings} compared to the most expensive option."
        )
        .map_err(|_err| RenderError::IO)
    }
}

/// ANSI dark grey (stores missing items).
fn color_dark_grey() -> Color {
    Color::new("\x1b[90m", "\x1b[0m")
}

fn row(idx: usize, result: &StoreComparison<'_>, store: &Store, list_len: usize) -> [String; 6] {
    let items = if result.is_complete() {
        format!("{}/{list_len}", result.available_items())
    } else {
        format!(
            "{}/{list_len} ({} missing)",
            result.available_items(),
            result.missing_items()
        )
    };

    let difference = match result.savings() {
        Some(savings) if savings.is_zero() => "best".to_string(),
        Some(savings) => format!("+{savings}"),
        None => String::new(),
    };

    [
        format!("#{:<3}", idx + 1),
        store.name.clone(),
        store.town.clone(),
        items,
        format!("{}", result.total()),
        difference,
    ]
}
