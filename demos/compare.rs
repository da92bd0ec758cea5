//! Comparison Example
//!
//! Compares a shopping list from a fixture set across every store and prints the
//! ranked table.
//!
//! Use `-f` to load a fixture set by name
//! Use `-l` to pick the shopping list
//! Use `-t` (repeatable) to only compare stores in the given towns
//!
//! Set `RUST_LOG=shuklist=debug` to see how the index and comparison were built.

use std::{io, time::Instant};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use shuklist::{fixtures::Fixture, service::ComparisonService, utils::CompareArgs};

/// Comparison Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = CompareArgs::parse();

    let mut fixture = Fixture::from_set(&args.fixture)?;

    if !args.town.is_empty() {
        fixture = fixture.in_towns(args.town);
    }

    let service = ComparisonService::new(&fixture);

    let start = Instant::now();
    let comparison = service.compare(&args.list)?;
    let elapsed = start.elapsed().as_secs_f32();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    comparison.write_to(&mut handle, fixture.store_meta_map())?;

    println!("\nCompared in {elapsed}s");

    Ok(())
}
