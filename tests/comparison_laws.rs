//! Laws every store comparison must satisfy.
//!
//! Catalogs are generated from a fixed seed so failures are reproducible.

use jiff::civil::date;
use rusty_money::{Money, iso::EUR};
use slotmap::SlotMap;
use testresult::TestResult;

use shuklist::{
    catalog::CatalogIndex,
    comparison::{Comparison, compare_list},
    lists::ShoppingList,
    prices::PriceRecord,
    products::{Product, ProductKey},
    stores::{Store, StoreKey},
};

/// Linear congruential generator, good enough for shuffling test data.
struct Lcg(u64);

impl Lcg {
    fn below(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        (self.0 >> 33) % bound
    }
}

struct Generated {
    stores: Vec<StoreKey>,
    prices: Vec<PriceRecord<'static>>,
    list: ShoppingList,
}

fn generate(seed: u64) -> Result<Generated, Box<dyn std::error::Error>> {
    let mut rng = Lcg(seed);

    let mut products = SlotMap::<ProductKey, Product>::with_key();
    let mut store_meta = SlotMap::<StoreKey, Store>::with_key();

    let product_keys: Vec<ProductKey> = (0..1 + rng.below(6))
        .map(|i| products.insert(Product::new(format!("Product {i}"), "Pantry", "1pc")))
        .collect();

    let stores: Vec<StoreKey> = (0..1 + rng.below(5))
        .map(|i| store_meta.insert(Store::new(format!("Store {i}"), "Flumeri")))
        .collect();

    let mut prices = Vec::new();

    for &product in &product_keys {
        for &store in &stores {
            // Roughly one in four pairs is not carried
            if rng.below(4) == 0 {
                continue;
            }

            let minor = i64::try_from(rng.below(500))?;
            let day = i8::try_from(1 + rng.below(28))?;

            prices.push(PriceRecord::new(
                product,
                store,
                Money::from_minor(minor, EUR),
                date(2025, 2, day),
            )?);
        }
    }

    let mut list = ShoppingList::new();

    for &product in &product_keys {
        if rng.below(3) != 0 {
            list.add(product, u32::try_from(1 + rng.below(5))?)?;
        }
    }

    Ok(Generated {
        stores,
        prices,
        list,
    })
}

fn compare(generated: &Generated) -> Result<Comparison<'static>, Box<dyn std::error::Error>> {
    let index = CatalogIndex::build(&generated.prices, &generated.stores, EUR)?;

    Ok(compare_list(&generated.list, &index, &generated.stores)?)
}

const SEEDS: std::ops::Range<u64> = 0..64;

#[test]
fn every_store_appears_exactly_once() -> TestResult {
    for seed in SEEDS {
        let generated = generate(seed)?;
        let comparison = compare(&generated)?;

        if generated.list.is_empty() {
            assert!(comparison.is_empty(), "seed {seed}");
            continue;
        }

        let mut seen: Vec<StoreKey> = comparison.iter().map(|result| result.store()).collect();
        let mut expected = generated.stores.clone();

        seen.sort();
        expected.sort();

        assert_eq!(seen, expected, "seed {seed}");
    }

    Ok(())
}

#[test]
fn available_and_missing_items_cover_the_list() -> TestResult {
    for seed in SEEDS {
        let generated = generate(seed)?;
        let comparison = compare(&generated)?;

        for result in comparison.iter() {
            assert_eq!(
                result.available_items() + result.missing_items(),
                generated.list.len(),
                "seed {seed}"
            );
        }
    }

    Ok(())
}

#[test]
fn totals_sum_current_prices_of_carried_items() -> TestResult {
    for seed in SEEDS {
        let generated = generate(seed)?;
        let index = CatalogIndex::build(&generated.prices, &generated.stores, EUR)?;
        let comparison = compare_list(&generated.list, &index, &generated.stores)?;

        for result in comparison.iter() {
            let expected: i64 = generated
                .list
                .iter()
                .filter_map(|(_, item)| {
                    index
                        .current_price(item.product(), result.store())
                        .map(|record| record.price().to_minor_units() * i64::from(item.quantity()))
                })
                .sum();

            assert_eq!(result.total().to_minor_units(), expected, "seed {seed}");
        }
    }

    Ok(())
}

#[test]
fn complete_stores_lead_in_ascending_order() -> TestResult {
    for seed in SEEDS {
        let comparison = compare(&generate(seed)?)?;

        let complete_prefix = comparison
            .iter()
            .take_while(|result| result.is_complete())
            .count();

        assert_eq!(
            complete_prefix,
            comparison.complete().count(),
            "incomplete store ranked above a complete one, seed {seed}"
        );

        let totals: Vec<i64> = comparison
            .complete()
            .map(|result| result.total().to_minor_units())
            .collect();

        assert!(totals.is_sorted(), "seed {seed}: {totals:?}");
    }

    Ok(())
}

#[test]
fn savings_only_for_complete_stores_and_never_negative() -> TestResult {
    for seed in SEEDS {
        let comparison = compare(&generate(seed)?)?;

        let best = comparison.best().map(|result| result.total().to_minor_units());

        for result in comparison.iter() {
            if !result.is_complete() {
                assert!(result.savings().is_none(), "seed {seed}");
                continue;
            }

            let savings = result.savings().ok_or("complete store without savings")?;
            let best = best.ok_or("complete store without a best store")?;

            assert_eq!(
                savings.to_minor_units(),
                result.total().to_minor_units() - best,
                "seed {seed}"
            );
            assert!(savings.to_minor_units() >= 0, "seed {seed}");
        }
    }

    Ok(())
}

#[test]
fn comparing_twice_gives_the_same_result() -> TestResult {
    for seed in SEEDS {
        let generated = generate(seed)?;

        assert_eq!(compare(&generated)?, compare(&generated)?, "seed {seed}");
    }

    Ok(())
}

#[test]
fn quantity_update_keeps_the_original_list() -> TestResult {
    for seed in SEEDS {
        let generated = generate(seed)?;
        let original = generated.list.clone();

        for (key, item) in original.iter() {
            let updated = generated.list.update_quantity(key, item.quantity() + 1);

            assert_eq!(generated.list, original, "seed {seed}");
            assert_eq!(updated.get(key)?.quantity(), item.quantity() + 1, "seed {seed}");
            assert_eq!(updated.len(), original.len(), "seed {seed}");

            let unchanged = generated.list.update_quantity(key, 0);

            assert_eq!(unchanged, original, "seed {seed}");
        }
    }

    Ok(())
}

#[test]
fn updated_list_compares_like_a_list_built_with_that_quantity() -> TestResult {
    for seed in SEEDS {
        let generated = generate(seed)?;
        let index = CatalogIndex::build(&generated.prices, &generated.stores, EUR)?;
        let before = compare_list(&generated.list, &index, &generated.stores)?;

        for (key, item) in generated.list.iter() {
            let quantity = item.quantity() + 2;
            let updated = generated.list.update_quantity(key, quantity);

            let mut direct = ShoppingList::new();

            for (other, other_item) in generated.list.iter() {
                let wanted = if other == key {
                    quantity
                } else {
                    other_item.quantity()
                };

                direct.add(other_item.product(), wanted)?;
            }

            assert_eq!(
                compare_list(&updated, &index, &generated.stores)?,
                compare_list(&direct, &index, &generated.stores)?,
                "seed {seed}"
            );

            let ignored = generated.list.update_quantity(key, 0);

            assert_eq!(
                compare_list(&ignored, &index, &generated.stores)?,
                before,
                "seed {seed}"
            );
        }
    }

    Ok(())
}
