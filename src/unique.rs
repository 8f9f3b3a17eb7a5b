//! Module for frequency counting and first-unique selection

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{ExerciseError, Result};

/// Frequency record for one distinct item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFrequency<'a, T> {
    pub item: &'a T,
    pub frequency: usize,
    /// Index of the first occurrence in the input, absent entries included
    pub first_index: usize,
}

fn count<T: Eq + Hash>(items: &[Option<T>]) -> HashMap<&T, usize> {
    let mut counts = HashMap::with_capacity(items.len());
    for item in items.iter().flatten() {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Returns the first item, in input order, that occurs exactly once.
///
/// Absent entries are neither counted nor eligible. Returns `Ok(None)`
/// when every item repeats or the input is empty.
///
/// # Errors
/// `InvalidInput` when `items` is absent.
///
/// # Examples
/// ```
/// use scan_exercises::unique::first_unique;
///
/// let products = [Some("Apple"), Some("Computer"), Some("Apple"), Some("Bag")];
/// assert_eq!(first_unique(Some(products.as_slice())).unwrap(), Some(&"Computer"));
/// ```
pub fn first_unique<T: Eq + Hash>(items: Option<&[Option<T>]>) -> Result<Option<&T>> {
    let items = items.ok_or_else(|| ExerciseError::invalid("items cannot be absent"))?;
    let _span = tracing::debug_span!("first_unique", items = items.len()).entered();

    let counts = count(items);
    let found = items.iter().flatten().find(|item| counts.get(item) == Some(&1));

    tracing::debug!(distinct = counts.len(), found = found.is_some(), "scanned items");
    Ok(found)
}

/// Builds one frequency record per distinct item, in first-occurrence order.
pub fn frequency_table<T: Eq + Hash>(items: &[Option<T>]) -> Vec<ItemFrequency<'_, T>> {
    let mut slots: HashMap<&T, usize> = HashMap::new();
    let mut table: Vec<ItemFrequency<'_, T>> = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let Some(item) = item else { continue };
        match slots.get(item) {
            Some(&slot) => table[slot].frequency += 1,
            None => {
                slots.insert(item, table.len());
                table.push(ItemFrequency {
                    item,
                    frequency: 1,
                    first_index: index,
                });
            }
        }
    }

    table
}

/// Counts the distinct items that occur exactly once
pub fn count_unique<T: Eq + Hash>(items: &[Option<T>]) -> usize {
    count(items).values().filter(|&&n| n == 1).count()
}
