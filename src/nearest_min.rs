//! Module for measuring the gap between repeated minimum values

use crate::error::{ExerciseError, Result};

/// Position of one occurrence of the minimum value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinOccurrence<T> {
    pub value: T,
    pub position: usize,
}

/// Coarse classification of a sequence with respect to its minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimumPattern {
    /// Fewer than two elements
    TooShort,
    /// The minimum occurs once
    SingleMinimum,
    /// The minimum occurs `count` times, `count >= 2`
    Repeated { count: usize },
}

/// Returns the smallest index gap between two occurrences of the minimum.
///
/// Occurrence positions are visited in increasing order, so the smallest
/// pairwise gap is always between two consecutive occurrences and a single
/// scan that remembers the previous occurrence is enough.
///
/// Returns `Ok(None)` when there are fewer than two elements or the minimum
/// occurs only once.
///
/// # Errors
/// `InvalidInput` when `values` is absent.
///
/// # Examples
/// ```
/// use scan_exercises::nearest_min::nearest_minimum_distance;
///
/// assert_eq!(nearest_minimum_distance(Some(&[1, 2, 3, 1, 4, 5, 2][..])).unwrap(), Some(3));
/// assert_eq!(nearest_minimum_distance(Some(&[7][..])).unwrap(), None);
/// ```
pub fn nearest_minimum_distance<T: Ord>(values: Option<&[T]>) -> Result<Option<usize>> {
    let values = values.ok_or_else(|| ExerciseError::invalid("values cannot be absent"))?;
    let _span = tracing::debug_span!("nearest_minimum_distance", len = values.len()).entered();
    if values.len() < 2 {
        return Ok(None);
    }
    let Some(min) = values.iter().min() else {
        return Ok(None);
    };

    let mut previous: Option<usize> = None;
    let mut nearest: Option<usize> = None;
    for (position, value) in values.iter().enumerate() {
        if value != min {
            continue;
        }
        if let Some(previous) = previous {
            let gap = position - previous;
            nearest = Some(nearest.map_or(gap, |n| n.min(gap)));
        }
        previous = Some(position);
    }

    tracing::debug!(len = values.len(), ?nearest, "nearest minimum distance");
    Ok(nearest)
}

/// Lists every position holding the minimum value, in increasing order.
pub fn minimum_occurrences<T: Ord + Copy>(values: &[T]) -> Vec<MinOccurrence<T>> {
    let Some(&min) = values.iter().min() else {
        return Vec::new();
    };
    values
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value == min)
        .map(|(position, &value)| MinOccurrence { value, position })
        .collect()
}

/// Classifies `values` by how often its minimum repeats.
pub fn minimum_pattern<T: Ord>(values: &[T]) -> MinimumPattern {
    let Some(min) = values.iter().min().filter(|_| values.len() >= 2) else {
        return MinimumPattern::TooShort;
    };
    match values.iter().filter(|&value| value == min).count() {
        count if count >= 2 => MinimumPattern::Repeated { count },
        _ => MinimumPattern::SingleMinimum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn distance(values: &[i64]) -> Option<usize> {
        nearest_minimum_distance(Some(values)).unwrap()
    }

    /// Pairwise reference used to check the single scan.
    fn pairwise(values: &[i64]) -> Option<usize> {
        let positions: Vec<usize> = minimum_occurrences(values).iter().map(|o| o.position).collect();
        let mut best = None;
        for (i, &a) in positions.iter().enumerate() {
            for &b in &positions[i + 1..] {
                let gap = b - a;
                best = Some(best.map_or(gap, |n: usize| n.min(gap)));
            }
        }
        best
    }

    #[test]
    fn worked_examples() {
        assert_eq!(distance(&[1, 2, 3, 1, 4, 5, 2]), Some(3));
        assert_eq!(distance(&[5, 1, 1, 3, 4]), Some(1));
        assert_eq!(distance(&[1, 5, 3, 4, 1]), Some(4));
        assert_eq!(distance(&[2, 2, 2, 2, 2]), Some(1));
    }

    #[test]
    fn too_few_elements_or_occurrences() {
        assert_eq!(distance(&[]), None);
        assert_eq!(distance(&[1]), None);
        assert_eq!(distance(&[3, 1, 2]), None);
    }

    #[test]
    fn absent_input_is_rejected() {
        assert!(matches!(
            nearest_minimum_distance::<i64>(None),
            Err(ExerciseError::InvalidInput(_))
        ));
    }

    #[test]
    fn negative_values() {
        assert_eq!(distance(&[-3, 0, -3, 9, -3]), Some(2));
    }

    #[test]
    fn lists_minimum_occurrences() {
        let occurrences = minimum_occurrences(&[4, 1, 7, 1]);
        assert_eq!(
            occurrences,
            vec![
                MinOccurrence { value: 1, position: 1 },
                MinOccurrence { value: 1, position: 3 },
            ]
        );
        assert!(minimum_occurrences::<i32>(&[]).is_empty());
    }

    #[test]
    fn classifies_patterns() {
        assert_eq!(minimum_pattern(&[1]), MinimumPattern::TooShort);
        assert_eq!(minimum_pattern(&[2, 1, 3]), MinimumPattern::SingleMinimum);
        assert_eq!(minimum_pattern(&[1, 2, 1, 1]), MinimumPattern::Repeated { count: 3 });
    }

    proptest! {
        /// Property: the single scan agrees with the pairwise definition
        #[test]
        fn prop_matches_pairwise(values in prop::collection::vec(-5i64..5, 0..50)) {
            prop_assert_eq!(distance(&values), pairwise(&values));
        }

        /// Property: reversing the input keeps the answer
        #[test]
        fn prop_reversal_keeps_distance(values in prop::collection::vec(-5i64..5, 0..50)) {
            let mut reversed = values.clone();
            reversed.reverse();
            prop_assert_eq!(distance(&values), distance(&reversed));
        }

        /// Property: any reordering keeps whether an answer exists, and the
        /// answer stays the pairwise one for the new positions
        #[test]
        fn prop_reordering_keeps_outcome(
            (values, shuffled) in prop::collection::vec(-5i64..5, 0..50)
                .prop_flat_map(|values| (Just(values.clone()), Just(values).prop_shuffle()))
        ) {
            prop_assert_eq!(distance(&values).is_some(), distance(&shuffled).is_some());
            prop_assert_eq!(distance(&shuffled), pairwise(&shuffled));
            prop_assert_eq!(minimum_pattern(&values), minimum_pattern(&shuffled));
        }
    }
}
