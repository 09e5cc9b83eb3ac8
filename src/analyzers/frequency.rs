use std::collections::BTreeMap;

/// Most frequent value. Ties go to the smallest value, matching the
/// sorted-modes convention of dataframe libraries.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        let is_better = best
            .as_ref()
            .map_or(true, |(_, best_count)| count > *best_count);
        if is_better {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value)
}

/// Occurrences per distinct value, most frequent first, ties by value.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut counts: Vec<(T, usize)> = counts.into_iter().collect();
    // stable sort keeps the BTreeMap order within equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode() {
        assert_eq!(mode(["A", "A", "B"]), Some("A"));
        assert_eq!(mode([3, 1, 3, 2, 1, 3]), Some(3));
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_mode_tie_goes_to_smallest() {
        assert_eq!(mode(["b", "a", "b", "a"]), Some("a"));
        assert_eq!(mode([17, 8, 17, 8, 9]), Some(8));
    }

    #[test]
    fn test_value_counts_order() {
        let counts = value_counts(["Subscriber", "Customer", "Subscriber", "Dependent", "Customer", "Subscriber"]);
        assert_eq!(
            counts,
            vec![("Subscriber", 3), ("Customer", 2), ("Dependent", 1)]
        );

        let tied = value_counts(["Male", "Female"]);
        assert_eq!(tied, vec![("Female", 1), ("Male", 1)]);
    }
}
