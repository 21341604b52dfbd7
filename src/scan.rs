//! Linear pair scan over a slice of values.

/// Find the first index pair `(i, j)` with `i < j` whose values are equal.
///
/// Pairs are ordered by `i`, then `j`. Runs in quadratic time and constant
/// space; intended for short inputs.
///
/// ```rust
/// use tally::scan::first_equal_pair;
///
/// assert_eq!(first_equal_pair(&[3, 5, 5, 11, 90, 10000, 67, 98]), Some((1, 2)));
/// assert_eq!(first_equal_pair(&[1, 2, 3]), None);
/// ```
pub fn first_equal_pair<T: PartialEq>(values: &[T]) -> Option<(usize, usize)> {
    values.iter().enumerate().find_map(|(i, left)| {
        values[i + 1..]
            .iter()
            .position(|right| right == left)
            .map(|offset| (i, i + 1 + offset))
    })
}
