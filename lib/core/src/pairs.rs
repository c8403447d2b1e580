//! Pairable values and ordered rater pairs within one item.

/// How many ratings on an item can be paired.
///
/// A lone rating has nothing to pair with, so anything below two is zero.
#[inline]
pub fn pairable_count(observations: usize) -> usize {
    if observations > 1 {
        observations
    } else {
        0
    }
}

/// Every ordered pair `(values[i], values[j])` with `i != j`.
///
/// Pairs are drawn per rater position, not per distinct value, so repeated
/// values each contribute their own pairs. Yields `k * (k - 1)` pairs.
pub fn permutation_pairs<T: Copy>(values: &[T]) -> impl Iterator<Item = (T, T)> + '_ {
    values.iter().enumerate().flat_map(move |(i, &a)| {
        values
            .iter()
            .enumerate()
            .filter(move |&(j, _)| j != i)
            .map(move |(_, &b)| (a, b))
    })
}
