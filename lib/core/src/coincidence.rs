//! Coincidence matrix: how often each pair of values co-occurs on an item.

use crate::pairs::{pairable_count, permutation_pairs};
use crate::table::RatingTable;
use crate::universe::ValueUniverse;
use ahash::AHashMap;
use smallvec::SmallVec;
use tracing::{debug, warn};

/// Square, row-major matrix over a [`ValueUniverse`].
///
/// Entry `(c, k)` sums, over all items, the number of ordered rater pairs
/// rating `(c, k)` divided by the item's pairable count minus one.
#[derive(Debug, Clone, PartialEq)]
pub struct CoincidenceMatrix {
    universe: ValueUniverse,
    cells: Vec<f64>,
    pairable_items: usize,
}

impl CoincidenceMatrix {
    pub fn from_table(table: &RatingTable) -> Self {
        Self::with_universe(table, ValueUniverse::from_table(table))
    }

    /// `universe` must hold every rating in `table`
    pub(crate) fn with_universe(table: &RatingTable, universe: ValueUniverse) -> Self {
        let n = universe.len();
        let mut cells = vec![0.0; n * n];
        let mut pairable_items = 0;
        let mut lone_ratings = 0;

        for item in 0..table.item_count() {
            let indices: SmallVec<[usize; 16]> = table
                .item_ratings(item)
                .filter_map(|r| universe.index_of(r))
                .collect();

            let pairable = pairable_count(indices.len());
            if pairable < 2 {
                if indices.len() == 1 {
                    lone_ratings += 1;
                }
                continue;
            }
            pairable_items += 1;

            let mut pair_counts: AHashMap<(usize, usize), usize> = AHashMap::new();
            for pair in permutation_pairs(indices.as_slice()) {
                *pair_counts.entry(pair).or_insert(0) += 1;
            }

            let divisor = (pairable - 1) as f64;
            for ((c, k), count) in pair_counts {
                cells[c * n + k] += count as f64 / divisor;
            }
        }

        if lone_ratings > 0 {
            warn!(items = lone_ratings, "items with a single rating contribute no pairs");
        }
        debug!(
            values = n,
            items = table.item_count(),
            pairable_items,
            "built coincidence matrix"
        );

        Self {
            universe,
            cells,
            pairable_items,
        }
    }

    #[inline]
    pub fn universe(&self) -> &ValueUniverse {
        &self.universe
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.universe.len()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.dim() + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let n = self.dim();
        &self.cells[row * n..(row + 1) * n]
    }

    /// Number of items that had at least two ratings
    #[inline]
    pub fn pairable_items(&self) -> usize {
        self.pairable_items
    }

    /// Total pairable values `N`
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Row sums, one per value in the universe
    pub fn marginals(&self) -> Vec<f64> {
        (0..self.dim()).map(|r| self.row(r).iter().sum()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Rating;

    fn cell(m: &CoincidenceMatrix, a: f64, b: f64) -> f64 {
        let u = m.universe();
        let i = u.index_of(&Rating::number(a)).unwrap();
        let j = u.index_of(&Rating::number(b)).unwrap();
        m.get(i, j)
    }

    #[test]
    fn test_small_table() {
        let table = RatingTable::from_rows(vec![
            vec![Some(1), Some(2), Some(3), None],
            vec![Some(1), Some(2), Some(3), Some(4)],
            vec![Some(1), Some(2), Some(4), Some(4)],
        ])
        .unwrap();
        let m = CoincidenceMatrix::from_table(&table);

        assert_eq!(m.dim(), 4);
        assert!((cell(&m, 1.0, 1.0) - 3.0).abs() < 1e-12);
        assert!((cell(&m, 2.0, 2.0) - 3.0).abs() < 1e-12);
        assert!((cell(&m, 3.0, 3.0) - 1.0).abs() < 1e-12);
        assert!((cell(&m, 3.0, 4.0) - 1.0).abs() < 1e-12);
        assert!((cell(&m, 4.0, 3.0) - 1.0).abs() < 1e-12);
        assert!((cell(&m, 4.0, 4.0) - 2.0).abs() < 1e-12);
        assert_eq!(cell(&m, 1.0, 2.0), 0.0);
        assert!((m.total() - 11.0).abs() < 1e-12);
        assert_eq!(m.pairable_items(), 4);
    }

    #[test]
    fn test_single_rating_item_contributes_nothing() {
        let table = RatingTable::from_rows(vec![
            vec![Some(1), Some(5)],
            vec![Some(1), None],
        ])
        .unwrap();
        let m = CoincidenceMatrix::from_table(&table);

        assert_eq!(m.dim(), 2);
        assert_eq!(m.pairable_items(), 1);
        assert_eq!(m.row(1), &[0.0, 0.0]);
        assert!((m.total() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_total_counts_every_pairable_rating() {
        let table = RatingTable::from_rows(vec![
            vec![Some("x"), Some("y"), None, Some("z")],
            vec![Some("y"), Some("y"), Some("w"), None],
            vec![None, Some("x"), None, Some("z")],
        ])
        .unwrap();
        let m = CoincidenceMatrix::from_table(&table);

        // items with 2, 3, 1 and 2 ratings; the lone "w" is not pairable
        assert_eq!(m.dim(), 4);
        assert!((m.total() - 7.0).abs() < 1e-12);
        assert_eq!(m.pairable_items(), 3);
    }

    #[test]
    fn test_marginals_match_rated_values() {
        let table = RatingTable::from_rows(vec![
            vec![Some("a"), Some("b")],
            vec![Some("a"), Some("a")],
        ])
        .unwrap();
        let m = CoincidenceMatrix::from_table(&table);

        // every pairable rating lands exactly once in the marginals
        assert_eq!(m.marginals(), vec![3.0, 1.0]);
    }
}
