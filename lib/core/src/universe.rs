use crate::table::{Rating, RatingTable};
use ahash::AHashMap;

/// Distinct ratings of a table in first-appearance order.
///
/// Both the coincidence and the difference matrix are indexed through the
/// same universe, so row `i` of one lines up with row `i` of the other.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueUniverse {
    values: Vec<Rating>,
    index: AHashMap<Rating, usize>,
}

impl ValueUniverse {
    pub fn from_table(table: &RatingTable) -> Self {
        Self::from_ratings(table.ratings())
    }

    pub fn from_ratings<'a>(ratings: impl IntoIterator<Item = &'a Rating>) -> Self {
        let mut values = Vec::new();
        let mut index = AHashMap::new();
        for rating in ratings {
            if !index.contains_key(rating) {
                index.insert(rating.clone(), values.len());
                values.push(rating.clone());
            }
        }
        Self { values, index }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[Rating] {
        &self.values
    }

    #[inline]
    pub fn index_of(&self, rating: &Rating) -> Option<usize> {
        self.index.get(rating).copied()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Rating> {
        self.values.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_appearance_order() {
        let table = RatingTable::from_rows(vec![
            vec![Some(3), Some(1), None],
            vec![Some(1), Some(2), Some(3)],
        ])
        .unwrap();
        let universe = ValueUniverse::from_table(&table);

        let values: Vec<String> = universe.values().iter().map(ToString::to_string).collect();
        assert_eq!(values, vec!["3", "1", "2"]);
        assert_eq!(universe.index_of(&Rating::number(2.0)), Some(2));
        assert_eq!(universe.index_of(&Rating::number(9.0)), None);
    }

    #[test]
    fn test_numbers_and_labels_are_distinct() {
        let ratings = [Rating::number(1.0), Rating::label("1"), Rating::number(1.0)];
        let universe = ValueUniverse::from_ratings(&ratings);
        assert_eq!(universe.len(), 2);
    }
}
