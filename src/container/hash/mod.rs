use crate::common::{KeyType, ValueType};
use crate::container::hash::hash_table::HashTable;
use crate::container::hash::LookupResult::{Complete, Miss, Truncated};

pub mod bucket_list;
pub mod chained_hash_table;
pub mod hash_table;

pub enum LookupResult {
    Miss,

    Complete(usize),

    Truncated(usize),
}

impl LookupResult {
    pub fn of(total_matches: usize, buffer_len: usize) -> LookupResult {
        if total_matches == 0 {
            Miss
        } else if total_matches <= buffer_len {
            Complete(total_matches)
        } else {
            Truncated(total_matches)
        }
    }

    pub fn missed(&self) -> bool {
        matches!(self, LookupResult::Miss)
    }

    pub fn complete(&self) -> bool {
        matches!(self, LookupResult::Complete(_))
    }

    pub fn truncated(&self) -> bool {
        matches!(self, LookupResult::Truncated(_))
    }

    pub fn total(&self) -> usize {
        match self {
            Miss => 0,
            Complete(total) => *total,
            Truncated(total) => *total,
        }
    }
}

/// Fetches every value stored under `key`:
/// 1. probe with a single-slot buffer
/// 2. if the reported total exceeds the buffer, probe once more with a
///    buffer grown to that total
pub fn get_all(table: &dyn HashTable, key: KeyType) -> Vec<ValueType> {
    let mut values = vec![0 as ValueType; 1];
    let lookup = LookupResult::of(table.get(key, &mut values), values.len());
    if lookup.missed() {
        return vec![];
    }

    if lookup.truncated() {
        values = vec![0 as ValueType; lookup.total()];
        table.get(key, &mut values);
    }

    values.truncate(lookup.total());
    values
}

#[cfg(test)]
mod tests {
    use crate::common::ValueType;
    use crate::container::hash::hash_table::MockHashTable;
    use crate::container::hash::{get_all, LookupResult};

    #[test]
    fn should_classify_zero_matches_as_miss() {
        let lookup = LookupResult::of(0, 4);
        assert!(lookup.missed());
        assert_eq!(lookup.total(), 0);
    }

    #[test]
    fn should_classify_fitting_matches_as_complete() {
        let lookup = LookupResult::of(3, 4);
        assert!(lookup.complete());
        assert_eq!(lookup.total(), 3);
    }

    #[test]
    fn should_classify_overflowing_matches_as_truncated() {
        let lookup = LookupResult::of(5, 4);
        assert!(lookup.truncated());
        assert_eq!(lookup.total(), 5);
    }

    #[test]
    fn should_fetch_all_values_with_single_probe_when_buffer_fits() {
        // given
        let mut table_mock = MockHashTable::new();
        table_mock
            .expect_get()
            .times(1)
            .returning(|_, values| {
                values[0] = 42;
                1
            });

        // when
        let values = get_all(&table_mock, 7);

        // then
        assert_eq!(values, vec![42]);
    }

    #[test]
    fn should_probe_again_with_grown_buffer_when_truncated() {
        // given
        let mut table_mock = MockHashTable::new();
        table_mock
            .expect_get()
            .times(2)
            .returning(|_, values| {
                for i in 0..values.len() {
                    values[i] = (i + 1) as ValueType;
                }
                3
            });

        // when
        let values = get_all(&table_mock, 7);

        // then
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn should_fetch_nothing_when_key_misses() {
        // given
        let mut table_mock = MockHashTable::new();
        table_mock
            .expect_get()
            .times(1)
            .returning(|_, _| 0);

        // when
        let values = get_all(&table_mock, 7);

        // then
        assert!(values.is_empty());
    }
}
