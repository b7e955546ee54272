use crate::common::{KeyType, ValueType};
#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
pub trait HashTable {
    fn put(&mut self, key: KeyType, value: ValueType);

    fn get(&self, key: KeyType, values: &mut [ValueType]) -> usize;

    fn erase(&mut self, key: KeyType) -> usize;

    fn pair_count(&self) -> usize;
}
