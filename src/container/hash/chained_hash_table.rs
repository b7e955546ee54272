use std::io;
use std::io::{Error, ErrorKind};

use crate::common::hash::hash;
use crate::common::{KeyType, ValueType};
use crate::container::hash::bucket_list::BucketList;
use crate::container::hash::hash_table::HashTable;

/// Fixed-capacity hash table resolving collisions by chaining. Keys are not
/// unique: all entries stored under a key stay reachable, in insertion order.
/// The bucket array never grows; chain length is unbounded by contract.
pub struct ChainedHashTable {
    buckets: Vec<Option<BucketList>>,
    pairs: usize,
    hash_fn: fn(&KeyType) -> u64,
}

impl ChainedHashTable {
    pub fn new(capacity: usize, hash_fn: fn(&KeyType) -> u64) -> io::Result<ChainedHashTable> {
        if capacity == 0 {
            return Err(Error::new(ErrorKind::Other, "Invalid bucket capacity."));
        }

        let mut buckets = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            buckets.push(None);
        }

        Ok(ChainedHashTable {
            buckets,
            pairs: 0,
            hash_fn,
        })
    }

    pub fn new_default(capacity: usize) -> io::Result<ChainedHashTable> {
        ChainedHashTable::new(capacity, hash)
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Read-only view of every bucket slot in index order, absent buckets
    /// included. This is the surface the diagnostic dump consumes.
    pub fn buckets(&self) -> impl Iterator<Item = Option<&BucketList>> {
        self.buckets.iter().map(|slot| slot.as_ref())
    }

    /// Consumes the table and releases every bucket list and entry it owns.
    /// A second destroy, or any operation afterwards, cannot compile.
    pub fn destroy(self) {}

    fn bucket_of(&self, key: &KeyType) -> usize {
        ((self.hash_fn)(key) % self.buckets.len() as u64) as usize
    }
}

impl HashTable for ChainedHashTable {
    /// chained hash table put:
    /// 1. bucket_index = hash(key) % capacity
    /// 2. if the bucket slot is absent, give it an empty list
    /// 3. append (key, value) at the list tail; duplicate keys coexist
    fn put(&mut self, key: KeyType, value: ValueType) {
        let index = self.bucket_of(&key);
        let list = self.buckets[index].get_or_insert_with(BucketList::new);
        list.insert_tail(key, value);
        self.pairs += 1;
    }

    fn get(&self, key: KeyType, values: &mut [ValueType]) -> usize {
        match &self.buckets[self.bucket_of(&key)] {
            Some(list) => list.get_matching(key, values),
            None => 0,
        }
    }

    /// chained hash table erase:
    /// 1. bucket_index = hash(key) % capacity
    /// 2. delete every matching entry from the bucket list
    /// 3. release the list when its last entry went away, so an absent slot
    ///    always means zero entries
    fn erase(&mut self, key: KeyType) -> usize {
        let index = self.bucket_of(&key);
        match self.buckets[index].as_mut() {
            Some(list) => {
                let removed = list.delete_matching(key);
                if list.size() == 0 {
                    self.buckets[index] = None;
                }
                self.pairs -= removed;
                removed
            }
            None => 0,
        }
    }

    fn pair_count(&self) -> usize {
        self.pairs
    }
}
