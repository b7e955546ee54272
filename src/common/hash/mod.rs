use crate::common::KeyType;

/// Identity hash. The table reduces the returned value modulo its bucket
/// capacity, so for non-negative keys the bucket index is `key % capacity`.
pub fn hash(key: &KeyType) -> u64 {
    *key as u64
}
