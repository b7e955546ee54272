pub mod hash;

pub type KeyType = i64;
pub type ValueType = i64;
