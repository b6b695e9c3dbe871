use std::borrow::Borrow;
use std::hash::Hash;

use ahash::RandomState;
use smallvec::SmallVec;
use thiserror::Error;

// Fixed seeds so bucket assignment is reproducible across runs and
// processes. The table's contract only needs determinism, not a specific
// hash algorithm.
const SEEDS: (u64, u64, u64, u64) = (
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
);

/// Short chains stay inline; a bucket only spills to the heap once it holds
/// more than four entries.
type Bucket<K, V> = SmallVec<[(K, V); 4]>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("hash table needs at least one bucket")]
    NoBuckets,
}

/// A separate-chaining hash table with a fixed bucket count.
///
/// Each bucket is an ordered chain of `(key, value)` pairs; a key lives in
/// the bucket at `hash(key) % bucket_count` and appears at most once in the
/// whole table. There is no resizing and no load-factor limit: chains grow
/// as long as they need to, which keeps behavior predictable and iteration
/// order deterministic. Not synchronized; wrap it in a lock for concurrent
/// mutation.
#[derive(Debug, Clone)]
pub struct ChainedHashTable<K, V> {
    buckets: Vec<Bucket<K, V>>,
    hasher: RandomState,
    len: usize,
}

impl<K: Hash + Eq, V> ChainedHashTable<K, V> {
    /// Creates a table with `bucket_count` empty buckets.
    ///
    /// The bucket count is fixed for the table's lifetime. A zero bucket
    /// count is rejected here so bucket selection never divides by zero.
    pub fn new(bucket_count: usize) -> Result<Self, TableError> {
        if bucket_count == 0 {
            return Err(TableError::NoBuckets);
        }
        Ok(Self {
            buckets: (0..bucket_count).map(|_| Bucket::new()).collect(),
            hasher: RandomState::with_seeds(SEEDS.0, SEEDS.1, SEEDS.2, SEEDS.3),
            len: 0,
        })
    }

    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        self.hasher.hash_one(key) as usize % self.buckets.len()
    }

    /// Inserts `value` under `key`, returning the previous value if the key
    /// was already present (upsert: the pair keeps its position in the
    /// chain; a new key is appended at the end).
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.bucket_index(&key);
        let chain = &mut self.buckets[idx];
        match chain.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                chain.push((key, value));
                self.len += 1;
                None
            }
        }
    }

    /// Looks up `key`, scanning only its bucket's chain.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Removes `key` and returns its value, or `None` if it was absent.
    /// Removing an absent key is a normal outcome and leaves the table
    /// untouched. The remaining chain keeps its order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        let chain = &mut self.buckets[idx];
        let pos = chain.iter().position(|(k, _)| k.borrow() == key)?;
        self.len -= 1;
        Some(chain.remove(pos).1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Number of key-value pairs stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets, fixed at construction.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{ChainedHashTable, TableError};

    #[test]
    fn insert_get_delete_roundtrip() {
        let mut table = ChainedHashTable::new(5).unwrap();
        table.insert("apple", 10);
        table.insert("orange", 20);
        table.insert("banana", 30);

        assert_eq!(table.get("banana"), Some(&30));
        assert_eq!(table.remove("banana"), Some(30));
        assert_eq!(table.get("banana"), None);
        assert_eq!(table.remove("banana"), None);
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut table = ChainedHashTable::new(4).unwrap();
        assert_eq!(table.insert("key".to_string(), 1), None);
        assert_eq!(table.insert("key".to_string(), 2), Some(1));
        assert_eq!(table.get("key"), Some(&2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn remove_absent_leaves_table_unchanged() {
        let mut table = ChainedHashTable::new(3).unwrap();
        table.insert("a", 1);
        table.insert("b", 2);
        assert_eq!(table.remove("c"), None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("a"), Some(&1));
        assert_eq!(table.get("b"), Some(&2));
    }

    #[test]
    fn single_bucket_forces_one_chain() {
        // Every key collides; chain scans must still find, update, and
        // remove the right pair while preserving order around removals.
        let mut table = ChainedHashTable::new(1).unwrap();
        for i in 0..20 {
            table.insert(format!("key-{i}"), i);
        }
        assert_eq!(table.len(), 20);
        assert_eq!(table.bucket_count(), 1);
        for i in 0..20 {
            assert_eq!(table.get(format!("key-{i}").as_str()), Some(&i));
        }
        assert_eq!(table.remove("key-7"), Some(7));
        assert_eq!(table.get("key-7"), None);
        assert_eq!(table.get("key-6"), Some(&6));
        assert_eq!(table.get("key-8"), Some(&8));
        assert_eq!(table.len(), 19);
    }

    #[test]
    fn zero_buckets_is_rejected() {
        assert_eq!(
            ChainedHashTable::<&str, i32>::new(0).unwrap_err(),
            TableError::NoBuckets
        );
    }

    #[test]
    fn len_tracks_inserts_and_removals() {
        let mut table = ChainedHashTable::new(8).unwrap();
        assert!(table.is_empty());
        table.insert(1u32, "one");
        table.insert(2u32, "two");
        table.insert(1u32, "uno");
        assert_eq!(table.len(), 2);
        assert!(table.contains_key(&1));
        table.remove(&1);
        assert_eq!(table.len(), 1);
        assert!(!table.contains_key(&1));
    }
}
