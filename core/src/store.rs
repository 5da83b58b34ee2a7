//! Fixed-capacity multi-map with explicit bucket chaining.
//!
//! The bucket array never grows. Once the number of distinct keys is well past
//! the bucket count, every chain gets longer and `add`/`get` degrade to a
//! linear scan of that chain. [`BucketMap::longest_chain`] exposes this.

use crate::config::DEFAULT_BUCKETS;
use rustc_hash::FxHasher;
use std::borrow::Borrow;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

type Chain<K, V> = Vec<(K, Vec<V>)>;

pub struct BucketMap<K, V, S = BuildHasherDefault<FxHasher>> {
    buckets: Vec<Chain<K, V>>,
    hasher: S,
    len: usize,
}

impl<K: Hash + Eq, V> BucketMap<K, V> {
    pub fn new() -> Self { Self::with_buckets(DEFAULT_BUCKETS) }

    /// A map with `buckets` chains; zero is bumped to one.
    pub fn with_buckets(buckets: usize) -> Self {
        Self::with_buckets_and_hasher(buckets, BuildHasherDefault::default())
    }
}

impl<K: Hash + Eq, V> Default for BucketMap<K, V> {
    fn default() -> Self { Self::new() }
}

impl<K: Hash + Eq, V, S: BuildHasher> BucketMap<K, V, S> {
    pub fn with_buckets_and_hasher(buckets: usize, hasher: S) -> Self {
        let n = buckets.max(1);
        Self { buckets: (0..n).map(|_| Vec::new()).collect(), hasher, len: 0 }
    }

    fn slot<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Append `value` to the values of `key`, inserting the entry if absent.
    pub fn add(&mut self, key: K, value: V) {
        let slot = self.slot(&key);
        let chain = &mut self.buckets[slot];
        match chain.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => {
                chain.push((key, vec![value]));
                self.len += 1;
            }
        }
    }

    /// Values for `key` in insertion order; empty when absent.
    pub fn get<Q>(&self, key: &Q) -> &[V]
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[self.slot(key)]
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[self.slot(key)].iter().any(|(k, _)| k.borrow() == key)
    }

    /// Remove the entry for `key`, returning its values.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<Vec<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.slot(key);
        let chain = &mut self.buckets[slot];
        let pos = chain.iter().position(|(k, _)| k.borrow() == key)?;
        self.len -= 1;
        Some(chain.remove(pos).1)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn bucket_count(&self) -> usize { self.buckets.len() }

    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Entries in bucket order, then chain order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.buckets.iter().flatten().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }
}

/// Equal when every bucket holds the same chain in the same order.
impl<K: PartialEq, V: PartialEq, S> PartialEq for BucketMap<K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.buckets == other.buckets
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug, S> std::fmt::Debug for BucketMap<K, V, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.buckets.iter().flatten().map(|(k, v)| (k, v)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_and_get_defaults_to_empty() {
        let mut m: BucketMap<String, u32> = BucketMap::new();
        m.add("x".to_string(), 1);
        m.add("x".to_string(), 2);
        assert_eq!(m.get("x"), &[1, 2]);
        assert!(m.get("missing").is_empty());
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn delete_removes_only_that_key() {
        let mut m: BucketMap<&str, u32> = BucketMap::with_buckets(1);
        m.add("a", 1);
        m.add("b", 2);
        assert_eq!(m.delete("a"), Some(vec![1]));
        assert_eq!(m.delete("a"), None);
        assert_eq!(m.get("b"), &[2]);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn single_bucket_chains_every_key() {
        let mut m: BucketMap<u32, u32> = BucketMap::with_buckets(1);
        for k in 0..50 {
            m.add(k, k * 10);
        }
        assert_eq!(m.bucket_count(), 1);
        assert_eq!(m.longest_chain(), 50);
        for k in 0..50 {
            assert_eq!(m.get(&k), &[k * 10]);
        }
    }

    #[test]
    fn chains_grow_without_rehash() {
        let mut m: BucketMap<String, usize> = BucketMap::with_buckets(4);
        for i in 0..400 {
            m.add(format!("term{i}"), i);
        }
        assert_eq!(m.bucket_count(), 4);
        assert!(m.longest_chain() >= 100);
        assert_eq!(m.iter().count(), 400);
    }

    #[test]
    fn equality_follows_insertion() {
        let mut a: BucketMap<u32, &str> = BucketMap::with_buckets(3);
        let mut b: BucketMap<u32, &str> = BucketMap::with_buckets(3);
        for m in [&mut a, &mut b] {
            m.add(7, "x");
            m.add(7, "y");
        }
        assert_eq!(a, b);
        b.add(7, "z");
        assert_ne!(a, b);
    }

    #[test]
    fn zero_buckets_is_clamped() {
        let mut m: BucketMap<u8, u8> = BucketMap::with_buckets(0);
        m.add(1, 1);
        assert_eq!(m.bucket_count(), 1);
        assert_eq!(m.get(&1), &[1]);
    }
}
