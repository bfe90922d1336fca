//! String-keyed hash map with separate chaining and doubling resize.
//!
//! Collisions chain inside a bucket's vector. When the load factor
//! (entries per bucket slot) exceeds 0.75, the bucket array doubles and
//! every entry is rehashed into it. Keys are `String`, so the key-type
//! check the map would otherwise need at runtime is a compile-time fact.

use std::mem;

use tracing::debug;

const DEFAULT_CAPACITY: usize = 16;
const LOAD_FACTOR: f64 = 0.75;
const HASH_PRIME: usize = 31;

/// String-keyed hash map using separate chaining.
#[derive(Debug)]
pub struct HashMap<V> {
    buckets: Vec<Vec<(String, V)>>,
    len: usize,
}

impl<V> HashMap<V> {
    /// Create an empty map with the default capacity of 16 slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty map with at least one slot.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buckets: (0..capacity).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Polynomial hash over the key bytes, reduced modulo the bucket count
    /// at every step so the accumulator never overflows.
    fn bucket_index(&self, key: &str) -> usize {
        let mut code = 0usize;
        for byte in key.bytes() {
            code = (HASH_PRIME * code + byte as usize) % self.buckets.len();
        }
        code
    }

    /// Insert or overwrite a key, returning the displaced value when the
    /// key was already present.
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        for (existing, slot) in bucket.iter_mut() {
            if *existing == key {
                return Some(mem::replace(slot, value));
            }
        }
        bucket.push((key, value));
        self.len += 1;
        if self.len as f64 / self.buckets.len() as f64 > LOAD_FACTOR {
            self.grow();
        }
        None
    }

    /// Value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&V> {
        let bucket = &self.buckets[self.bucket_index(key)];
        bucket
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Check whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove a key, returning its value when it was present.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|(existing, _)| existing == key)?;
        self.len -= 1;
        Some(bucket.remove(position).1)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of bucket slots.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Drop every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// All keys, in bucket order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries().into_iter().map(|(key, _)| key).collect()
    }

    /// All values, in bucket order.
    pub fn values(&self) -> Vec<&V> {
        self.entries().into_iter().map(|(_, value)| value).collect()
    }

    /// All key/value pairs, in bucket order.
    pub fn entries(&self) -> Vec<(&str, &V)> {
        self.buckets
            .iter()
            .flatten()
            .map(|(key, value)| (key.as_str(), value))
            .collect()
    }

    /// Double the bucket array and rehash every entry into it.
    fn grow(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        debug!(new_capacity, len = self.len, "resizing hash map");
        let old = mem::replace(
            &mut self.buckets,
            (0..new_capacity).map(|_| Vec::new()).collect(),
        );
        self.len = 0;
        for (key, value) in old.into_iter().flatten() {
            self.insert(key, value);
        }
    }
}

impl<V> Default for HashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
