//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the bounded cache against a simple ordered model.

use bytes::Bytes;
use proptest::prelude::*;
use std::collections::HashSet;

use crate::cache::BoundedCache;

// == Strategies ==
/// Keys drawn from a small alphabet so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-h]{1,2}"
}

fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..32)
}

fn capacity_strategy() -> impl Strategy<Value = usize> {
    1usize..8
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: Vec<u8> },
    Get { key: String },
    Delete { key: String },
    Resize { capacity: usize },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        3 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Delete { key }),
        1 => capacity_strategy().prop_map(|capacity| CacheOp::Resize { capacity }),
        1 => Just(CacheOp::Clear),
    ]
}

// == Reference Model ==
/// Ordered list, oldest first, with the same overwrite and eviction rules.
struct Model {
    entries: Vec<(String, Vec<u8>)>,
    capacity: usize,
}

impl Model {
    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn apply(&mut self, op: &CacheOp) -> Option<Vec<u8>> {
        match op {
            CacheOp::Set { key, value } => {
                if let Some(i) = self.position(key) {
                    self.entries[i].1 = value.clone();
                } else {
                    if self.entries.len() >= self.capacity {
                        self.entries.remove(0);
                    }
                    self.entries.push((key.clone(), value.clone()));
                }
                None
            }
            CacheOp::Get { key } => {
                let i = self.position(key)?;
                let entry = self.entries.remove(i);
                let value = entry.1.clone();
                self.entries.push(entry);
                Some(value)
            }
            CacheOp::Delete { key } => {
                if let Some(i) = self.position(key) {
                    self.entries.remove(i);
                }
                None
            }
            CacheOp::Resize { capacity } => {
                self.capacity = *capacity;
                while self.entries.len() > *capacity {
                    self.entries.remove(0);
                }
                None
            }
            CacheOp::Clear => {
                self.entries.clear();
                None
            }
        }
    }
}

fn apply(cache: &mut BoundedCache, op: &CacheOp) -> Option<Vec<u8>> {
    match op {
        CacheOp::Set { key, value } => {
            cache.set(key.clone(), value.clone());
            None
        }
        CacheOp::Get { key } => cache.get(key).map(|b| b.to_vec()),
        CacheOp::Delete { key } => {
            cache.delete(key);
            None
        }
        CacheOp::Resize { capacity } => {
            cache.resize(*capacity).unwrap();
            None
        }
        CacheOp::Clear => {
            cache.clear();
            None
        }
    }
}

fn snapshot(cache: &BoundedCache) -> Vec<(String, Vec<u8>)> {
    cache
        .snapshot()
        .into_iter()
        .map(|(k, v)| (k, v.to_vec()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Any operation sequence leaves the cache in the same order and with the
    // same contents as the reference model.
    #[test]
    fn prop_matches_reference_model(
        capacity in capacity_strategy(),
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let mut cache = BoundedCache::new(capacity).unwrap();
        let mut model = Model { entries: Vec::new(), capacity };

        for op in &ops {
            let got = apply(&mut cache, op);
            let expected = model.apply(op);
            prop_assert_eq!(got, expected, "Result mismatch on {:?}", op);
            prop_assert_eq!(snapshot(&cache), model.entries.clone(), "State mismatch after {:?}", op);
        }
    }

    // The cache never holds more than its capacity once a set returns.
    #[test]
    fn prop_capacity_enforcement(
        capacity in capacity_strategy(),
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..100)
    ) {
        let mut cache = BoundedCache::new(capacity).unwrap();

        for (key, value) in entries {
            cache.set(key, value);
            prop_assert!(
                cache.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                cache.len(),
                capacity
            );
        }
    }

    // Filling to capacity and adding one more distinct key evicts exactly
    // the first key inserted.
    #[test]
    fn prop_eviction_order(
        keys in prop::collection::hash_set("[a-z]{1,8}", 2..10),
        new_key in "[A-Z]{1,8}"
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let capacity = keys.len();
        let mut cache = BoundedCache::new(capacity).unwrap();

        for key in &keys {
            cache.set(key.clone(), key.clone());
        }
        cache.set(new_key.clone(), "new");

        prop_assert_eq!(cache.len(), capacity);
        prop_assert!(!cache.contains(&keys[0]), "Oldest key should be evicted");
        for key in keys.iter().skip(1) {
            prop_assert!(cache.contains(key), "Key '{}' should remain", key);
        }
        prop_assert!(cache.contains(&new_key));
    }

    // A get on the oldest key protects it from the next eviction.
    #[test]
    fn prop_get_refreshes_recency(
        keys in prop::collection::hash_set("[a-z]{1,8}", 2..8),
        new_key in "[A-Z]{1,8}"
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut cache = BoundedCache::new(keys.len()).unwrap();

        for key in &keys {
            cache.set(key.clone(), key.clone());
        }
        prop_assert!(cache.get(&keys[0]).is_some());
        cache.set(new_key, "new");

        prop_assert!(cache.contains(&keys[0]));
        prop_assert!(!cache.contains(&keys[1]));
    }

    // Overwriting the oldest key does not save it from eviction.
    #[test]
    fn prop_overwrite_does_not_refresh(
        keys in prop::collection::hash_set("[a-z]{1,8}", 2..8),
        new_key in "[A-Z]{1,8}",
        value in value_strategy()
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut cache = BoundedCache::new(keys.len()).unwrap();

        for key in &keys {
            cache.set(key.clone(), key.clone());
        }
        cache.set(keys[0].clone(), value);
        cache.set(new_key, "new");

        prop_assert!(!cache.contains(&keys[0]));
        prop_assert!(cache.contains(&keys[1]));
    }

    // Shrinking removes exactly size - k entries, oldest first, and keeps the
    // survivors in their relative order.
    #[test]
    fn prop_resize_shrink(
        keys in prop::collection::hash_set("[a-z]{1,8}", 1..12),
        new_capacity in 1usize..12
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut cache = BoundedCache::new(keys.len()).unwrap();
        for key in &keys {
            cache.set(key.clone(), key.clone());
        }
        let before: Vec<String> = cache.snapshot().into_iter().map(|(k, _)| k).collect();

        let evicted = cache.resize(new_capacity).unwrap();

        let expected_evicted = keys.len().saturating_sub(new_capacity);
        prop_assert_eq!(evicted, expected_evicted);
        let after: Vec<String> = cache.snapshot().into_iter().map(|(k, _)| k).collect();
        prop_assert_eq!(after, before[expected_evicted..].to_vec());
    }

    // Clear empties any state.
    #[test]
    fn prop_clear_empties(
        capacity in capacity_strategy(),
        ops in prop::collection::vec(cache_op_strategy(), 0..40)
    ) {
        let mut cache = BoundedCache::new(capacity).unwrap();
        for op in &ops {
            apply(&mut cache, op);
        }

        cache.clear();

        prop_assert!(cache.snapshot().is_empty());
    }

    // Deleting an absent key leaves the snapshot unchanged.
    #[test]
    fn prop_delete_absent_is_noop(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 0..20),
        absent in "[x-z]{3}"
    ) {
        let mut cache = BoundedCache::new(8).unwrap();
        for (key, value) in entries {
            cache.set(key, Bytes::from(value));
        }
        let before = snapshot(&cache);
        let seen: HashSet<String> = before.iter().map(|(k, _)| k.clone()).collect();
        prop_assume!(!seen.contains(&absent));

        cache.delete(&absent);

        prop_assert_eq!(snapshot(&cache), before);
    }
}
