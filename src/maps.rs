// ABOUTME: Associative-container sizing strategies and the shared lookup fixture
// ABOUTME: Compares capacity hints, initialization sizes, clear-for-reuse and key shapes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Associative-Container Strategies
//!
//! Sets of decimal string keys are built with and without capacity hints,
//! initialized empty at several hints, and emptied for reuse either entry by
//! entry or by replacing the allocation. [`LookupFixture`] compares a
//! struct-keyed map with a joined-string-keyed map over the same data.
//!
//! Strategy only changes cost: every strategy yields the same key set.

use crate::constants::maps::{
    CAPACITY_HINTS, KEY_SEPARATOR, LOOKUP_ENTRIES, LOOKUP_KEY_RANGE, LOOKUP_VALUE,
};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Key set under measurement
pub type KeySet = HashSet<String>;

/// Deterministic decimal keys `start..start + count`
#[must_use]
pub fn sequential_keys(start: usize, count: usize) -> Vec<String> {
    (start..start + count).map(|i| i.to_string()).collect()
}

/// Insert `keys` into a set created without a capacity hint
#[must_use]
pub fn insert_unhinted(keys: Vec<String>) -> KeySet {
    let mut set = KeySet::new();
    set.extend(keys);
    set
}

/// Insert `keys` into a set created with exactly `keys.len()` capacity
#[must_use]
pub fn insert_hinted(keys: Vec<String>) -> KeySet {
    let mut set = KeySet::with_capacity(keys.len());
    set.extend(keys);
    set
}

/// Insert one key at a time into an existing set, returning how many were new
pub fn insert_into<I>(set: &mut KeySet, keys: I) -> usize
where
    I: IntoIterator<Item = String>,
{
    keys.into_iter()
        .map(|key| set.insert(key))
        .filter(|inserted| *inserted)
        .count()
}

/// Initial capacity passed when creating an empty set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityHint {
    /// No hint; the set allocates on first insert
    Unhinted,
    /// Reserve room for this many entries up front
    Exact(usize),
}

impl CapacityHint {
    /// Every hint measured by the initialization benchmark
    #[must_use]
    pub fn measured() -> Vec<Self> {
        std::iter::once(Self::Unhinted)
            .chain(CAPACITY_HINTS.iter().copied().map(Self::Exact))
            .collect()
    }

    /// Create an empty set with this hint
    #[must_use]
    pub fn init(self) -> KeySet {
        match self {
            Self::Unhinted => KeySet::new(),
            Self::Exact(capacity) => KeySet::with_capacity(capacity),
        }
    }
}

impl fmt::Display for CapacityHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unhinted => f.write_str("none"),
            Self::Exact(capacity) => write!(f, "{capacity}"),
        }
    }
}

/// How a populated set is emptied before it is filled again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReuseStrategy {
    /// Remove every entry individually, keeping the allocation
    RemoveEach,
    /// Drop the set and allocate a fresh one
    Fresh,
}

impl ReuseStrategy {
    /// Both strategies, in reporting order
    pub const ALL: [Self; 2] = [Self::RemoveEach, Self::Fresh];

    /// Benchmark identifier
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RemoveEach => "remove_each",
            Self::Fresh => "fresh_allocation",
        }
    }

    /// Empty `set` with this strategy
    pub fn reset(self, set: &mut KeySet) {
        match self {
            Self::RemoveEach => clear_by_removal(set),
            Self::Fresh => *set = KeySet::new(),
        }
    }
}

/// Remove entries one at a time until the set is empty
pub fn clear_by_removal(set: &mut KeySet) {
    set.retain(|_| false);
}

/// Composite key of the struct-keyed lookup map
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPair {
    /// First component
    pub a: String,
    /// Second component
    pub b: String,
}

/// Which key shape a lookup goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShape {
    /// Struct of two strings
    Pair,
    /// Both components joined by a separator
    Joined,
}

impl KeyShape {
    /// Both shapes, in reporting order
    pub const ALL: [Self; 2] = [Self::Pair, Self::Joined];

    /// Benchmark identifier
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pair => "struct_key",
            Self::Joined => "joined_string_key",
        }
    }
}

/// Read-only lookup dataset built once and shared by the lookup benchmarks
///
/// Entry `i` maps components `(i, 2 * i)`.
#[derive(Debug, Clone)]
pub struct LookupFixture {
    pairs: HashMap<KeyPair, &'static str>,
    joined: HashMap<String, &'static str>,
}

impl LookupFixture {
    /// Build both maps over the same entries
    #[must_use]
    pub fn build() -> Self {
        let mut pairs = HashMap::with_capacity(LOOKUP_ENTRIES);
        let mut joined = HashMap::with_capacity(LOOKUP_ENTRIES);
        for i in 0..LOOKUP_ENTRIES {
            let (a, b) = (i.to_string(), (i * 2).to_string());
            joined.insert(join_key(&a, &b), LOOKUP_VALUE);
            pairs.insert(KeyPair { a, b }, LOOKUP_VALUE);
        }
        Self { pairs, joined }
    }

    /// Look up through the struct-keyed map
    #[must_use]
    pub fn lookup_pair(&self, a: &str, b: &str) -> Option<&'static str> {
        let key = KeyPair {
            a: a.to_owned(),
            b: b.to_owned(),
        };
        self.pairs.get(&key).copied()
    }

    /// Look up through the joined-string-keyed map
    #[must_use]
    pub fn lookup_joined(&self, a: &str, b: &str) -> Option<&'static str> {
        self.joined.get(&join_key(a, b)).copied()
    }

    /// Look up with the given key shape
    #[must_use]
    pub fn lookup(&self, shape: KeyShape, a: &str, b: &str) -> Option<&'static str> {
        match shape {
            KeyShape::Pair => self.lookup_pair(a, b),
            KeyShape::Joined => self.lookup_joined(a, b),
        }
    }

    /// Number of entries in each map
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the fixture holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn join_key(a: &str, b: &str) -> String {
    let mut key = String::with_capacity(a.len() + b.len() + 1);
    key.push_str(a);
    key.push(KEY_SEPARATOR);
    key.push_str(b);
    key
}

/// Reproducible stream of random lookup components
#[derive(Debug, Clone)]
pub struct LookupKeys {
    rng: ChaCha8Rng,
}

impl LookupKeys {
    /// Start the stream from `seed`
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Next pair of decimal components, each below the lookup key range
    pub fn next_pair(&mut self) -> (String, String) {
        let a = self.rng.gen_range(0..LOOKUP_KEY_RANGE);
        let b = self.rng.gen_range(0..LOOKUP_KEY_RANGE);
        (a.to_string(), b.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_keys() {
        assert_eq!(sequential_keys(98, 3), vec!["98", "99", "100"]);
    }

    #[test]
    fn test_insert_into_counts_new_keys() {
        let mut set = insert_hinted(sequential_keys(0, 10));
        assert_eq!(insert_into(&mut set, sequential_keys(5, 10)), 5);
        assert_eq!(set.len(), 15);
    }

    #[test]
    fn test_measured_hints() {
        let hints = CapacityHint::measured();
        assert_eq!(hints.len(), 7);
        assert_eq!(hints[0], CapacityHint::Unhinted);
        assert_eq!(hints[6].to_string(), "1000000");
        for hint in hints {
            assert!(hint.init().is_empty());
        }
    }

    #[test]
    fn test_remove_each_keeps_allocation() {
        let mut set = insert_hinted(sequential_keys(0, 1_000));
        ReuseStrategy::RemoveEach.reset(&mut set);
        assert!(set.is_empty());
        // Tombstones lower the reported capacity, the table itself stays
        assert!(set.capacity() >= 1_000);
        assert_eq!(insert_into(&mut set, sequential_keys(0, 1_000)), 1_000);
    }

    #[test]
    fn test_lookup_keys_are_reproducible() {
        let mut first = LookupKeys::seeded(7);
        let mut second = LookupKeys::seeded(7);
        for _ in 0..20 {
            assert_eq!(first.next_pair(), second.next_pair());
        }
    }
}
