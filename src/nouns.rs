// src/nouns.rs
use std::collections::{HashSet, hash_set};

use crate::core::sanitize::normalize_ws;

/// Deduplicated, unordered noun list.
///
/// Every entry is a single trimmed line with whitespace runs collapsed, and
/// never empty: [`NounSet::insert`] normalises before storing and refuses
/// blanks. Iteration order is whatever the underlying hash set yields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NounSet {
    inner: HashSet<String>,
}

impl NounSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a noun after whitespace normalisation.
    /// Returns `false` for blanks and duplicates.
    pub fn insert(&mut self, noun: impl Into<String>) -> bool {
        let noun = normalize_ws(&noun.into());
        if noun.is_empty() {
            return false;
        }
        self.inner.insert(noun)
    }

    pub fn contains(&self, noun: &str) -> bool {
        self.inner.contains(noun)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.inner.iter()
    }

    /// Sorted copy, for stable display and comparisons.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut v: Vec<String> = self.inner.iter().cloned().collect();
        v.sort_unstable();
        v
    }
}

impl<S: Into<String>> FromIterator<S> for NounSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = NounSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for NounSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for noun in iter {
            self.insert(noun);
        }
    }
}

impl IntoIterator for NounSet {
    type Item = String;
    type IntoIter = hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a NounSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
