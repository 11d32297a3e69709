// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit registry of ids in use and unique-id resolution.

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;

/// Ids already present in a document.
///
/// Uniqueness checks consult this set instead of querying the live document, so
/// [`resolve_unique`] stays a pure function of its inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdSet {
    ids: BTreeSet<String>,
}

impl IdSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is in use.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Record `id` as in use. Returns `false` if it already was.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    /// Resolve `candidate` against the set, record the result, and return it.
    pub fn claim(&mut self, candidate: &str) -> String {
        let id = resolve_unique(candidate, self);
        self.ids.insert(id.clone());
        id
    }

    /// Number of ids in use.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no ids are in use.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate the ids in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for IdSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for IdSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.ids.extend(iter.into_iter().map(Into::into));
    }
}

/// Return `candidate` if unused, else the first `candidate-N` (N = 1, 2, ...) not in `existing`.
///
/// ```
/// use waymark_outline::{IdSet, resolve_unique};
///
/// let used: IdSet = ["faq", "faq-1"].into_iter().collect();
/// assert_eq!(resolve_unique("pricing", &used), "pricing");
/// assert_eq!(resolve_unique("faq", &used), "faq-2");
/// ```
pub fn resolve_unique(candidate: &str, existing: &IdSet) -> String {
    if !existing.contains(candidate) {
        return String::from(candidate);
    }
    let mut n: u32 = 1;
    loop {
        let id = format!("{candidate}-{n}");
        if !existing.contains(&id) {
            return id;
        }
        n += 1;
    }
}
