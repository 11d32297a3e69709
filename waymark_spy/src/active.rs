// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-section selection and state.
//!
//! ## Selection
//!
//! The active section is the heading whose top edge is nearest the tracking
//! line, measured as `|top - offset|`. The scan is a left-to-right reduction that
//! only replaces the best candidate on a strictly smaller distance, so ties go to
//! the heading that comes first in the document.
//!
//! ## Writers
//!
//! Both the scroll tracker and the click navigator write [`ActiveSection`]. The
//! click writes first, optimistically, while the smooth scroll is still running;
//! the tracker overwrites it on later frames. Last write wins and the two agree
//! once scrolling settles.

use alloc::string::String;

/// Pick the id whose top is closest to `offset`.
///
/// Candidates are `(id, viewport_top)` pairs in document order. Candidates with an
/// empty id are skipped.
///
/// ```
/// use waymark_spy::active::closest_to_offset;
///
/// let tops = [("a", 300.0), ("b", 120.0), ("c", 500.0)];
/// assert_eq!(closest_to_offset(tops, 120.0), Some("b"));
/// ```
pub fn closest_to_offset<'a>(
    candidates: impl IntoIterator<Item = (&'a str, f64)>,
    offset: f64,
) -> Option<&'a str> {
    let mut best: Option<(&'a str, f64)> = None;
    for (id, top) in candidates {
        if id.is_empty() {
            continue;
        }
        let d = distance(top, offset);
        let closer = match best {
            None => !d.is_nan(),
            Some((_, best_d)) => d < best_d,
        };
        if closer {
            best = Some((id, d));
        }
    }
    best.map(|(id, _)| id)
}

fn distance(a: f64, b: f64) -> f64 {
    if a > b { a - b } else { b - a }
}

/// The currently highlighted section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveSection {
    current: Option<String>,
}

impl ActiveSection {
    /// No section highlighted.
    pub fn new() -> Self {
        Self::default()
    }

    /// The highlighted id.
    pub fn get(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether `id` is highlighted.
    pub fn is(&self, id: &str) -> bool {
        self.get() == Some(id)
    }

    /// Highlight `id`. Returns `true` only if the highlighted id changed.
    pub fn set(&mut self, id: &str) -> bool {
        if self.is(id) {
            return false;
        }
        log::debug!("active section -> `{id}`");
        self.current = Some(String::from(id));
        true
    }

    /// Clear the highlight. Returns `true` if something was highlighted.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }
}
