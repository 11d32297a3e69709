// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-spy tracker.

use alloc::vec::Vec;

use waymark_outline::Outline;

use crate::active::{ActiveSection, closest_to_offset};
use crate::types::Geometry;

/// Tracks which outline section is active for a fixed tracking line.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSpy {
    offset: f64,
    active: ActiveSection,
}

impl ScrollSpy {
    /// Track the line `offset` pixels below the viewport top.
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            active: ActiveSection::new(),
        }
    }

    /// The tracking line.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The active section.
    pub fn active(&self) -> &ActiveSection {
        &self.active
    }

    /// Mutable access for the optimistic writer (click navigation).
    pub fn active_mut(&mut self) -> &mut ActiveSection {
        &mut self.active
    }

    /// Measure every heading in `outline` and publish the one nearest the line.
    ///
    /// Headings that are no longer rendered are skipped. Returns `true` only if
    /// the active id changed; an outline with nothing measurable leaves the
    /// current value untouched.
    pub fn refresh<N>(&mut self, outline: &Outline<N>, geometry: &impl Geometry<N>) -> bool {
        let tops: Vec<(&str, f64)> = outline
            .iter()
            .filter_map(|(entry, node)| Some((entry.id.as_str(), geometry.bounds(node)?.y0)))
            .collect();
        match closest_to_offset(tops, self.offset) {
            Some(id) => self.active.set(id),
            None => false,
        }
    }
}
