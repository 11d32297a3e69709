// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: outline entries, heading levels, and the document capability trait.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::ids::IdSet;

/// One navigable section of a page.
///
/// `id` is unique within an [`Outline`](crate::Outline) produced from ids this crate
/// generates, and stable once assigned. `text` is the heading's visible text at
/// discovery time; it is not live-updated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Fragment identifier of the heading element.
    pub id: String,
    /// Visible label of the heading.
    pub text: String,
}

impl HeadingEntry {
    /// Create an entry from an id and a label.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// The `#id` href used by in-page links.
    pub fn href(&self) -> String {
        let mut href = String::with_capacity(self.id.len() + 1);
        href.push('#');
        href.push_str(&self.id);
        href
    }
}

bitflags::bitflags! {
    /// Heading levels collected into an outline.
    ///
    /// Only `H2` is navigable by default; content renderers emit the sections meant
    /// for the table of contents as `h2` elements.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct HeadingLevels: u8 {
        /// `h1`
        const H1 = 0b0000_0001;
        /// `h2`
        const H2 = 0b0000_0010;
        /// `h3`
        const H3 = 0b0000_0100;
        /// `h4`
        const H4 = 0b0000_1000;
        /// `h5`
        const H5 = 0b0001_0000;
        /// `h6`
        const H6 = 0b0010_0000;
    }
}

impl Default for HeadingLevels {
    fn default() -> Self {
        Self::H2
    }
}

const TAGS: [(&str, HeadingLevels); 6] = [
    ("h1", HeadingLevels::H1),
    ("h2", HeadingLevels::H2),
    ("h3", HeadingLevels::H3),
    ("h4", HeadingLevels::H4),
    ("h5", HeadingLevels::H5),
    ("h6", HeadingLevels::H6),
];

impl HeadingLevels {
    /// Map an element tag name (`"h2"`, `"H3"`, ...) to its level flag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        TAGS.iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(tag))
            .map(|&(_, level)| level)
    }

    /// Map a numeric level (1 to 6) to its flag.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1..=6 => Some(TAGS[usize::from(level - 1)].1),
            _ => None,
        }
    }

    /// Whether an element with `tag` is collected.
    pub fn matches_tag(self, tag: &str) -> bool {
        Self::from_tag(tag).is_some_and(|level| self.contains(level))
    }

    /// Lower-case tag names of the selected levels, lowest level first.
    pub fn tag_names(self) -> impl Iterator<Item = &'static str> {
        TAGS.into_iter()
            .filter(move |&(_, level)| self.contains(level))
            .map(|(name, _)| name)
    }

    /// A CSS selector list matching the selected levels, e.g. `"h2, h3"`.
    pub fn selector(self) -> String {
        let names: Vec<&str> = self.tag_names().collect();
        names.join(", ")
    }
}

/// Capability interface over a rendered document.
///
/// Implement this for a real browser document or for an in-memory tree. The
/// extractor only needs to find the content container, list its headings in
/// document order, read and write their ids, and snapshot the ids in use.
pub trait HeadingSource {
    /// Handle to a heading element. Cheap to clone.
    type Heading: Clone;
    /// Handle to the content container.
    type Container;

    /// Find the content container identified by `marker`, if it is rendered.
    fn find_container(&self, marker: &str) -> Option<Self::Container>;

    /// Headings of the given levels inside `container`, in document order.
    fn locate_headings(
        &self,
        container: &Self::Container,
        levels: HeadingLevels,
    ) -> Vec<Self::Heading>;

    /// Visible text content of a heading.
    fn read_text(&self, heading: &Self::Heading) -> String;

    /// Current id of a heading; `None` when missing or empty.
    fn read_id(&self, heading: &Self::Heading) -> Option<String>;

    /// Write `id` onto the heading element.
    fn assign_id(&mut self, heading: &Self::Heading, id: &str);

    /// Every id currently present anywhere in the document.
    fn document_ids(&self) -> IdSet;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_lookup_is_case_insensitive() {
        assert_eq!(HeadingLevels::from_tag("h2"), Some(HeadingLevels::H2));
        assert_eq!(HeadingLevels::from_tag("H4"), Some(HeadingLevels::H4));
        assert_eq!(HeadingLevels::from_tag("h7"), None);
        assert_eq!(HeadingLevels::from_tag("div"), None);
    }

    #[test]
    fn numeric_levels() {
        assert_eq!(HeadingLevels::from_level(1), Some(HeadingLevels::H1));
        assert_eq!(HeadingLevels::from_level(6), Some(HeadingLevels::H6));
        assert_eq!(HeadingLevels::from_level(0), None);
        assert_eq!(HeadingLevels::from_level(7), None);
    }

    #[test]
    fn default_collects_only_h2() {
        let levels = HeadingLevels::default();
        assert!(levels.matches_tag("h2"));
        assert!(!levels.matches_tag("h1"));
        assert!(!levels.matches_tag("h3"));
    }

    #[test]
    fn selector_lists_levels_in_order() {
        assert_eq!(HeadingLevels::H2.selector(), "h2");
        assert_eq!((HeadingLevels::H3 | HeadingLevels::H2).selector(), "h2, h3");
        assert_eq!(HeadingLevels::empty().selector(), "");
    }

    #[test]
    fn href_prefixes_hash() {
        assert_eq!(HeadingEntry::new("intro", "Intro").href(), "#intro");
    }
}
