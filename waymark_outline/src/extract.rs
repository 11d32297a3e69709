// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Heading extraction and outline building.

use alloc::string::String;
use alloc::vec::Vec;

use crate::slug::slugify;
use crate::types::{HeadingEntry, HeadingLevels, HeadingSource};

/// An ordered outline: one [`HeadingEntry`] per discovered heading, plus the heading handle.
///
/// Entries and handles are parallel and in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline<H> {
    entries: Vec<HeadingEntry>,
    headings: Vec<H>,
}

impl<H> Default for Outline<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            headings: Vec::new(),
        }
    }
}

impl<H> Outline<H> {
    /// An outline with no sections.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a section. Callers keep document order.
    pub fn push(&mut self, entry: HeadingEntry, heading: H) {
        self.entries.push(entry);
        self.headings.push(heading);
    }

    /// Entries in document order.
    pub fn entries(&self) -> &[HeadingEntry] {
        &self.entries
    }

    /// Heading handles, parallel to [`Outline::entries`].
    pub fn headings(&self) -> &[H] {
        &self.headings
    }

    /// Entry/handle pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&HeadingEntry, &H)> {
        self.entries.iter().zip(self.headings.iter())
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no sections.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the section with `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Drop the handles and keep the entries.
    pub fn into_entries(self) -> Vec<HeadingEntry> {
        self.entries
    }
}

/// Scan the container identified by `marker` and build its outline.
///
/// - A missing container or one without matching headings yields an empty outline.
/// - Headings that carry an id keep it; others get `slugify(text)` made unique
///   against every id in the document, and the id is assigned back onto the heading.
/// - The result is a snapshot; running again over the processed document returns the
///   same entries without assigning anything.
pub fn extract_outline<S: HeadingSource>(
    source: &mut S,
    marker: &str,
    levels: HeadingLevels,
) -> Outline<S::Heading> {
    let Some(container) = source.find_container(marker) else {
        log::debug!("content container `{marker}` not rendered; outline is empty");
        return Outline::empty();
    };
    let headings = source.locate_headings(&container, levels);
    if headings.is_empty() {
        return Outline::empty();
    }

    let mut in_use = source.document_ids();
    let mut listed: Vec<String> = Vec::with_capacity(headings.len());
    let mut outline = Outline::default();
    for heading in headings {
        let text = source.read_text(&heading);
        let id = match source.read_id(&heading) {
            Some(id) => {
                if listed.contains(&id) {
                    log::warn!("authored id `{id}` appears on more than one heading");
                }
                id
            }
            None => {
                let id = in_use.claim(&slugify(&text));
                source.assign_id(&heading, &id);
                id
            }
        };
        listed.push(id.clone());
        outline.push(HeadingEntry { id, text }, heading);
    }
    log::debug!("outline of `{marker}` has {} sections", outline.len());
    outline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDocument;
    use alloc::vec;

    fn ids<H>(outline: &Outline<H>) -> Vec<&str> {
        outline.entries().iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn missing_container_is_empty() {
        let mut doc = MemoryDocument::new();
        let body = doc.container("sidebar");
        doc.heading(body, 2, "Elsewhere", 0.0);
        let outline = extract_outline(&mut doc, "post-content", HeadingLevels::H2);
        assert!(outline.is_empty());
    }

    #[test]
    fn container_without_headings_is_empty() {
        let mut doc = MemoryDocument::new();
        let body = doc.container("post-content");
        doc.element(body, "p", "Just a paragraph", 0.0);
        let outline = extract_outline(&mut doc, "post-content", HeadingLevels::H2);
        assert!(outline.is_empty());
    }

    #[test]
    fn one_entry_per_h2_in_document_order() {
        let mut doc = MemoryDocument::new();
        let body = doc.container("post-content");
        doc.heading(body, 2, "Alpha", 100.0);
        let section = doc.element(body, "section", "", 200.0);
        doc.heading(section, 2, "Beta", 250.0);
        doc.heading(body, 3, "Not included", 300.0);
        doc.heading(body, 2, "Gamma", 400.0);

        let outline = extract_outline(&mut doc, "post-content", HeadingLevels::H2);
        assert_eq!(outline.len(), 3);
        assert_eq!(ids(&outline), vec!["alpha", "beta", "gamma"]);
        let texts: Vec<_> = outline.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn headings_outside_container_are_ignored() {
        let mut doc = MemoryDocument::new();
        let header = doc.container("site-header");
        doc.heading(header, 2, "Menu", 0.0);
        let body = doc.container("post-content");
        doc.heading(body, 2, "Body", 100.0);
        let outline = extract_outline(&mut doc, "post-content", HeadingLevels::H2);
        assert_eq!(ids(&outline), vec!["body"]);
    }

    #[test]
    fn existing_ids_are_never_overwritten() {
        let mut doc = MemoryDocument::new();
        let body = doc.container("post-content");
        let h = doc.heading(body, 2, "Pricing", 0.0);
        doc.set_id(h, "custom-anchor");
        let outline = extract_outline(&mut doc, "post-content", HeadingLevels::H2);
        assert_eq!(ids(&outline), vec!["custom-anchor"]);
        assert_eq!(doc.node(h).and_then(|n| n.id.as_deref()), Some("custom-anchor"));
    }

    #[test]
    fn generated_ids_avoid_ids_elsewhere_in_document() {
        let mut doc = MemoryDocument::new();
        let nav = doc.container("site-nav");
        let link = doc.element(nav, "a", "FAQ", 0.0);
        doc.set_id(link, "faq");
        let body = doc.container("post-content");
        let first = doc.heading(body, 2, "FAQ", 100.0);
        let second = doc.heading(body, 2, "FAQ", 200.0);

        let outline = extract_outline(&mut doc, "post-content", HeadingLevels::H2);
        assert_eq!(ids(&outline), vec!["faq-1", "faq-2"]);
        assert_eq!(doc.node(first).and_then(|n| n.id.as_deref()), Some("faq-1"));
        assert_eq!(doc.node(second).and_then(|n| n.id.as_deref()), Some("faq-2"));
    }

    #[test]
    fn generated_id_skips_authored_heading_id() {
        let mut doc = MemoryDocument::new();
        let body = doc.container("post-content");
        let authored = doc.heading(body, 2, "Setup", 0.0);
        doc.set_id(authored, "setup");
        doc.heading(body, 2, "Setup", 100.0);
        let outline = extract_outline(&mut doc, "post-content", HeadingLevels::H2);
        assert_eq!(ids(&outline), vec!["setup", "setup-1"]);
    }

    #[test]
    fn empty_text_uses_fallback_id() {
        let mut doc = MemoryDocument::new();
        let body = doc.container("post-content");
        doc.heading(body, 2, "", 0.0);
        doc.heading(body, 2, "***", 100.0);
        let outline = extract_outline(&mut doc, "post-content", HeadingLevels::H2);
        assert_eq!(ids(&outline), vec!["heading", "heading-1"]);
    }

    #[test]
    fn second_run_is_idempotent() {
        let mut doc = MemoryDocument::new();
        let body = doc.container("post-content");
        doc.heading(body, 2, "Intro", 0.0);
        doc.heading(body, 2, "Intro", 100.0);
        doc.heading(body, 2, "Outro", 200.0);

        let first = extract_outline(&mut doc, "post-content", HeadingLevels::H2);
        let snapshot = doc.clone();
        let second = extract_outline(&mut doc, "post-content", HeadingLevels::H2);
        assert_eq!(first.entries(), second.entries());
        assert_eq!(doc, snapshot);
    }

    #[test]
    fn extra_levels_are_opt_in() {
        let mut doc = MemoryDocument::new();
        let body = doc.container("post-content");
        doc.heading(body, 2, "Two", 0.0);
        doc.heading(body, 3, "Three", 100.0);
        let outline = extract_outline(&mut doc, "post-content", HeadingLevels::H2 | HeadingLevels::H3);
        assert_eq!(ids(&outline), vec!["two", "three"]);
    }

    #[test]
    fn position_finds_entries() {
        let mut doc = MemoryDocument::new();
        let body = doc.container("post-content");
        doc.heading(body, 2, "A", 0.0);
        doc.heading(body, 2, "B", 100.0);
        let outline = extract_outline(&mut doc, "post-content", HeadingLevels::H2);
        assert_eq!(outline.position("b"), Some(1));
        assert_eq!(outline.position("zzz"), None);
    }
}
