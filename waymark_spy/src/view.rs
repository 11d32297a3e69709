// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendered table-of-contents list.

use alloc::string::String;
use alloc::vec::Vec;

use waymark_outline::HeadingEntry;

/// Heading shown above the list.
pub const TOC_TITLE: &str = "Table of Contents";
/// Text shown when the page has no sections.
pub const EMPTY_TEXT: &str = "No sections";

/// One navigable row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocItem<'a> {
    /// Target heading id; clicks are routed with it.
    pub id: &'a str,
    /// Visible label.
    pub label: &'a str,
    /// Whether this row is highlighted.
    pub active: bool,
}

impl TocItem<'_> {
    /// The `#id` link target.
    pub fn href(&self) -> String {
        let mut href = String::with_capacity(self.id.len() + 1);
        href.push('#');
        href.push_str(self.id);
        href
    }
}

/// What the table of contents shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TocView<'a> {
    /// Neutral state for pages without sections.
    Empty,
    /// Rows in document order.
    Sections(Vec<TocItem<'a>>),
}

impl<'a> TocView<'a> {
    /// Build the view for `entries` with `active` highlighted.
    pub fn new(entries: &'a [HeadingEntry], active: Option<&str>) -> Self {
        if entries.is_empty() {
            return Self::Empty;
        }
        Self::Sections(
            entries
                .iter()
                .map(|e| TocItem {
                    id: &e.id,
                    label: &e.text,
                    active: active == Some(e.id.as_str()),
                })
                .collect(),
        )
    }

    /// Rows, empty for [`TocView::Empty`].
    pub fn items(&self) -> &[TocItem<'a>] {
        match self {
            Self::Empty => &[],
            Self::Sections(items) => items,
        }
    }

    /// Render the navigation markup.
    ///
    /// ```
    /// use waymark_outline::HeadingEntry;
    /// use waymark_spy::view::TocView;
    ///
    /// let entries = [HeadingEntry::new("q-a", "Q & A")];
    /// let html = TocView::new(&entries, Some("q-a")).render_html();
    /// assert!(html.contains(r##"<a href="#q-a" class="active" aria-current="location">Q &amp; A</a>"##));
    /// assert_eq!(TocView::new(&[], None).render_html(), r#"<div class="toc-empty">No sections</div>"#);
    /// ```
    pub fn render_html(&self) -> String {
        let items = match self {
            Self::Empty => {
                let mut out = String::from(r#"<div class="toc-empty">"#);
                out.push_str(EMPTY_TEXT);
                out.push_str("</div>");
                return out;
            }
            Self::Sections(items) => items,
        };
        let mut out = String::from(r#"<nav class="toc-post"><div class="toc-post-head">"#);
        out.push_str(TOC_TITLE);
        out.push_str("</div><ul>");
        for item in items {
            out.push_str(r#"<li><a href=""#);
            escape_into(&item.href(), &mut out);
            out.push('"');
            if item.active {
                out.push_str(r#" class="active" aria-current="location""#);
            }
            out.push('>');
            escape_into(item.label, &mut out);
            out.push_str("</a></li>");
        }
        out.push_str("</ul></nav>");
        out
    }
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
