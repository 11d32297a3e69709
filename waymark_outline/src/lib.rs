// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Outline: heading discovery and table-of-contents outlines.
//!
//! ## Overview
//!
//! This crate turns the headings of a rendered article into an ordered, navigable outline.
//! It does not talk to a browser directly.
//! Instead, the document is reached through the [`HeadingSource`] capability trait, so the
//! same algorithm runs against a live DOM (see `waymark_spy`'s `web` adapter) or against the
//! in-memory [`MemoryDocument`] used by tests and demos.
//!
//! ## Ids
//!
//! Every outline entry is addressable by a fragment id.
//! Headings that already carry an id keep it.
//! Headings without one receive [`slugify`] of their text, made unique against an explicit
//! [`IdSet`] of the ids already present in the document, and the id is written back onto the
//! heading so `#fragment` links resolve.
//!
//! ## Workflow
//!
//! 1) Locate the content container by its marker and collect headings of the configured
//!    [`HeadingLevels`] (only `h2` by default), in document order.
//! 2) Assign missing ids with [`IdSet::claim`].
//! 3) Publish the resulting [`Outline`]: [`HeadingEntry`] values plus the heading handles
//!    that a scroll tracker measures later.
//!
//! Outlines are snapshots; content inserted after extraction is not picked up.
//!
//! ```
//! use waymark_outline::{HeadingLevels, MemoryDocument, extract_outline};
//!
//! let mut doc = MemoryDocument::new();
//! let body = doc.container("post-content");
//! doc.heading(body, 2, "Getting started", 300.0);
//! doc.heading(body, 2, "Getting started", 900.0);
//! doc.heading(body, 3, "Not listed", 1200.0);
//!
//! let outline = extract_outline(&mut doc, "post-content", HeadingLevels::H2);
//! let ids: Vec<_> = outline.entries().iter().map(|e| e.id.as_str()).collect();
//! assert_eq!(ids, ["getting-started", "getting-started-1"]);
//! ```
//!
//! Server code that only has the editor state can build the same entries with
//! [`outline_from_editor_json`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod extract;
mod ids;
mod lexical;
mod memory;
mod slug;
mod types;

pub use error::LexicalError;
pub use extract::{Outline, extract_outline};
pub use ids::{IdSet, resolve_unique};
pub use lexical::{outline_from_editor_json, outline_from_editor_state};
pub use memory::{MemoryDocument, MemoryNode, NodeKey};
pub use slug::{FALLBACK_SLUG, MAX_SLUG_LEN, slugify};
pub use types::{HeadingEntry, HeadingLevels, HeadingSource};
