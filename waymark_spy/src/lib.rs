// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Spy: a deterministic scroll-spy and table-of-contents navigator.
//!
//! ## Overview
//!
//! This crate keeps a page's table of contents in step with the reader.
//! It highlights the section whose heading is nearest a fixed tracking line, and it
//! turns clicks on the list into smooth in-page navigation.
//! It does not own a window or an event loop.
//! Hosts implement the capability traits in [`types`] and forward their callbacks to
//! [`Toc`](crate::toc::Toc).
//!
//! ## Inputs
//!
//! - A document implementing [`HeadingSource`](waymark_outline::HeadingSource); the outline is
//!   extracted from it once per mount (see `waymark_outline`).
//! - Viewport geometry through [`Geometry`](crate::types::Geometry): each heading's bounding box
//!   relative to the viewport.
//! - Viewport events, animation frames, and timers through [`EventLoop`](crate::types::EventLoop).
//!
//! ## Active section
//!
//! On every frame the tracker measures `|top - offset|` for each heading and selects the
//! minimum; ties go to the earlier heading. The active id is only republished when it
//! changes. See [`active`] for the two-writer model shared with click navigation.
//!
//! ## Frame coalescing
//!
//! Scroll and resize events go through a single-slot [`FrameSlot`](crate::schedule::FrameSlot).
//! However many events fire in a frame, at most one recomputation is outstanding; extra
//! triggers are dropped, not queued.
//!
//! ## Click navigation
//!
//! See [`navigate`] for the exact sequence: default suppressed, smooth scroll, delayed
//! correction, optimistic highlight, fragment replacement.
//!
//! ## Hosts
//!
//! - [`MemoryPage`](crate::memory::MemoryPage): in-memory, fully deterministic; used by tests.
//! - `adapters::web` (feature `web`): a browser window through `web-sys`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod active;
pub mod adapters;
pub mod config;
pub mod memory;
pub mod navigate;
pub mod schedule;
pub mod spy;
pub mod toc;
pub mod types;
pub mod view;
