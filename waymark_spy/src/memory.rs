// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic in-memory host.
//!
//! [`MemoryPage`] wraps a [`MemoryDocument`] with a scroll position, a listener
//! registry, queues of requested frames and timers, and an address bar. Nothing
//! runs on its own: callers pop frames and timers and hand them to the
//! component, which makes every interleaving reproducible in tests.
//!
//! ```
//! use waymark_outline::MemoryDocument;
//! use waymark_spy::config::TocConfig;
//! use waymark_spy::memory::MemoryPage;
//! use waymark_spy::toc::Toc;
//! use waymark_spy::types::ViewportEvents;
//!
//! let mut doc = MemoryDocument::new();
//! let body = doc.container("post-content");
//! doc.heading(body, 2, "Intro", 100.0);
//! doc.heading(body, 2, "Details", 900.0);
//!
//! let mut page = MemoryPage::new(doc);
//! let mut toc = Toc::mount(&mut page, TocConfig::default());
//! assert_eq!(toc.active_id(), Some("intro"));
//!
//! page.scroll_to(800.0);
//! toc.on_viewport_event(&mut page, ViewportEvents::SCROLL);
//! while page.take_frame().is_some() {
//!     toc.on_frame(&page);
//! }
//! assert_eq!(toc.active_id(), Some("details"));
//!
//! toc.unmount(&mut page);
//! assert_eq!(page.listener_count(), 0);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Vec2};
use waymark_outline::{HeadingLevels, HeadingSource, IdSet, MemoryDocument, NodeKey};

use crate::types::{
    EventLoop, FrameHandle, Geometry, ListenerOptions, Navigator, TimerHandle, ViewportEvents,
};

/// A scroll the page performed.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollCall {
    /// Smooth scroll aligning `node`'s top with the viewport top.
    IntoView {
        /// Target node.
        node: NodeKey,
        /// Scroll position after the call.
        scroll_y: f64,
    },
    /// Smooth scroll by a relative delta.
    By {
        /// Requested delta.
        delta: Vec2,
        /// Scroll position after the call.
        scroll_y: f64,
    },
}

/// An in-memory page: document, viewport, listeners, frames, timers, and history.
#[derive(Clone, Debug)]
pub struct MemoryPage {
    doc: MemoryDocument,
    scroll_y: f64,
    listeners: Vec<(ViewportEvents, ListenerOptions)>,
    next_frame: u32,
    frames: Vec<FrameHandle>,
    refuse_frames: bool,
    next_timer: u32,
    timers: Vec<(TimerHandle, u32)>,
    fragment: Option<String>,
    history_len: usize,
    scrolls: Vec<ScrollCall>,
}

impl MemoryPage {
    /// A page showing `doc`, scrolled to the top, with one history entry.
    pub fn new(doc: MemoryDocument) -> Self {
        Self {
            doc,
            scroll_y: 0.0,
            listeners: Vec::new(),
            next_frame: 0,
            frames: Vec::new(),
            refuse_frames: false,
            next_timer: 0,
            timers: Vec::new(),
            fragment: None,
            history_len: 1,
            scrolls: Vec::new(),
        }
    }

    /// The rendered document.
    pub fn document(&self) -> &MemoryDocument {
        &self.doc
    }

    /// Mutable access to the rendered document, e.g. to remove nodes.
    pub fn document_mut(&mut self) -> &mut MemoryDocument {
        &mut self.doc
    }

    /// Current vertical scroll position.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Jump to a scroll position, as a user scroll would. Does not notify anyone.
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    /// Whether a listener for any of `events` is registered.
    pub fn delivers(&self, events: ViewportEvents) -> bool {
        self.listeners.iter().any(|(ev, _)| ev.intersects(events))
    }

    /// Options of the listener registered for `events`, if exactly registered.
    pub fn listener_options(&self, events: ViewportEvents) -> Option<ListenerOptions> {
        self.listeners
            .iter()
            .find(|(ev, _)| *ev == events)
            .map(|&(_, options)| options)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Frames requested and neither run nor cancelled.
    pub fn pending_frames(&self) -> &[FrameHandle] {
        &self.frames
    }

    /// Total frames ever requested.
    pub fn frames_requested(&self) -> u32 {
        self.next_frame
    }

    /// Make later frame requests fail (`true`) or succeed again (`false`).
    pub fn refuse_frames(&mut self, refuse: bool) {
        self.refuse_frames = refuse;
    }

    /// Pop the oldest pending frame; the caller then runs the component's frame callback.
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        (!self.frames.is_empty()).then(|| self.frames.remove(0))
    }

    /// Timers armed and not yet fired, with their delays.
    pub fn pending_timers(&self) -> &[(TimerHandle, u32)] {
        &self.timers
    }

    /// Pop the oldest pending timer.
    pub fn take_timer(&mut self) -> Option<TimerHandle> {
        (!self.timers.is_empty()).then(|| self.timers.remove(0).0)
    }

    /// Fragment of the address, without the `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Number of history entries.
    pub fn history_len(&self) -> usize {
        self.history_len
    }

    /// Scrolls issued through [`Navigator`], oldest first.
    pub fn scrolls(&self) -> &[ScrollCall] {
        &self.scrolls
    }
}

impl Geometry<NodeKey> for MemoryPage {
    fn bounds(&self, node: &NodeKey) -> Option<Rect> {
        self.doc
            .bounds(*node)
            .map(|b| b - Vec2::new(0.0, self.scroll_y))
    }
}

impl Navigator<NodeKey> for MemoryPage {
    fn element_by_id(&self, id: &str) -> Option<NodeKey> {
        self.doc.find_by_id(id)
    }

    fn scroll_into_view(&mut self, node: &NodeKey) {
        if let Some(bounds) = self.doc.bounds(*node) {
            self.scroll_to(bounds.y0);
            self.scrolls.push(ScrollCall::IntoView {
                node: *node,
                scroll_y: self.scroll_y,
            });
        }
    }

    fn scroll_by(&mut self, delta: Vec2) {
        self.scroll_to(self.scroll_y + delta.y);
        self.scrolls.push(ScrollCall::By {
            delta,
            scroll_y: self.scroll_y,
        });
    }

    fn replace_fragment(&mut self, id: &str) {
        self.fragment = Some(String::from(id));
    }
}

impl EventLoop for MemoryPage {
    fn listen(&mut self, events: ViewportEvents, options: ListenerOptions) {
        self.listeners.push((events, options));
    }

    fn unlisten(&mut self, events: ViewportEvents) {
        for (ev, _) in &mut self.listeners {
            ev.remove(events);
        }
        self.listeners.retain(|(ev, _)| !ev.is_empty());
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse_frames {
            return None;
        }
        self.next_frame += 1;
        let handle = FrameHandle(self.next_frame);
        self.frames.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.retain(|&h| h != handle);
    }

    fn set_timeout(&mut self, delay_ms: u32) -> TimerHandle {
        self.next_timer += 1;
        let handle = TimerHandle(self.next_timer);
        self.timers.push((handle, delay_ms));
        handle
    }
}

impl HeadingSource for MemoryPage {
    type Heading = NodeKey;
    type Container = NodeKey;

    fn find_container(&self, marker: &str) -> Option<NodeKey> {
        self.doc.find_container(marker)
    }

    fn locate_headings(&self, container: &NodeKey, levels: HeadingLevels) -> Vec<NodeKey> {
        self.doc.locate_headings(container, levels)
    }

    fn read_text(&self, heading: &NodeKey) -> String {
        self.doc.read_text(heading)
    }

    fn read_id(&self, heading: &NodeKey) -> Option<String> {
        self.doc.read_id(heading)
    }

    fn assign_id(&mut self, heading: &NodeKey, id: &str) {
        self.doc.assign_id(heading, id);
    }

    fn document_ids(&self) -> IdSet {
        self.doc.document_ids()
    }
}
