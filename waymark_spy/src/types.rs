// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities: viewport geometry, navigation, and the event loop.
//!
//! ## Overview
//!
//! The tracker and the click navigator never touch a browser directly. A host
//! implements these traits over whatever it renders into (a real window, or the
//! in-memory [`MemoryPage`](crate::memory::MemoryPage)) and forwards its event
//! callbacks to [`Toc`](crate::toc::Toc).

use kurbo::{Rect, Vec2};

bitflags::bitflags! {
    /// Viewport events the tracker listens to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ViewportEvents: u8 {
        /// The viewport scrolled.
        const SCROLL = 0b0000_0001;
        /// The viewport was resized.
        const RESIZE = 0b0000_0010;
    }
}

bitflags::bitflags! {
    /// Options passed along with a listener registration.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ListenerOptions: u8 {
        /// The listener never cancels the event, so the host may scroll without waiting on it.
        const PASSIVE = 0b0000_0001;
    }
}

/// Handle of a requested animation frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(pub u32);

/// Handle of a one-shot timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(pub u32);

/// Viewport-relative geometry of rendered elements.
pub trait Geometry<N> {
    /// Bounding box of `node` relative to the viewport's top-left corner, or
    /// `None` when the node is no longer rendered.
    fn bounds(&self, node: &N) -> Option<Rect>;
}

/// Scrolling and address-bar control.
pub trait Navigator<N> {
    /// Find a rendered element by id.
    fn element_by_id(&self, id: &str) -> Option<N>;

    /// Smooth-scroll so the top edge of `node` aligns with the viewport top.
    fn scroll_into_view(&mut self, node: &N);

    /// Smooth-scroll the viewport by `delta`, relative to its current position.
    fn scroll_by(&mut self, delta: Vec2);

    /// Replace the current history entry's fragment with `#id`, without a new
    /// history entry and without reloading.
    fn replace_fragment(&mut self, id: &str);
}

/// Event-loop services: listeners, animation frames, and timers.
pub trait EventLoop {
    /// Start delivering `events` to the component.
    fn listen(&mut self, events: ViewportEvents, options: ListenerOptions);

    /// Stop delivering `events` to the component.
    fn unlisten(&mut self, events: ViewportEvents);

    /// Ask for a callback before the next paint.
    ///
    /// Returns `None` if the host could not schedule one; no callback will follow.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancel a frame requested with [`EventLoop::request_frame`].
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Ask for a one-shot callback after `delay_ms` milliseconds.
    fn set_timeout(&mut self, delay_ms: u32) -> TimerHandle;
}

/// The user-input event that activated a table-of-contents entry.
pub trait Activation {
    /// Suppress the event's default action (the instant anchor jump).
    fn prevent_default(&mut self);
}

/// Everything a [`Toc`](crate::toc::Toc) needs from its host.
pub trait Host<N>: Geometry<N> + Navigator<N> + EventLoop {}

impl<N, T: Geometry<N> + Navigator<N> + EventLoop> Host<N> for T {}

/// An activation that only records whether its default action was suppressed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordedActivation {
    /// Whether [`Activation::prevent_default`] was called.
    pub default_prevented: bool,
}

impl Activation for RecordedActivation {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
