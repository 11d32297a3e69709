// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The table-of-contents component.
//!
//! ## Lifecycle
//!
//! - [`Toc::mount`] scans the content container once, registers the scroll
//!   (passive) and resize listeners, and computes the active section right away.
//! - The host forwards viewport events to [`Toc::on_viewport_event`], animation
//!   frames to [`Toc::on_frame`], and correction timers to [`Toc::on_timer`].
//! - [`Toc::click`] handles activation of a row.
//! - [`Toc::unmount`] consumes the component, removes both listeners, and cancels
//!   the pending frame, so teardown runs exactly once per mount.

use alloc::vec::Vec;

use waymark_outline::{HeadingEntry, HeadingSource, Outline, extract_outline};

use crate::config::TocConfig;
use crate::navigate::{ClickOutcome, Corrections, navigate};
use crate::schedule::FrameSlot;
use crate::spy::ScrollSpy;
use crate::types::{
    Activation, EventLoop, Geometry, Host, ListenerOptions, Navigator, TimerHandle, ViewportEvents,
};
use crate::view::TocView;

/// A mounted table of contents over headings of type `N`.
///
/// Not `Clone`: one value owns one set of listeners and one pending frame.
#[derive(Debug)]
pub struct Toc<N> {
    config: TocConfig,
    outline: Outline<N>,
    spy: ScrollSpy,
    frames: FrameSlot,
    corrections: Corrections,
}

impl<N: Clone> Toc<N> {
    /// Scan the host's content container and start tracking.
    pub fn mount<H>(host: &mut H, config: TocConfig) -> Self
    where
        H: HeadingSource<Heading = N> + Host<N>,
    {
        let outline = extract_outline(host, &config.container, config.levels);
        Self::attach(host, config, outline)
    }

    /// Start tracking a precomputed list, e.g. one built on the server.
    ///
    /// Each entry is resolved by id; entries whose heading is not rendered are dropped.
    pub fn mount_with_entries<H>(host: &mut H, config: TocConfig, entries: Vec<HeadingEntry>) -> Self
    where
        H: Host<N>,
    {
        let mut outline = Outline::empty();
        for entry in entries {
            match host.element_by_id(&entry.id) {
                Some(node) => outline.push(entry, node),
                None => log::warn!("dropping section `{}`: no element with that id", entry.id),
            }
        }
        Self::attach(host, config, outline)
    }

    fn attach<H: Host<N>>(host: &mut H, config: TocConfig, outline: Outline<N>) -> Self {
        let mut toc = Self {
            spy: ScrollSpy::new(config.offset),
            corrections: Corrections::new(config.correction()),
            frames: FrameSlot::new(),
            outline,
            config,
        };
        host.listen(ViewportEvents::SCROLL, ListenerOptions::PASSIVE);
        host.listen(ViewportEvents::RESIZE, ListenerOptions::empty());
        toc.spy.refresh(&toc.outline, &*host);
        log::debug!(
            "table of contents mounted with {} sections, active {:?}",
            toc.outline.len(),
            toc.spy.active().get()
        );
        toc
    }

    /// A scroll or resize happened. Returns `true` if a frame was requested,
    /// `false` if the event was coalesced into the pending one or the host
    /// refused the request.
    pub fn on_viewport_event(&mut self, host: &mut impl EventLoop, events: ViewportEvents) -> bool {
        if !events.intersects(ViewportEvents::SCROLL | ViewportEvents::RESIZE) {
            return false;
        }
        let requested = self.frames.schedule(host);
        if self.frames.is_pending() {
            if !requested {
                log::trace!("viewport event coalesced into pending frame");
            }
        } else {
            log::warn!("host refused an animation frame; active section not refreshed");
        }
        requested
    }

    /// The requested animation frame is running. Returns `true` if the active id changed.
    pub fn on_frame(&mut self, host: &impl Geometry<N>) -> bool {
        if !self.frames.take() {
            return false;
        }
        self.spy.refresh(&self.outline, host)
    }

    /// A correction timer fired. Returns `true` if a corrective scroll was issued.
    pub fn on_timer(&mut self, host: &mut impl Navigator<N>, handle: TimerHandle) -> bool {
        self.corrections.fire::<N, _>(host, handle)
    }

    /// A row was activated.
    pub fn click<H>(&mut self, host: &mut H, id: &str, activation: &mut impl Activation) -> ClickOutcome
    where
        H: Navigator<N> + EventLoop,
    {
        navigate::<N, H>(
            host,
            id,
            activation,
            self.spy.active_mut(),
            &mut self.corrections,
            self.config.correction_delay_ms,
        )
    }

    /// Tear down: remove both listeners and cancel the pending frame.
    ///
    /// Correction timers already armed are left to fire; their scroll is harmless.
    pub fn unmount(mut self, host: &mut impl EventLoop) {
        host.unlisten(ViewportEvents::SCROLL);
        host.unlisten(ViewportEvents::RESIZE);
        self.frames.cancel_all(host);
        log::debug!("table of contents unmounted");
    }

    /// The highlighted section id.
    pub fn active_id(&self) -> Option<&str> {
        self.spy.active().get()
    }

    /// Sections in document order.
    pub fn entries(&self) -> &[HeadingEntry] {
        self.outline.entries()
    }

    /// The tracked outline.
    pub fn outline(&self) -> &Outline<N> {
        &self.outline
    }

    /// Active configuration.
    pub fn config(&self) -> &TocConfig {
        &self.config
    }

    /// Whether a recomputation is waiting for the next frame.
    pub fn is_frame_pending(&self) -> bool {
        self.frames.is_pending()
    }

    /// Correction timers armed and not yet fired.
    pub fn armed_corrections(&self) -> &[TimerHandle] {
        self.corrections.armed()
    }

    /// The list to render.
    pub fn view(&self) -> TocView<'_> {
        TocView::new(self.outline.entries(), self.active_id())
    }
}
