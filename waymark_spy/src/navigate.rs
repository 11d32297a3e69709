// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click navigation to a table-of-contents target.
//!
//! ## Sequence
//!
//! 1) Suppress the default anchor jump.
//! 2) Resolve the target by id; if it is gone, stop here.
//! 3) Smooth-scroll the target's top edge to the viewport top.
//! 4) Arm a one-shot timer; when it fires, scroll by `-(offset) + landing_gap`
//!    so the heading settles just below the viewport edge.
//! 5) Mark the target active right away, without waiting for the tracker.
//! 6) Replace the address fragment with `#id`, without a new history entry.
//!
//! The corrective scroll is a fixed-delay heuristic and does not wait for the
//! smooth scroll to finish. Its timers are not cancelled on unmount; a late
//! correction only nudges the viewport.

use alloc::vec::Vec;

use kurbo::Vec2;

use crate::active::ActiveSection;
use crate::types::{Activation, EventLoop, Navigator, TimerHandle};

/// Result of a click on a table-of-contents entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The target was found and navigation started.
    Navigated {
        /// Whether the active id changed.
        changed: bool,
    },
    /// The target id is not in the document; nothing happened beyond
    /// suppressing the default action.
    Ignored,
}

/// Outstanding corrective scrolls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Corrections {
    armed: Vec<TimerHandle>,
    delta: f64,
}

impl Corrections {
    /// Corrections that scroll by `delta` pixels vertically.
    pub fn new(delta: f64) -> Self {
        Self {
            armed: Vec::new(),
            delta,
        }
    }

    /// Arm a correction after `delay_ms`.
    pub fn arm(&mut self, host: &mut impl EventLoop, delay_ms: u32) -> TimerHandle {
        let handle = host.set_timeout(delay_ms);
        self.armed.push(handle);
        handle
    }

    /// Apply the correction for a fired timer.
    ///
    /// Unknown handles are ignored. Returns `true` if a scroll was issued.
    pub fn fire<N, H: Navigator<N>>(&mut self, host: &mut H, handle: TimerHandle) -> bool {
        let Some(pos) = self.armed.iter().position(|&h| h == handle) else {
            return false;
        };
        self.armed.remove(pos);
        host.scroll_by(Vec2::new(0.0, self.delta));
        true
    }

    /// Timers armed but not yet fired.
    pub fn armed(&self) -> &[TimerHandle] {
        &self.armed
    }
}

/// Navigate to the heading `id` in response to `activation`.
pub fn navigate<N, H>(
    host: &mut H,
    id: &str,
    activation: &mut impl Activation,
    active: &mut ActiveSection,
    corrections: &mut Corrections,
    delay_ms: u32,
) -> ClickOutcome
where
    H: Navigator<N> + EventLoop,
{
    activation.prevent_default();
    let Some(target) = host.element_by_id(id) else {
        log::warn!("table-of-contents target `{id}` is not in the document");
        return ClickOutcome::Ignored;
    };
    host.scroll_into_view(&target);
    corrections.arm(host, delay_ms);
    let changed = active.set(id);
    host.replace_fragment(id);
    ClickOutcome::Navigated { changed }
}
