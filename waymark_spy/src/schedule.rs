// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot coalescing frame scheduler.
//!
//! Scroll and resize events can fire many times per frame. [`FrameSlot`] keeps at
//! most one animation-frame request outstanding: the first trigger requests a
//! frame, later triggers are dropped until that frame runs or is cancelled.
//! Execution is single-threaded, so a plain flag is enough; only reentrancy
//! needs guarding.

use crate::types::{EventLoop, FrameHandle};

/// At most one outstanding animation-frame request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameSlot {
    pending: Option<FrameHandle>,
}

impl FrameSlot {
    /// Create an idle slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a frame unless one is already pending.
    ///
    /// Returns `true` when a new frame was requested. Returns `false` when the
    /// trigger was coalesced into the pending one, or when the host refused the
    /// request; the slot then stays idle so the next trigger asks again.
    pub fn schedule(&mut self, host: &mut impl EventLoop) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = host.request_frame();
        self.pending.is_some()
    }

    /// Mark the pending frame as running. Returns `false` for a stale callback.
    pub fn take(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Cancel the pending frame, if any.
    pub fn cancel_all(&mut self, host: &mut impl EventLoop) {
        if let Some(handle) = self.pending.take() {
            host.cancel_frame(handle);
        }
    }

    /// The outstanding request.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Whether a frame is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ListenerOptions, TimerHandle, ViewportEvents};
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Frames {
        refuse: bool,
        next: u32,
        requested: Vec<FrameHandle>,
        cancelled: Vec<FrameHandle>,
    }

    impl EventLoop for Frames {
        fn listen(&mut self, _: ViewportEvents, _: ListenerOptions) {}
        fn unlisten(&mut self, _: ViewportEvents) {}
        fn request_frame(&mut self) -> Option<FrameHandle> {
            if self.refuse {
                return None;
            }
            self.next += 1;
            let handle = FrameHandle(self.next);
            self.requested.push(handle);
            Some(handle)
        }
        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.cancelled.push(handle);
        }
        fn set_timeout(&mut self, _: u32) -> TimerHandle {
            TimerHandle(0)
        }
    }

    #[test]
    fn burst_requests_one_frame() {
        let mut host = Frames::default();
        let mut slot = FrameSlot::new();
        let requested = (0..50).filter(|_| slot.schedule(&mut host)).count();
        assert_eq!(requested, 1);
        assert_eq!(host.requested, [FrameHandle(1)]);
        assert_eq!(slot.pending(), Some(FrameHandle(1)));
    }

    #[test]
    fn slot_reopens_after_frame_runs() {
        let mut host = Frames::default();
        let mut slot = FrameSlot::new();
        assert!(slot.schedule(&mut host));
        assert!(slot.take());
        assert!(!slot.take());
        assert!(slot.schedule(&mut host));
        assert_eq!(host.requested.len(), 2);
    }

    #[test]
    fn refused_request_leaves_slot_idle() {
        let mut host = Frames {
            refuse: true,
            ..Frames::default()
        };
        let mut slot = FrameSlot::new();
        assert!(!slot.schedule(&mut host));
        assert!(!slot.is_pending());

        host.refuse = false;
        assert!(slot.schedule(&mut host));
        assert_eq!(slot.pending(), Some(FrameHandle(1)));
    }

    #[test]
    fn cancel_all_releases_pending_request() {
        let mut host = Frames::default();
        let mut slot = FrameSlot::new();
        slot.cancel_all(&mut host);
        assert!(host.cancelled.is_empty());

        slot.schedule(&mut host);
        slot.cancel_all(&mut host);
        assert_eq!(host.cancelled, [FrameHandle(1)]);
        assert!(!slot.is_pending());
    }
}
