// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser host over `web-sys`.
//!
//! ## Feature
//!
//! Enable with `web`.
//!
//! ## Notes
//!
//! [`WebPage`] implements the capability traits over the global `window` and its
//! document. [`WebToc`] owns the page and a mounted [`Toc`] behind a shared cell,
//! and wires the browser callbacks (scroll and resize listeners, animation frames,
//! correction timeouts) back into it. Callbacks hold only a weak reference, so a
//! late timeout after teardown finds nothing to do.
//!
//! ```no_run
//! use waymark_spy::adapters::web::WebToc;
//! use waymark_spy::config::TocConfig;
//!
//! let toc = WebToc::mount(TocConfig::default()).unwrap();
//! toc.on_change(|active| log::info!("active section: {active:?}"));
//! let markup = toc.render_html();
//! # let _ = markup;
//! ```

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::{Rc, Weak};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use js_sys::Function;
use kurbo::{Rect, Vec2};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use waymark_outline::{HeadingEntry, HeadingLevels, HeadingSource, IdSet};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, NodeList, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

use crate::config::TocConfig;
use crate::navigate::ClickOutcome;
use crate::toc::Toc;
use crate::types::{
    Activation, EventLoop, FrameHandle, Geometry, ListenerOptions, Navigator, TimerHandle,
    ViewportEvents,
};

/// The browser environment is not usable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WebError {
    /// There is no global `window` (e.g. running in a worker).
    #[error("no global `window` is available")]
    NoWindow,
    /// The window has no document.
    #[error("the window has no document")]
    NoDocument,
    /// The component is busy handling another callback.
    #[error("the table of contents is busy")]
    Busy,
}

const VIEWPORT_EVENTS: [(ViewportEvents, &str); 2] = [
    (ViewportEvents::SCROLL, "scroll"),
    (ViewportEvents::RESIZE, "resize"),
];

struct Callbacks {
    viewport: Closure<dyn FnMut(Event)>,
    frame: Closure<dyn FnMut(f64)>,
    timer: Rc<dyn Fn(TimerHandle)>,
}

/// The browser window as a host.
pub struct WebPage {
    window: Window,
    document: Document,
    callbacks: Option<Callbacks>,
    next_timer: u32,
}

impl core::fmt::Debug for WebPage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WebPage")
            .field("wired", &self.callbacks.is_some())
            .field("next_timer", &self.next_timer)
            .finish_non_exhaustive()
    }
}

impl WebPage {
    /// A host for the current window. Its event-loop methods are inert until a
    /// [`WebToc`] wires callbacks into it.
    pub fn current() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        Ok(Self {
            window,
            document,
            callbacks: None,
            next_timer: 0,
        })
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl HeadingSource for WebPage {
    type Heading = Element;
    type Container = Element;

    fn find_container(&self, marker: &str) -> Option<Element> {
        self.document.get_element_by_id(marker)
    }

    fn locate_headings(&self, container: &Element, levels: HeadingLevels) -> Vec<Element> {
        let selector = levels.selector();
        if selector.is_empty() {
            return Vec::new();
        }
        match container.query_selector_all(&selector) {
            Ok(list) => elements(&list),
            Err(err) => {
                log::warn!("heading query `{selector}` failed: {err:?}");
                Vec::new()
            }
        }
    }

    fn read_text(&self, heading: &Element) -> String {
        heading
            .text_content()
            .map(|text| text.trim().to_string())
            .unwrap_or_default()
    }

    fn read_id(&self, heading: &Element) -> Option<String> {
        let id = heading.id();
        (!id.is_empty()).then_some(id)
    }

    fn assign_id(&mut self, heading: &Element, id: &str) {
        heading.set_id(id);
    }

    fn document_ids(&self) -> IdSet {
        match self.document.query_selector_all("[id]") {
            Ok(list) => elements(&list)
                .into_iter()
                .map(|el| el.id())
                .filter(|id| !id.is_empty())
                .collect(),
            Err(_) => IdSet::new(),
        }
    }
}

impl Geometry<Element> for WebPage {
    fn bounds(&self, node: &Element) -> Option<Rect> {
        if !node.is_connected() {
            return None;
        }
        let r = node.get_bounding_client_rect();
        Some(Rect::from_origin_size((r.x(), r.y()), (r.width(), r.height())))
    }
}

impl Navigator<Element> for WebPage {
    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn scroll_into_view(&mut self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn scroll_by(&mut self, delta: Vec2) {
        let options = ScrollToOptions::new();
        options.set_left(delta.x);
        options.set_top(delta.y);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_by_with_scroll_to_options(&options);
    }

    fn replace_fragment(&mut self, id: &str) {
        let result = self
            .window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{id}"))));
        if let Err(err) = result {
            log::warn!("could not replace the address fragment: {err:?}");
        }
    }
}

impl EventLoop for WebPage {
    fn listen(&mut self, events: ViewportEvents, options: ListenerOptions) {
        let Some(callbacks) = &self.callbacks else {
            log::warn!("listen called on an unwired page");
            return;
        };
        let listener_options = AddEventListenerOptions::new();
        listener_options.set_passive(options.contains(ListenerOptions::PASSIVE));
        let listener = callbacks.viewport.as_ref().unchecked_ref::<Function>();
        for (flag, name) in VIEWPORT_EVENTS {
            if events.contains(flag)
                && let Err(err) = self
                    .window
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        name,
                        listener,
                        &listener_options,
                    )
            {
                log::warn!("could not listen for `{name}`: {err:?}");
            }
        }
    }

    fn unlisten(&mut self, events: ViewportEvents) {
        let Some(callbacks) = &self.callbacks else {
            return;
        };
        let listener = callbacks.viewport.as_ref().unchecked_ref::<Function>();
        for (flag, name) in VIEWPORT_EVENTS {
            if events.contains(flag)
                && let Err(err) = self.window.remove_event_listener_with_callback(name, listener)
            {
                log::warn!("could not stop listening for `{name}`: {err:?}");
            }
        }
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        let Some(callbacks) = &self.callbacks else {
            log::warn!("request_frame called on an unwired page");
            return None;
        };
        match self
            .window
            .request_animation_frame(callbacks.frame.as_ref().unchecked_ref::<Function>())
        {
            Ok(id) => Some(FrameHandle(id.cast_unsigned())),
            Err(err) => {
                log::error!("requestAnimationFrame failed: {err:?}");
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(err) = self.window.cancel_animation_frame(handle.0.cast_signed()) {
            log::warn!("cancelAnimationFrame failed: {err:?}");
        }
    }

    fn set_timeout(&mut self, delay_ms: u32) -> TimerHandle {
        self.next_timer += 1;
        let handle = TimerHandle(self.next_timer);
        let Some(callbacks) = &self.callbacks else {
            log::warn!("set_timeout called on an unwired page");
            return handle;
        };
        let fired = Rc::clone(&callbacks.timer);
        let callback = Closure::once_into_js(move || fired(handle));
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref::<Function>(), delay)
        {
            log::warn!("setTimeout failed: {err:?}");
        }
        handle
    }
}

struct EventActivation<'a>(&'a Event);

impl Activation for EventActivation<'_> {
    fn prevent_default(&mut self) {
        self.0.prevent_default();
    }
}

type ChangeListener = Box<dyn FnMut(Option<&str>)>;

struct Shared {
    page: WebPage,
    toc: Option<Toc<Element>>,
    on_change: Option<ChangeListener>,
}

impl Shared {
    fn notify(&mut self) {
        if let (Some(listener), Some(toc)) = (self.on_change.as_mut(), self.toc.as_ref()) {
            listener(toc.active_id());
        }
    }
}

fn with_shared(weak: &Weak<RefCell<Shared>>, f: impl FnOnce(&mut Shared)) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    match shared.try_borrow_mut() {
        Ok(mut guard) => f(&mut guard),
        Err(_) => log::warn!("table-of-contents callback re-entered; dropped"),
    };
}

impl Callbacks {
    fn new(weak: &Weak<RefCell<Shared>>) -> Self {
        let w = weak.clone();
        let viewport = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let events = if event.type_() == "resize" {
                ViewportEvents::RESIZE
            } else {
                ViewportEvents::SCROLL
            };
            with_shared(&w, |state| {
                if let Some(toc) = state.toc.as_mut() {
                    toc.on_viewport_event(&mut state.page, events);
                }
            });
        });

        let w = weak.clone();
        let frame = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
            with_shared(&w, |state| {
                let changed = match state.toc.as_mut() {
                    Some(toc) => toc.on_frame(&state.page),
                    None => false,
                };
                if changed {
                    state.notify();
                }
            });
        });

        let w = weak.clone();
        let timer: Rc<dyn Fn(TimerHandle)> = Rc::new(move |handle| {
            with_shared(&w, |state| {
                if let Some(toc) = state.toc.as_mut() {
                    toc.on_timer(&mut state.page, handle);
                }
            });
        });

        Self {
            viewport,
            frame,
            timer,
        }
    }
}

/// A table of contents mounted on the current page.
///
/// Dropping it (or calling [`WebToc::unmount`]) removes the listeners and
/// cancels the pending frame.
pub struct WebToc {
    shared: Rc<RefCell<Shared>>,
}

impl core::fmt::Debug for WebToc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WebToc")
            .field("active", &self.active_id())
            .finish_non_exhaustive()
    }
}

impl WebToc {
    /// Scan the configured container on the current page and start tracking.
    pub fn mount(config: TocConfig) -> Result<Self, WebError> {
        let page = WebPage::current()?;
        let shared = Rc::new(RefCell::new(Shared {
            page,
            toc: None,
            on_change: None,
        }));
        {
            let mut guard = shared.borrow_mut();
            let state = &mut *guard;
            state.page.callbacks = Some(Callbacks::new(&Rc::downgrade(&shared)));
            state.toc = Some(Toc::mount(&mut state.page, config));
        }
        Ok(Self { shared })
    }

    /// Call `listener` with the new active id whenever it changes.
    pub fn on_change(&self, listener: impl FnMut(Option<&str>) + 'static) {
        if let Ok(mut state) = self.shared.try_borrow_mut() {
            state.on_change = Some(Box::new(listener));
        }
    }

    /// Route a click on the row for `id`; `event` is the click event.
    pub fn click(&self, id: &str, event: &Event) -> Result<ClickOutcome, WebError> {
        let mut guard = self.shared.try_borrow_mut().map_err(|_| WebError::Busy)?;
        let state = &mut *guard;
        let Some(toc) = state.toc.as_mut() else {
            return Ok(ClickOutcome::Ignored);
        };
        let outcome = toc.click(&mut state.page, id, &mut EventActivation(event));
        if outcome == (ClickOutcome::Navigated { changed: true }) {
            state.notify();
        }
        Ok(outcome)
    }

    /// The highlighted section id.
    pub fn active_id(&self) -> Option<String> {
        let state = self.shared.try_borrow().ok()?;
        state.toc.as_ref()?.active_id().map(String::from)
    }

    /// Sections in document order.
    pub fn entries(&self) -> Vec<HeadingEntry> {
        self.shared
            .try_borrow()
            .ok()
            .and_then(|state| state.toc.as_ref().map(|toc| toc.entries().to_vec()))
            .unwrap_or_default()
    }

    /// Current navigation markup.
    pub fn render_html(&self) -> String {
        self.shared
            .try_borrow()
            .ok()
            .and_then(|state| state.toc.as_ref().map(|toc| toc.view().render_html()))
            .unwrap_or_default()
    }

    /// Tear down now instead of on drop.
    pub fn unmount(self) {}

    fn teardown(&self) {
        let Ok(mut guard) = self.shared.try_borrow_mut() else {
            log::error!("table of contents dropped while one of its callbacks was running");
            return;
        };
        let state = &mut *guard;
        if let Some(toc) = state.toc.take() {
            toc.unmount(&mut state.page);
        }
        state.page.callbacks = None;
        state.on_change = None;
    }
}

impl Drop for WebToc {
    fn drop(&mut self) {
        self.teardown();
    }
}
