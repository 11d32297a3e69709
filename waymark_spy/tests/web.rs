// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser integration tests for the `web` adapter.
//!
//! Run with: wasm-pack test --headless --chrome waymark_spy --features web

#![cfg(all(target_arch = "wasm32", feature = "web"))]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use waymark_spy::adapters::web::WebToc;
use waymark_spy::config::TocConfig;
use waymark_spy::navigate::ClickOutcome;
use web_sys::{Document, Element, Event, Window};

wasm_bindgen_test_configure!(run_in_browser);

/// Three sections far enough apart that each can sit at the tracking line.
const TALL: &str = "<h2>Alpha</h2><div style=\"height:1500px\"></div>\
    <h2>Beta</h2><div style=\"height:1500px\"></div>\
    <h2>Gamma</h2><div style=\"height:3000px\"></div>";

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

/// Replace any previous fixture with a fresh `post-content` container.
fn fixture(inner_html: &str) -> Element {
    let document = document();
    if let Some(old) = document.get_element_by_id("post-content") {
        old.remove();
    }
    let container = document.create_element("div").unwrap();
    container.set_id("post-content");
    container.set_inner_html(inner_html);
    document
        .document_element()
        .unwrap()
        .append_child(&container)
        .unwrap();
    container
}

/// Top edge of the element `id`, relative to the viewport.
fn viewport_top(id: &str) -> f64 {
    document()
        .get_element_by_id(id)
        .unwrap()
        .get_bounding_client_rect()
        .y()
}

fn scroll_y() -> f64 {
    window().scroll_y().unwrap()
}

fn dispatch_scroll() {
    window()
        .dispatch_event(&Event::new("scroll").unwrap())
        .unwrap();
}

async fn next_frame() {
    let promise = Promise::new(&mut |resolve, _| {
        window().request_animation_frame(&resolve).unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Jump to the top and let the resulting scroll event settle.
async fn reset_scroll() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
    next_frame().await;
    next_frame().await;
}

#[wasm_bindgen_test]
fn mount_assigns_ids_in_document_order() {
    let container = fixture("<h2>Intro</h2><p>text</p><h2>Intro</h2><h3>Deep</h3><h2 id=\"kept\">Kept</h2>");
    let toc = WebToc::mount(TocConfig::default()).unwrap();

    let ids: Vec<String> = toc.entries().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, ["intro", "intro-1", "kept"]);

    let first = container.query_selector("h2").unwrap().unwrap();
    assert_eq!(first.id(), "intro");
    toc.unmount();
}

#[wasm_bindgen_test]
fn missing_container_renders_empty_state() {
    if let Some(old) = document().get_element_by_id("post-content") {
        old.remove();
    }
    let toc = WebToc::mount(TocConfig::default()).unwrap();
    assert!(toc.entries().is_empty());
    assert!(toc.render_html().contains("No sections"));
}

#[wasm_bindgen_test]
fn click_on_known_section_activates_it() {
    fixture("<h2>Alpha</h2><h2>Beta</h2>");
    let toc = WebToc::mount(TocConfig::default()).unwrap();
    let event = Event::new("click").unwrap();

    let outcome = toc.click("beta", &event).unwrap();
    assert!(matches!(outcome, ClickOutcome::Navigated { .. }));
    assert_eq!(toc.active_id().as_deref(), Some("beta"));

    let hash = window().location().hash().unwrap();
    assert_eq!(hash, "#beta");
}

#[wasm_bindgen_test]
fn click_on_unknown_section_is_ignored() {
    fixture("<h2>Alpha</h2>");
    let toc = WebToc::mount(TocConfig::default()).unwrap();
    let event = Event::new("click").unwrap();

    assert_eq!(toc.click("nowhere", &event).unwrap(), ClickOutcome::Ignored);
}

#[wasm_bindgen_test]
fn repeated_mounts_tear_down_cleanly() {
    fixture("<h2>Alpha</h2><h2>Beta</h2>");
    for _ in 0..10 {
        let toc = WebToc::mount(TocConfig::default()).unwrap();
        assert_eq!(toc.entries().len(), 2);
        drop(toc);
    }
}

#[wasm_bindgen_test]
async fn scroll_burst_refreshes_once_in_the_next_frame() {
    fixture(TALL);
    reset_scroll().await;
    let toc = WebToc::mount(TocConfig::default()).unwrap();
    assert_eq!(toc.active_id().as_deref(), Some("alpha"));

    let changes = Rc::new(RefCell::new(Vec::<Option<String>>::new()));
    let seen = Rc::clone(&changes);
    toc.on_change(move |active| seen.borrow_mut().push(active.map(String::from)));

    let target = viewport_top("beta") + scroll_y() - 120.0;
    window().scroll_to_with_x_and_y(0.0, target);
    for _ in 0..20 {
        dispatch_scroll();
    }
    // Nothing is recomputed until the frame runs.
    assert!(changes.borrow().is_empty());

    next_frame().await;
    assert_eq!(*changes.borrow(), [Some("beta".to_string())]);
    assert_eq!(toc.active_id().as_deref(), Some("beta"));

    // Same position again: the frame runs but publishes nothing new.
    dispatch_scroll();
    next_frame().await;
    assert_eq!(changes.borrow().len(), 1);
}

#[wasm_bindgen_test]
async fn correction_timer_nudges_the_heading_below_the_top() {
    fixture(TALL);
    reset_scroll().await;
    // A long delay lets the smooth scroll finish before the correction starts.
    let config = TocConfig {
        correction_delay_ms: 1500,
        ..TocConfig::default()
    };
    let toc = WebToc::mount(config).unwrap();

    let event = Event::new("click").unwrap();
    let outcome = toc.click("gamma", &event).unwrap();
    assert_eq!(outcome, ClickOutcome::Navigated { changed: true });

    sleep(1300).await;
    let before = scroll_y();
    assert!(viewport_top("gamma").abs() < 2.0, "smooth scroll left gamma at {}", viewport_top("gamma"));

    sleep(1500).await;
    let after = scroll_y();
    assert!(((before - after) - 104.0).abs() < 2.0, "correction moved {}", before - after);
    assert!((viewport_top("gamma") - 104.0).abs() < 2.0);
}

#[wasm_bindgen_test]
async fn unmounted_toc_ignores_scrolling() {
    fixture(TALL);
    reset_scroll().await;
    let toc = WebToc::mount(TocConfig::default()).unwrap();
    let calls = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&calls);
    toc.on_change(move |_| counter.set(counter.get() + 1));
    toc.unmount();

    let target = viewport_top("beta") + scroll_y() - 120.0;
    window().scroll_to_with_x_and_y(0.0, target);
    dispatch_scroll();
    next_frame().await;
    next_frame().await;
    assert_eq!(calls.get(), 0);
}

#[wasm_bindgen_test]
fn heading_elements_receive_generated_ids() {
    let container = fixture("<h2>Alpha</h2><h2>Alpha</h2>");
    let _toc = WebToc::mount(TocConfig::default()).unwrap();
    let ids: Vec<String> = (0..2)
        .filter_map(|i| container.query_selector_all("h2").unwrap().get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|el| el.id())
        .collect();
    assert_eq!(ids, ["alpha", "alpha-1"]);
}
