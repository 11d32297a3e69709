// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll spy.
//!
//! Mounts a table of contents on an in-memory page, scrolls through it in
//! bursts, and prints the highlighted section after each animation frame.
//! Each burst fires many scroll events but requests a single frame.
//!
//! Run:
//! - `cargo run -p waymark_demos --example scroll_spy`

use waymark_outline::MemoryDocument;
use waymark_spy::config::TocConfig;
use waymark_spy::memory::MemoryPage;
use waymark_spy::toc::Toc;
use waymark_spy::types::ViewportEvents;

fn main() {
    env_logger::init();

    let mut doc = MemoryDocument::new();
    let body = doc.container("post-content");
    for (i, title) in ["Overview", "Install", "Configure", "Deploy", "FAQ"].iter().enumerate() {
        doc.heading(body, 2, title, 200.0 + 700.0 * i as f64);
    }

    let mut page = MemoryPage::new(doc);
    let mut toc = Toc::mount(&mut page, TocConfig::default());
    println!("mounted: active={:?}", toc.active_id());

    for target in [300.0, 800.0, 1500.0, 2200.0, 2900.0, 0.0] {
        let start = page.scroll_y();
        for step in 1..=20 {
            page.scroll_to(start + (target - start) * f64::from(step) / 20.0);
            toc.on_viewport_event(&mut page, ViewportEvents::SCROLL);
        }
        let mut frames = 0;
        while page.take_frame().is_some() {
            toc.on_frame(&page);
            frames += 1;
        }
        println!(
            "scrollY={:>6.0}  frames={frames}  active={:?}",
            page.scroll_y(),
            toc.active_id()
        );
    }

    println!("{}", toc.view().render_html());
    toc.unmount(&mut page);
    println!("listeners after unmount: {}", page.listener_count());
}
