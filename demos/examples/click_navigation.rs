// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click navigation.
//!
//! Clicks a table-of-contents row, then plays out the smooth scroll, the
//! delayed correction, and the address-bar update on an in-memory page.
//!
//! Run:
//! - `cargo run -p waymark_demos --example click_navigation`

use waymark_outline::MemoryDocument;
use waymark_spy::config::TocConfig;
use waymark_spy::memory::MemoryPage;
use waymark_spy::toc::Toc;
use waymark_spy::types::RecordedActivation;

fn main() {
    env_logger::init();

    let mut doc = MemoryDocument::new();
    let body = doc.container("post-content");
    doc.heading(body, 2, "Intro", 100.0);
    doc.heading(body, 2, "Details", 1000.0);
    doc.heading(body, 2, "Appendix", 2400.0);

    let config = TocConfig::from_json(r#"{ "offset": 96, "landing_gap": 12 }"#)
        .unwrap_or_default();
    let mut page = MemoryPage::new(doc);
    let mut toc = Toc::mount(&mut page, config);

    for id in ["details", "missing", "appendix"] {
        let mut click = RecordedActivation::default();
        let outcome = toc.click(&mut page, id, &mut click);
        println!(
            "click {id:?}: {outcome:?}  default_prevented={}  fragment={:?}",
            click.default_prevented,
            page.fragment()
        );
        while let Some(timer) = page.take_timer() {
            toc.on_timer(&mut page, timer);
        }
        for call in page.scrolls() {
            println!("    {call:?}");
        }
        println!("    active={:?}  history entries={}", toc.active_id(), page.history_len());
    }

    toc.unmount(&mut page);
}
