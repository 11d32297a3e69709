// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline from stored editor content.
//!
//! Derives table-of-contents entries from a rich-text editor state without a
//! rendered page, e.g. for server-side rendering.
//!
//! Run:
//! - `cargo run -p waymark_demos --example lexical_outline`

use waymark_outline::{HeadingLevels, outline_from_editor_json};
use waymark_spy::view::TocView;

const STATE: &str = r#"{
  "root": {
    "type": "root",
    "children": [
      { "type": "heading", "tag": "h2", "children": [{ "type": "text", "text": "Why waymarks?" }] },
      { "type": "paragraph", "children": [{ "type": "text", "text": "Prose." }] },
      { "type": "heading", "tag": "h3", "children": [
          { "type": "text", "text": "A " },
          { "type": "link", "children": [{ "type": "text", "text": "linked" }] },
          { "type": "text", "text": " detail" }
      ] },
      { "type": "heading", "tag": "h2", "children": [{ "type": "text", "text": "Why waymarks?" }] }
    ]
  }
}"#;

fn main() {
    env_logger::init();

    let levels = HeadingLevels::H2 | HeadingLevels::H3;
    let entries = match outline_from_editor_json(STATE, levels) {
        Ok(entries) => entries,
        Err(err) => {
            log::error!("could not read editor state: {err}");
            return;
        }
    };
    for entry in &entries {
        println!("{:<24} {}", entry.href(), entry.text);
    }
    println!("{}", TocView::new(&entries, None).render_html());
}
