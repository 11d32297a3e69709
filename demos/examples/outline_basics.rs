// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline basics.
//!
//! Builds a small article in memory, extracts its level-2 outline, and shows
//! how duplicate titles and authored ids are resolved.
//!
//! Run:
//! - `cargo run -p waymark_demos --example outline_basics`

use waymark_outline::{HeadingLevels, MemoryDocument, extract_outline, slugify};

fn main() {
    env_logger::init();

    let mut doc = MemoryDocument::new();
    let body = doc.container("post-content");
    doc.heading(body, 1, "A Field Guide", 0.0);
    doc.heading(body, 2, "Getting Started!", 120.0);
    doc.element(body, "p", "Some prose.", 180.0);
    let authored = doc.heading(body, 2, "Setup", 600.0);
    doc.set_id(authored, "install");
    doc.heading(body, 3, "Edge cases", 900.0);
    doc.heading(body, 2, "Getting started", 1400.0);
    doc.heading(body, 2, "   ", 1800.0);

    println!("== Slugs ==");
    for text in ["Getting Started!", "C++ & Rust", "   ", "Ünïcode title"] {
        println!("  {text:?} -> {:?}", slugify(text));
    }

    let outline = extract_outline(&mut doc, "post-content", HeadingLevels::H2);
    println!("== Outline (h2) ==");
    for entry in outline.entries() {
        println!("  {:<20} {:?}", entry.href(), entry.text);
    }

    // Extraction is idempotent: ids written on the first pass are reused.
    let again = extract_outline(&mut doc, "post-content", HeadingLevels::H2 | HeadingLevels::H3);
    println!("== Outline (h2, h3) ==");
    for entry in again.entries() {
        println!("  {:<20} {:?}", entry.href(), entry.text);
    }
}
