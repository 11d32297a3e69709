// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use waymark_outline::{HeadingLevels, MemoryDocument, extract_outline, slugify};

/// An article with `n` sections; every fourth title repeats an earlier one.
fn article(n: usize) -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    let body = doc.container("post-content");
    for i in 0..n {
        let title = if i % 4 == 3 {
            format!("Section {}", i - 3)
        } else {
            format!("Section {i}")
        };
        doc.heading(body, 2, &title, i as f64 * 600.0);
        doc.element(body, "p", "Body text.", i as f64 * 600.0 + 60.0);
        if i % 2 == 0 {
            doc.heading(body, 3, "Details", i as f64 * 600.0 + 300.0);
        }
    }
    doc
}

fn bench_slugify(c: &mut Criterion) {
    let mut group = c.benchmark_group("slugify");
    let titles = [
        "Getting Started",
        "  What's new in 2.0?  ",
        "A rather long heading that keeps going well past the eighty character limit on slugs",
    ];
    group.throughput(Throughput::Elements(titles.len() as u64));
    group.bench_function("mixed_titles", |b| {
        b.iter(|| {
            for t in titles {
                black_box(slugify(black_box(t)));
            }
        });
    });
    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_outline");
    for &n in &[10_usize, 100, 1000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("fresh_n{n}"), |b| {
            b.iter_batched(
                || article(n),
                |mut doc| black_box(extract_outline(&mut doc, "post-content", HeadingLevels::H2)),
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("remount_n{n}"), |b| {
            let mut doc = article(n);
            extract_outline(&mut doc, "post-content", HeadingLevels::H2);
            b.iter(|| black_box(extract_outline(&mut doc, "post-content", HeadingLevels::H2)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_slugify, bench_extract);
criterion_main!(benches);
