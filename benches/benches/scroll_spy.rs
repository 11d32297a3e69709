// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use waymark_outline::MemoryDocument;
use waymark_spy::active::closest_to_offset;
use waymark_spy::config::TocConfig;
use waymark_spy::memory::MemoryPage;
use waymark_spy::toc::Toc;
use waymark_spy::types::ViewportEvents;

fn page(n: usize) -> MemoryPage {
    let mut doc = MemoryDocument::new();
    let body = doc.container("post-content");
    for i in 0..n {
        doc.heading(body, 2, &format!("Section {i}"), i as f64 * 500.0);
    }
    MemoryPage::new(doc)
}

fn bench_closest(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_to_offset");
    for &n in &[10_usize, 100, 1000] {
        let ids: Vec<String> = (0..n).map(|i| format!("section-{i}")).collect();
        let tops: Vec<f64> = (0..n).map(|i| i as f64 * 500.0 - 12_345.0).collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n{n}"), |b| {
            b.iter(|| {
                let candidates = ids.iter().map(String::as_str).zip(tops.iter().copied());
                black_box(closest_to_offset(candidates, black_box(120.0)));
            });
        });
    }
    group.finish();
}

fn bench_scroll_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_burst");
    for &n in &[10_usize, 100] {
        let mut page = page(n);
        let mut toc = Toc::mount(&mut page, TocConfig::default());
        let mut y = 0.0;
        group.throughput(Throughput::Elements(50));
        group.bench_function(format!("events50_n{n}"), |b| {
            b.iter(|| {
                for _ in 0..50 {
                    y = (y + 37.0) % (n as f64 * 500.0);
                    page.scroll_to(y);
                    toc.on_viewport_event(&mut page, ViewportEvents::SCROLL);
                }
                while page.take_frame().is_some() {
                    black_box(toc.on_frame(&page));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_closest, bench_scroll_burst);
criterion_main!(benches);
