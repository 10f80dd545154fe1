// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel operations.
//!
//! Measures the performance of:
//! - Index navigation (next/previous/select) with centering
//! - Drag offset computation over a pointer trace
//! - Edge flag recomputation from viewport reports

use criterion::{criterion_group, criterion_main, Criterion};
use showroom::ui::gallery::{Carousel, GallerySettings, StripMetrics};
use std::hint::black_box;

const IMAGE_COUNT: usize = 40;

fn build_carousel() -> Carousel {
    let images = (0..IMAGE_COUNT)
        .map(|i| format!("https://cdn.example.com/listing/{i}.jpg"))
        .collect();
    let mut carousel = Carousel::new(images, "Range Rover Sport 2022", GallerySettings::default());
    carousel.recompute_edge_flags(StripMetrics {
        offset: 0.0,
        content_width: IMAGE_COUNT as f32 * 120.0,
        visible_width: 720.0,
    });
    carousel
}

/// Benchmark a full lap of next/previous navigation.
fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("next_full_cycle", |b| {
        let mut carousel = build_carousel();
        b.iter(|| {
            for _ in 0..IMAGE_COUNT {
                black_box(carousel.next());
            }
        });
    });

    group.bench_function("previous_full_cycle", |b| {
        let mut carousel = build_carousel();
        b.iter(|| {
            for _ in 0..IMAGE_COUNT {
                black_box(carousel.previous());
            }
        });
    });

    group.bench_function("select_every_index", |b| {
        let mut carousel = build_carousel();
        b.iter(|| {
            for index in (0..IMAGE_COUNT).rev() {
                black_box(carousel.select_index(index));
            }
        });
    });

    group.finish();
}

/// Benchmark drag math over a pointer trace of 200 moves.
fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let trace: Vec<f32> = (0..200).map(|i| 400.0 - i as f32 * 1.5).collect();

    group.bench_function("drag_trace", |b| {
        let mut carousel = build_carousel();
        b.iter(|| {
            carousel.begin_drag(400.0);
            for &x in &trace {
                black_box(carousel.continue_drag(x));
            }
            carousel.end_drag();
        });
    });

    group.bench_function("edge_flags", |b| {
        let mut carousel = build_carousel();
        let mut offset = 0.0_f32;
        b.iter(|| {
            offset = (offset + 37.0) % 4000.0;
            black_box(carousel.recompute_edge_flags(StripMetrics {
                offset,
                content_width: 4800.0,
                visible_width: 720.0,
            }));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_navigation, bench_drag);
criterion_main!(benches);
