// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the detail view hot paths.
//!
//! Measures:
//! - Carousel navigation with lightbox zoom and rotation
//! - Description parsing and speech text preparation
//! - Still image decoding

use concept_lens::application::speech;
use concept_lens::domain::description;
use concept_lens::media;
use concept_lens::ui::viewer::ViewerState;
use criterion::{criterion_group, criterion_main, Criterion};
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::hint::black_box;
use std::io::Cursor;

fn sample_description() -> String {
    let section = "## Setting\n\nA floating archipelago where **tides** run upward.\n\
                   - Sky whales\n- Lantern markets\n\n";
    format!("# Skyward Tides\n\n{}", section.repeat(20))
}

fn sample_png() -> Vec<u8> {
    let img = RgbaImage::from_pixel(640, 360, Rgba([40, 80, 160, 255]));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .expect("encode sample png");
    bytes.into_inner()
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_navigation");

    group.bench_function("cycle_ten_images", |b| {
        b.iter(|| {
            let mut viewer = ViewerState::new();
            viewer.set_count(10);
            for _ in 0..10 {
                viewer.next();
            }
            black_box(viewer.index());
        });
    });

    group.bench_function("fullscreen_zoom_rotate", |b| {
        b.iter(|| {
            let mut viewer = ViewerState::new();
            viewer.set_count(3);
            viewer.open_fullscreen();
            while viewer.zoom_in() {}
            for _ in 0..4 {
                viewer.rotate();
            }
            viewer.next();
            black_box(viewer.zoom());
        });
    });

    group.finish();
}

fn bench_description(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_navigation");
    let text = sample_description();

    group.bench_function("parse_description", |b| {
        b.iter(|| black_box(description::parse(black_box(&text))));
    });

    group.bench_function("sanitize_for_speech", |b| {
        b.iter(|| black_box(speech::sanitize(black_box(&text))));
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_navigation");
    let png = sample_png();

    group.bench_function("decode_png", |b| {
        b.iter(|| black_box(media::decode_asset("concept.png", &png).expect("decodes")));
    });

    group.finish();
}

criterion_group!(benches, bench_navigate, bench_description, bench_decode);
criterion_main!(benches);
