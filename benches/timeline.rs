// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-frame timeline work.
//!
//! Measures the performance of:
//! - Time label formatting (runs on every `timeupdate`)
//! - Pointer-to-ratio mapping (runs on every pointer move while scrubbing)
//! - A full scrub gesture through the in-memory platform

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use ws_video_player::application::behavior::seek_ratio;
use ws_video_player::application::port::DocumentEvent;
use ws_video_player::config::{Config, PlayerOptions};
use ws_video_player::domain::ui::{PointerInput, Rect};
use ws_video_player::domain::video::format_duration;
use ws_video_player::infrastructure::{MemoryDocument, MemoryPlayer};

fn bench_format_duration(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline");

    group.bench_function("format_duration", |b| {
        b.iter(|| {
            for secs in [0.0, 59.9, 3_725.0, 86_399.0] {
                black_box(format_duration(black_box(secs)));
            }
        });
    });

    let rect = Rect::new(40.0, 0.0, 800.0, 8.0);
    group.bench_function("seek_ratio", |b| {
        b.iter(|| black_box(seek_ratio(black_box(437.5), rect)));
    });

    group.finish();
}

fn bench_scrub_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("scrub");

    group.bench_function("press_move_release", |b| {
        let document = MemoryDocument::new();
        let mut player = MemoryPlayer::from_config(
            &document,
            &Config::default(),
            PlayerOptions::new("bench.mp4"),
            600.0,
        )
        .expect("valid options");

        b.iter(|| {
            player
                .surface_mut()
                .on_timeline_pointer_down(PointerInput::pressed(100.0));
            for x in [200.0, 400.0, 600.0] {
                player.dispatch(&DocumentEvent::MouseMove(PointerInput::pressed(x)));
            }
            player.dispatch(&DocumentEvent::MouseUp(PointerInput::released(600.0)));
            black_box(player.snapshot());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_format_duration, bench_scrub_gesture);
criterion_main!(benches);
