//! Hover-Intent Benchmarks
//!
//! Measures the per-event cost of the pointer tracker and of a full
//! enter/move/leave/dismiss cycle through the sidebar.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::{Duration, Instant};

use portfolio_nav::menu::HoverIntentConfig;
use portfolio_nav::nav::{MenuEvent, NavConfig, Sidebar};
use portfolio_nav::pointer::{PointerTracker, TrackerConfig};

/// Generate a pointer path drifting down and slightly right
fn generate_path(len: usize) -> Vec<(f64, f64)> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            (100.0 + t * 0.3, 100.0 + t * 2.0)
        })
        .collect()
}

/// Benchmark sample insertion plus heading estimate at various history sizes
fn bench_tracker(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_tracker");
    let path = generate_path(1_000);
    group.throughput(Throughput::Elements(path.len() as u64));

    for history_size in [2usize, 3, 8, 32] {
        group.bench_with_input(
            BenchmarkId::new("move_and_estimate", history_size),
            &history_size,
            |b, &history_size| {
                let start = Instant::now();
                b.iter(|| {
                    let mut tracker = PointerTracker::new(TrackerConfig {
                        history_size,
                        ..Default::default()
                    });
                    let mut heading = 0usize;
                    for (i, &(x, y)) in path.iter().enumerate() {
                        tracker.on_pointer_move(x, y, start + Duration::from_millis(i as u64));
                        heading += tracker.estimate_heading_toward_submenu() as usize;
                    }
                    black_box(heading)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark a hover/leave/dismiss cycle through the sidebar
fn bench_hover_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_cycle");

    let enter = MenuEvent::ItemEnter {
        section: "web_design".into(),
        item: "Utility UI".into(),
    };
    let leave = MenuEvent::ItemLeave {
        section: "web_design".into(),
        item: "Utility UI".into(),
    };

    group.bench_function("enter_move_leave_dismiss", |b| {
        let mut sidebar = Sidebar::new(NavConfig::portfolio(), HoverIntentConfig::default());
        let t0 = Instant::now();
        b.iter(|| {
            sidebar.dispatch(&enter, t0);
            sidebar.dispatch(&MenuEvent::PointerMove { x: 100.0, y: 100.0 }, t0);
            sidebar.dispatch(&MenuEvent::PointerMove { x: 104.0, y: 130.0 }, t0);
            sidebar.dispatch(&leave, t0);
            black_box(sidebar.poll(t0 + Duration::from_millis(400)))
        })
    });

    group.bench_function("snapshot", |b| {
        let mut sidebar = Sidebar::new(NavConfig::portfolio(), HoverIntentConfig::default());
        sidebar.dispatch(&enter, Instant::now());
        b.iter(|| black_box(sidebar.snapshot()))
    });

    group.finish();
}

criterion_group!(benches, bench_tracker, bench_hover_cycle);
criterion_main!(benches);
