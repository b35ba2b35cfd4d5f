//! Gesture dispatch and momentum performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::{Duration, Instant};
use touchtext::geometry::{Delta, Point, Rect, SelectionRange, Size, TextPosition};
use touchtext::scroll::{ScrollMomentumEngine, ScrollPolicy};
use touchtext::surface::{EditCommand, TextSurface};
use touchtext::touch::{AxisLock, GestureRouter, TouchEvent};

/// Minimal scroll-only surface for momentum benchmarks.
struct Pane {
    offset: Point,
    extent: Size,
}

impl TextSurface for Pane {
    fn caret(&self) -> TextPosition {
        TextPosition::default()
    }
    fn set_caret(&mut self, _pos: TextPosition) {}
    fn selection(&self) -> SelectionRange {
        SelectionRange::default()
    }
    fn set_selection_anchor(&mut self, _pos: TextPosition) {}
    fn extend_selection_to(&mut self, _pos: TextPosition) {}
    fn selected_text(&self) -> Option<String> {
        None
    }
    fn line_text(&self, _row: u32) -> String {
        String::new()
    }
    fn last_line(&self) -> u32 {
        0
    }
    fn scroll_offset(&self) -> Point {
        self.offset
    }
    fn scroll_extent(&self) -> Size {
        self.extent
    }
    fn scroll_by(&mut self, delta: Delta) {
        self.offset.x = (self.offset.x + delta.dx).clamp(0.0, self.extent.width);
        self.offset.y = (self.offset.y + delta.dy).clamp(0.0, self.extent.height);
    }
    fn scroll_to_line(&mut self, _row: u32) {}
    fn screen_to_text(&self, _point: Point) -> TextPosition {
        TextPosition::default()
    }
    fn text_to_screen(&self, _pos: TextPosition) -> Point {
        Point::ZERO
    }
    fn line_height(&self) -> f32 {
        16.0
    }
    fn container_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 320.0, 480.0)
    }
    fn is_read_only(&self) -> bool {
        false
    }
    fn is_row_visible(&self, _row: u32) -> bool {
        true
    }
    fn execute(&mut self, _command: EditCommand) {}
}

/// Benchmark gesture classification over canned touch traces.
fn bench_router_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("router");
    let long_press = Duration::from_millis(500);
    let double_tap = Duration::from_millis(300);

    group.bench_function("tap", |b| {
        let t0 = Instant::now();
        b.iter(|| {
            let mut router = GestureRouter::new(long_press, double_tap);
            let _ = router.handle(black_box(TouchEvent::start(10.0, 10.0)), t0);
            let _ = router.handle(
                black_box(TouchEvent::end(10.0, 10.0)),
                t0 + Duration::from_millis(50),
            );
        });
    });

    group.bench_function("pan_trace_32", |b| {
        let t0 = Instant::now();
        b.iter(|| {
            let mut router = GestureRouter::new(long_press, double_tap);
            let _ = router.handle(TouchEvent::start(100.0, 100.0), t0);
            for i in 0..32u32 {
                let t = t0 + Duration::from_millis(u64::from(i) * 8);
                let y = 100.0 + i as f32 * 3.0;
                let _ = router.handle(black_box(TouchEvent::moved(100.0, y)), t);
            }
            let _ = router.handle(
                TouchEvent::end(100.0, 196.0),
                t0 + Duration::from_millis(300),
            );
        });
    });

    group.finish();
}

/// Benchmark momentum decay to convergence.
fn bench_momentum(c: &mut Criterion) {
    let mut group = c.benchmark_group("momentum");

    group.bench_function("decay_to_idle", |b| {
        b.iter(|| {
            let mut pane = Pane {
                offset: Point::new(100.0, 500.0),
                extent: Size::new(500.0, 1000.0),
            };
            let mut engine = ScrollMomentumEngine::new();
            engine.begin(
                black_box(Delta::new(-30.0, 60.0)),
                ScrollPolicy::new(false, true, AxisLock::default()),
            );
            while engine.is_active() {
                engine.step(&mut pane);
            }
            pane.offset
        });
    });

    group.finish();
}

criterion_group!(benches, bench_router_dispatch, bench_momentum);
criterion_main!(benches);
