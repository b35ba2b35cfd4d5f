//! Fuzz target for the gesture router.
//!
//! Feeds arbitrary touch traces (including NaN coordinates and wild
//! timing) through the state machine and checks it never panics and
//! never ends up with more than one live session.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::time::{Duration, Instant};
use touchtext::touch::{GestureRouter, TouchEvent};

fuzz_target!(|data: Vec<(u8, f32, f32, u16)>| {
    let mut router = GestureRouter::new(Duration::from_millis(500), Duration::from_millis(300));
    let mut now = Instant::now();

    for (op, x, y, dt) in data {
        now += Duration::from_millis(u64::from(dt));
        match op % 4 {
            // A primary contact can only start when none is live.
            0 => {
                if !router.is_active() {
                    let _ = router.handle(TouchEvent::start(x, y), now);
                }
            }
            1 => {
                let _ = router.handle(TouchEvent::moved(x, y), now);
            }
            2 => {
                let _ = router.handle(TouchEvent::end(x, y), now);
            }
            _ => {
                let _ = router.poll(now);
            }
        }
    }
});
