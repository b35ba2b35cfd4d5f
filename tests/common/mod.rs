#![allow(dead_code)] // Shared fixture; not every test uses every helper

pub mod surface;

pub use surface::{CHAR_W, Command, FakeSurface, LINE_H};

use std::time::{Duration, Instant};

/// Shift an instant forward by milliseconds.
pub fn ms(base: Instant, millis: u64) -> Instant {
    base + Duration::from_millis(millis)
}
