//! Touch session state.

use crate::geometry::{Delta, Point};
use std::time::{Duration, Instant};

/// What the live gesture has been classified as so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureMode {
    /// Will move the caret on release (initial state of every contact).
    #[default]
    Cursor,
    /// Panning the viewport.
    Scroll,
    /// Selecting text (long press or double tap).
    Selection,
}

/// Per-gesture axis restriction.
///
/// With diagonal scrolling disabled, the first movement of a gesture locks
/// the axis opposite its dominant direction; the locked axis is zeroed at
/// scroll application time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisLock {
    /// Horizontal panning is locked out.
    pub x: bool,
    /// Vertical panning is locked out.
    pub y: bool,
}

impl AxisLock {
    /// Check whether either axis has been locked yet.
    #[must_use]
    pub fn engaged(&self) -> bool {
        self.x || self.y
    }

    /// Lock the axis opposite the dominant direction of `delta`.
    pub fn engage(&mut self, delta: Delta) {
        if delta.is_horizontal() {
            self.y = true;
        } else {
            self.x = true;
        }
    }
}

/// State of one continuous touch contact, from first contact to release.
///
/// At most one session is live at a time; the router owns it as an
/// `Option` and tears it down when the gesture completes or is abandoned.
#[derive(Clone, Copy, Debug)]
pub struct TouchSession {
    /// Gesture classification so far.
    pub mode: GestureMode,
    /// Contact point at touch start.
    pub start: Point,
    /// Most recent contact point.
    pub last: Point,
    /// Delta of the most recent move.
    pub delta: Delta,
    /// Axis restriction engaged by the first movement.
    pub axis_lock: AxisLock,
    /// When a stationary hold becomes a word selection; disarmed by the
    /// first movement.
    pub long_press_deadline: Option<Instant>,
    /// The long press already performed the selection; the eventual
    /// release must not repeat it.
    pub selected: bool,
}

impl TouchSession {
    /// Begin a session for a contact at `point`.
    #[must_use]
    pub fn begin(point: Point, now: Instant, long_press: Duration) -> Self {
        Self {
            mode: GestureMode::Cursor,
            start: point,
            last: point,
            delta: Delta::ZERO,
            axis_lock: AxisLock::default(),
            long_press_deadline: Some(now + long_press),
            selected: false,
        }
    }

    /// Disarm the long-press timer.
    pub fn disarm_long_press(&mut self) {
        self.long_press_deadline = None;
    }
}
