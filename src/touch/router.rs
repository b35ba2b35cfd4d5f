//! The gesture-classification state machine.
//!
//! The router consumes one touch contact at a time and produces
//! [`RouterAction`] values for the controller to execute against the
//! surface. It owns no surface access itself, which keeps classification
//! deterministic and directly testable: feed events and deadlines in,
//! assert on the actions that come out.
//!
//! Timing is explicit. Callers pass the current instant with every event
//! and call [`poll`](GestureRouter::poll) from their frame tick; the
//! long-press and double-tap windows are plain deadlines, cancelable and
//! restartable.

use crate::geometry::{Delta, Point};
use crate::touch::event::{TouchEvent, TouchPhase};
use crate::touch::session::{AxisLock, GestureMode, TouchSession};
use std::time::{Duration, Instant};

/// An action the router asks its executor to perform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RouterAction {
    /// A new contact began; stop any in-flight momentum animation.
    CancelMomentum,
    /// Pan the viewport by the given move delta under the given axis lock.
    Pan(Delta, AxisLock),
    /// A plain tap ended; move the caret to the release point and show the
    /// caret marker.
    TapCaret(Point),
    /// A selection gesture completed; move the caret to the point, select
    /// the word there, and show selection handles and the menu.
    SelectAt(Point),
    /// A pan ended; begin momentum from its last move delta.
    BeginMomentum(Delta, AxisLock),
}

/// Gesture-classification state machine.
#[derive(Clone, Debug)]
pub struct GestureRouter {
    session: Option<TouchSession>,
    click_count: u32,
    click_reset_deadline: Option<Instant>,
    long_press: Duration,
    double_tap: Duration,
}

impl GestureRouter {
    /// Create a router with the given long-press and double-tap windows.
    #[must_use]
    pub fn new(long_press: Duration, double_tap: Duration) -> Self {
        Self {
            session: None,
            click_count: 0,
            click_reset_deadline: None,
            long_press,
            double_tap,
        }
    }

    /// Check if a touch session is live.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Mode of the live session, if any.
    #[must_use]
    pub fn mode(&self) -> Option<GestureMode> {
        self.session.map(|s| s.mode)
    }

    /// Taps counted inside the current double-tap window.
    #[must_use]
    pub fn click_count(&self) -> u32 {
        self.click_count
    }

    /// Update the long-press window for future sessions.
    pub fn set_long_press(&mut self, window: Duration) {
        self.long_press = window;
    }

    /// Update the double-tap window for future taps.
    pub fn set_double_tap(&mut self, window: Duration) {
        self.double_tap = window;
    }

    /// Tear down the live session and all pending deadlines.
    pub fn abort(&mut self) {
        self.session = None;
        self.click_count = 0;
        self.click_reset_deadline = None;
    }

    /// Feed one touch event through the state machine.
    pub fn handle(&mut self, event: TouchEvent, now: Instant) -> Option<RouterAction> {
        match event.phase {
            TouchPhase::Start => self.touch_start(event.point, now),
            TouchPhase::Move => self.touch_move(event.point),
            TouchPhase::End => self.touch_end(event.point),
        }
    }

    /// Fire due deadlines. Call from the frame tick.
    ///
    /// A long-press deadline elapsing converts the live session directly
    /// into a completed selection gesture at the touch point, without
    /// waiting for release. The contact's eventual release is then
    /// ignored, and any movement abandons the session outright.
    pub fn poll(&mut self, now: Instant) -> Option<RouterAction> {
        if self.click_reset_deadline.is_some_and(|d| now >= d) {
            self.click_count = 0;
            self.click_reset_deadline = None;
        }

        let session = self.session.as_mut()?;
        if session.long_press_deadline.is_some_and(|d| now >= d) {
            session.mode = GestureMode::Selection;
            session.selected = true;
            session.disarm_long_press();
            return Some(RouterAction::SelectAt(session.start));
        }
        None
    }

    fn touch_start(&mut self, point: Point, now: Instant) -> Option<RouterAction> {
        debug_assert!(
            self.session.is_none(),
            "touch start while a session is live"
        );
        self.click_count += 1;
        self.click_reset_deadline = Some(now + self.double_tap);
        self.session = Some(TouchSession::begin(point, now, self.long_press));
        Some(RouterAction::CancelMomentum)
    }

    fn touch_move(&mut self, point: Point) -> Option<RouterAction> {
        let session = self.session.as_mut()?;

        if session.mode == GestureMode::Selection {
            // Known limitation, kept deliberately: once the long press has
            // fired, continued movement abandons the contact instead of
            // entering a selection drag.
            self.session = None;
            return None;
        }

        let delta = point.delta_from(session.last);
        if delta.is_zero() {
            return None;
        }

        if !session.axis_lock.engaged() {
            session.axis_lock.engage(delta);
        }

        session.last = point;
        session.delta = delta;
        session.mode = GestureMode::Scroll;
        session.disarm_long_press();
        Some(RouterAction::Pan(delta, session.axis_lock))
    }

    fn touch_end(&mut self, point: Point) -> Option<RouterAction> {
        let mut session = self.session.take()?;

        if self.click_count == 2 {
            session.mode = GestureMode::Selection;
        }

        match session.mode {
            GestureMode::Cursor => Some(RouterAction::TapCaret(point)),
            GestureMode::Scroll => {
                Some(RouterAction::BeginMomentum(session.delta, session.axis_lock))
            }
            GestureMode::Selection => {
                self.click_count = 0;
                if session.selected {
                    // Long press already completed this gesture.
                    None
                } else {
                    Some(RouterAction::SelectAt(point))
                }
            }
        }
    }
}
