//! Viewport panning and post-release momentum.
//!
//! Live pans and the momentum animation share one application policy:
//! reverse-scrolling inversion, the per-gesture axis lock, and clamping at
//! the scrollable bounds. The momentum engine is a cooperative per-frame
//! loop over a decaying remaining delta; the caller steps it from its
//! frame tick until it reports idle.

use crate::event::{LogLevel, emit_log};
use crate::geometry::{Delta, Point, Size};
use crate::surface::TextSurface;
use crate::touch::AxisLock;

/// Fraction of the remaining delta consumed per animation frame.
const DECAY: f32 = 0.05;

/// Truncate toward zero to two decimal places.
fn trunc2(v: f32) -> f32 {
    (v * 100.0).trunc() / 100.0
}

/// How gesture deltas are applied to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollPolicy {
    /// Invert the pan direction (offset follows the finger).
    pub reverse: bool,
    /// Allow both axes to move in one gesture.
    pub diagonal: bool,
    /// Axis restriction engaged at gesture start.
    pub lock: AxisLock,
}

impl ScrollPolicy {
    /// Create a policy.
    #[must_use]
    pub fn new(reverse: bool, diagonal: bool, lock: AxisLock) -> Self {
        Self {
            reverse,
            diagonal,
            lock,
        }
    }

    /// The offset change a gesture delta asks for: inverted unless
    /// reversed, with the locked axis zeroed when diagonal panning is
    /// disabled.
    #[must_use]
    pub fn effective(&self, delta: Delta) -> Delta {
        let dir = if self.reverse { 1.0 } else { -1.0 };
        let mut dx = dir * delta.dx;
        let mut dy = dir * delta.dy;
        if !self.diagonal {
            if self.lock.x {
                dx = 0.0;
            } else {
                dy = 0.0;
            }
        }
        Delta::new(dx, dy)
    }
}

/// Clamp an offset change so the resulting offset stays in
/// `[0, extent]` per axis.
#[must_use]
pub fn clamp_delta(offset: Point, extent: Size, delta: Delta) -> Delta {
    let lo_x = -offset.x;
    let hi_x = (extent.width - offset.x).max(lo_x);
    let lo_y = -offset.y;
    let hi_y = (extent.height - offset.y).max(lo_y);
    Delta::new(
        delta.dx.min(hi_x).max(lo_x),
        delta.dy.min(hi_y).max(lo_y),
    )
}

/// Apply a live pan delta to the viewport under `policy`.
///
/// Returns the offset change actually applied after clamping at the
/// scrollable bounds (zero on an axis that is already at the bound it is
/// being pushed past).
pub fn apply_pan<S: TextSurface + ?Sized>(
    surface: &mut S,
    delta: Delta,
    policy: ScrollPolicy,
) -> Delta {
    let effective = policy.effective(delta);
    let applied = clamp_delta(surface.scroll_offset(), surface.scroll_extent(), effective);
    if !applied.is_zero() {
        surface.scroll_by(applied);
    }
    applied
}

/// Decaying-velocity animation applied to the viewport after a pan is
/// released.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollMomentumEngine {
    remaining: Delta,
    policy: ScrollPolicy,
    active: bool,
}

impl ScrollMomentumEngine {
    /// Create an idle engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an animation is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Remaining delta still to be played out.
    #[must_use]
    pub fn remaining(&self) -> Delta {
        self.remaining
    }

    /// Begin an animation from a release-time delta.
    pub fn begin(&mut self, delta: Delta, policy: ScrollPolicy) {
        self.remaining = delta;
        self.policy = policy;
        self.active = true;
    }

    /// Cancel any in-flight animation, leaving the viewport where the last
    /// step put it.
    pub fn cancel(&mut self) {
        self.remaining = Delta::ZERO;
        self.active = false;
    }

    /// Advance the animation one frame.
    ///
    /// Returns the offset change applied this frame; `Delta::ZERO` once
    /// the engine is idle. Each step consumes a truncated 5% of the
    /// remaining delta; an axis whose *remaining* delta can no longer
    /// scroll (blocked at a bound) is zeroed outright.
    pub fn step<S: TextSurface + ?Sized>(&mut self, surface: &mut S) -> Delta {
        if !self.active {
            return Delta::ZERO;
        }

        let mut step = Delta::new(
            trunc2(self.remaining.dx * DECAY),
            trunc2(self.remaining.dy * DECAY),
        );

        let offset = surface.scroll_offset();
        let extent = surface.scroll_extent();
        let effective_remaining = self.policy.effective(self.remaining);
        let scrollable = clamp_delta(offset, extent, effective_remaining);

        if effective_remaining.dx != 0.0 && scrollable.dx == 0.0 {
            self.remaining.dx = 0.0;
            step.dx = 0.0;
        }
        if effective_remaining.dy != 0.0 && scrollable.dy == 0.0 {
            self.remaining.dy = 0.0;
            step.dy = 0.0;
        }

        if step.is_zero() {
            self.cancel();
            emit_log(LogLevel::Debug, "momentum idle");
            return Delta::ZERO;
        }

        let applied = clamp_delta(offset, extent, self.policy.effective(step));
        if !applied.is_zero() {
            surface.scroll_by(applied);
        }

        self.remaining = Delta::new(self.remaining.dx - step.dx, self.remaining.dy - step.dy);
        if self.remaining.is_zero() {
            self.cancel();
        }
        applied
    }
}
