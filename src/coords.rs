//! Coordinate-space transforms and relative placement math.
//!
//! Touch events and the surface's text/screen transforms work in absolute
//! screen pixels; markers and the context menu are placed in
//! container-local pixels. The text/screen conversion itself belongs to
//! the surface — only relative placement math lives here.

use crate::geometry::{Point, TextPosition};
use crate::surface::TextSurface;

/// How far above the finger the drag grab point rides, in line heights.
/// Keeps the dragged position visible instead of hidden under the finger.
const GRAB_LIFT: f32 = 1.8;

/// Convert an absolute screen point to container-local coordinates.
#[must_use]
pub fn screen_to_local<S: TextSurface + ?Sized>(surface: &S, point: Point) -> Point {
    let origin = surface.container_rect().origin();
    Point::new(point.x - origin.x, point.y - origin.y)
}

/// The text position a drag at `touch` aims for: lifted above the finger
/// so the target line is not occluded.
#[must_use]
pub fn grab_point<S: TextSurface + ?Sized>(surface: &S, touch: Point) -> Point {
    Point::new(touch.x, touch.y - GRAB_LIFT * surface.line_height())
}

/// Container-local position for a marker tracking the finger during a
/// drag: one line height above the touch point.
#[must_use]
pub fn drag_marker_position<S: TextSurface + ?Sized>(surface: &S, touch: Point) -> Point {
    screen_to_local(surface, Point::new(touch.x, touch.y - surface.line_height()))
}

/// Container-local anchor for a marker attached to a text position: the
/// glyph cell's screen point offset down one line height, with an optional
/// horizontal shift (the start handle hangs left of its position).
#[must_use]
pub fn marker_anchor<S: TextSurface + ?Sized>(
    surface: &S,
    pos: TextPosition,
    x_offset: f32,
) -> Point {
    let screen = surface.text_to_screen(pos);
    screen_to_local(
        surface,
        Point::new(screen.x + x_offset, screen.y + surface.line_height()),
    )
}
