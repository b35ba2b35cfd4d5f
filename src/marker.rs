//! Teardrop markers: the caret marker and the two selection handles.
//!
//! Markers are positioned in container-local pixels; the host renders
//! them. Hit-testing routes touch starts that land on a marker into a
//! drag instead of a gesture session. The drag math — grab-point lift,
//! sibling clamping, collision nudge — is pure and lives here; the
//! controller owns the surrounding orchestration.

use crate::config::TouchConfig;
use crate::coords;
use crate::geometry::{Point, Rect, TextPosition};
use crate::surface::TextSurface;

/// Which marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    /// The single caret teardrop shown after a tap.
    Caret,
    /// The selection-start handle.
    SelectionStart,
    /// The selection-end handle.
    SelectionEnd,
}

/// One visual anchor.
#[derive(Clone, Copy, Debug, Default)]
pub struct Marker {
    /// Text position the marker is anchored to.
    pub anchor: TextPosition,
    /// Container-local position of the marker's top-left corner.
    pub screen: Point,
    /// Whether the host should render it.
    pub visible: bool,
    /// Exempt from auto-hide while being actively dragged.
    pub immortal: bool,
}

impl Marker {
    /// Show the marker at a position.
    pub fn show_at(&mut self, anchor: TextPosition, screen: Point) {
        self.anchor = anchor;
        self.screen = screen;
        self.visible = true;
    }

    /// Hide the marker.
    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// A live drag of one marker.
#[derive(Clone, Copy, Debug)]
pub struct MarkerDrag {
    /// Which marker is being dragged.
    pub kind: MarkerKind,
    /// Whether any movement happened; an unmoved release shows the menu.
    pub moved: bool,
}

/// The three markers.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkerSet {
    pub caret: Marker,
    pub start: Marker,
    pub end: Marker,
}

impl MarkerSet {
    /// Get a marker by kind.
    #[must_use]
    pub fn get(&self, kind: MarkerKind) -> &Marker {
        match kind {
            MarkerKind::Caret => &self.caret,
            MarkerKind::SelectionStart => &self.start,
            MarkerKind::SelectionEnd => &self.end,
        }
    }

    /// Get a marker by kind, mutably.
    pub fn get_mut(&mut self, kind: MarkerKind) -> &mut Marker {
        match kind {
            MarkerKind::Caret => &mut self.caret,
            MarkerKind::SelectionStart => &mut self.start,
            MarkerKind::SelectionEnd => &mut self.end,
        }
    }

    /// Hit-test rectangle for a marker under the given configuration.
    ///
    /// The caret teardrop renders at its diagonal width; the handles are
    /// squares of the configured size.
    #[must_use]
    pub fn rect(&self, kind: MarkerKind, config: &TouchConfig) -> Rect {
        let marker = self.get(kind);
        let width = match kind {
            MarkerKind::Caret => config.teardrop_width(),
            MarkerKind::SelectionStart | MarkerKind::SelectionEnd => config.teardrop_size,
        };
        Rect::new(marker.screen.x, marker.screen.y, width, config.teardrop_size)
    }

    /// Find the visible marker under a container-local point.
    #[must_use]
    pub fn hit_test(&self, local: Point, config: &TouchConfig) -> Option<MarkerKind> {
        if !config.markers_enabled() {
            return None;
        }
        for kind in [
            MarkerKind::Caret,
            MarkerKind::SelectionStart,
            MarkerKind::SelectionEnd,
        ] {
            if self.get(kind).visible && self.rect(kind, config).contains(local) {
                return Some(kind);
            }
        }
        None
    }

    /// Check if any selection handle is immortal (mid-drag).
    #[must_use]
    pub fn selection_immortal(&self) -> bool {
        self.start.immortal || self.end.immortal
    }
}

/// Resolve the text position a marker drag at `touch` aims for.
///
/// The grab point rides above the finger; a handle is additionally
/// clamped against its sibling so the range never inverts, with a
/// one-column nudge on exact collision.
#[must_use]
pub fn drag_target<S: TextSurface + ?Sized>(
    surface: &S,
    kind: MarkerKind,
    touch: Point,
    teardrop_size: f32,
) -> TextPosition {
    let mut target = coords::grab_point(surface, touch);

    match kind {
        MarkerKind::Caret => surface.screen_to_text(target),
        MarkerKind::SelectionStart => {
            let end = surface.selection().end;
            target.x += teardrop_size;

            let end_screen = surface.text_to_screen(end);
            if end_screen.y <= target.y {
                target.y = end_screen.y;
                if end_screen.x < target.x {
                    target.x = end_screen.x;
                }
            }

            let mut pos = surface.screen_to_text(target);
            if pos >= end {
                pos = TextPosition::new(end.row, end.column.saturating_sub(1));
            }
            pos
        }
        MarkerKind::SelectionEnd => {
            let start = surface.selection().start;

            let start_screen = surface.text_to_screen(start);
            if start_screen.y >= target.y {
                target.y = start_screen.y;
                if start_screen.x > target.x {
                    target.x = start_screen.x;
                }
            }

            let mut pos = surface.screen_to_text(target);
            if pos <= start {
                pos = TextPosition::new(start.row, start.column + 1);
            }
            pos
        }
    }
}
