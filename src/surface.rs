//! The text-surface collaborator seam.
//!
//! The gesture controller never renders or edits text itself; everything it
//! knows about the document flows through [`TextSurface`]. Change
//! notifications travel the other way: the host forwards [`SurfaceEvent`]s
//! for changes the controller did not itself initiate (host edits, folds,
//! external scrolls, session switches).

use crate::geometry::{Delta, Point, Rect, SelectionRange, Size, TextPosition};
use crate::word;

/// A named editing command executed through the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditCommand {
    Copy,
    Cut,
    Paste,
    SelectAll,
}

/// A change notification forwarded into the controller by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Document content changed (also covers text-wrap reconfiguration).
    ContentChanged,
    /// Code folding changed.
    FoldChanged,
    /// The viewport scrolled for a reason outside this controller.
    Scrolled,
    /// The active document/session changed.
    SessionChanged,
    /// The caret moved for a reason outside this controller.
    CaretMoved,
    /// The selection changed for a reason outside this controller.
    SelectionChanged,
}

impl SurfaceEvent {
    /// Check if this event invalidates marker positions wholesale.
    #[must_use]
    pub fn is_layout_change(&self) -> bool {
        matches!(self, Self::ContentChanged | Self::FoldChanged)
    }
}

/// The external text-editing surface the controller drives.
///
/// Coordinate contract: `screen_to_text` / `text_to_screen` work in
/// absolute screen pixels (the same space touch events arrive in);
/// positions outside the rendered viewport are tolerated by clamping to
/// the nearest valid position. Scroll offsets grow rightward/downward and
/// are clamped by the surface to `[0, scroll_extent]`.
pub trait TextSurface {
    /// Current caret position.
    fn caret(&self) -> TextPosition;

    /// Move the caret, collapsing any selection.
    fn set_caret(&mut self, pos: TextPosition);

    /// Current selection range, normalized (`start <= end`).
    fn selection(&self) -> SelectionRange;

    /// Move the selection anchor, keeping the focus end in place.
    fn set_selection_anchor(&mut self, pos: TextPosition);

    /// Move the selection focus, keeping the anchor in place.
    fn extend_selection_to(&mut self, pos: TextPosition);

    /// Selected text, `None` when the selection is empty.
    fn selected_text(&self) -> Option<String>;

    /// Text of one line, without its trailing newline.
    fn line_text(&self, row: u32) -> String;

    /// Index of the last line in the document.
    fn last_line(&self) -> u32;

    /// Select the word at a position.
    ///
    /// The default implementation uses unicode word bounds over
    /// [`line_text`](Self::line_text); surfaces with their own notion of a
    /// word should override it.
    fn select_word_at(&mut self, pos: TextPosition) {
        let line = self.line_text(pos.row);
        let (start, end) = word::word_range(&line, pos.column as usize);
        self.set_selection_anchor(TextPosition::new(pos.row, start as u32));
        self.extend_selection_to(TextPosition::new(pos.row, end as u32));
    }

    /// Current viewport scroll offsets.
    fn scroll_offset(&self) -> Point;

    /// Maximum scroll offsets (scrollable extent).
    fn scroll_extent(&self) -> Size;

    /// Scroll the viewport by a pixel delta.
    fn scroll_by(&mut self, delta: Delta);

    /// Scroll the viewport so the given line is visible.
    fn scroll_to_line(&mut self, row: u32);

    /// Convert an absolute screen point to a text position.
    fn screen_to_text(&self, point: Point) -> TextPosition;

    /// Convert a text position to its absolute screen point (top-left of
    /// the glyph cell).
    fn text_to_screen(&self, pos: TextPosition) -> Point;

    /// Rendered line height in pixels.
    fn line_height(&self) -> f32;

    /// The container's on-screen rectangle.
    fn container_rect(&self) -> Rect;

    /// Whether the surface rejects edits.
    fn is_read_only(&self) -> bool;

    /// Whether a row is fully visible in the viewport.
    fn is_row_visible(&self, row: u32) -> bool;

    /// Execute a named editing command.
    fn execute(&mut self, command: EditCommand);
}
