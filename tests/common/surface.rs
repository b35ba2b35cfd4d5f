//! Scripted text surface for gesture tests.
//!
//! A small editor model over a rope with fixed glyph metrics: every
//! character cell is `CHAR_W` x `LINE_H` pixels. Every mutation the
//! controller performs is journaled so tests assert on observable
//! effects rather than internals.

use ropey::Rope;
use touchtext::geometry::{Delta, Point, Rect, SelectionRange, Size, TextPosition};
use touchtext::surface::{EditCommand, TextSurface};

/// Fixed glyph cell width in pixels.
pub const CHAR_W: f32 = 8.0;
/// Fixed line height in pixels.
pub const LINE_H: f32 = 16.0;

/// One journaled mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    SetCaret(TextPosition),
    SetAnchor(TextPosition),
    Extend(TextPosition),
    ScrollBy(f32, f32),
    ScrollToLine(u32),
    Exec(EditCommand),
}

/// Scripted text surface with a journal of controller-issued commands.
pub struct FakeSurface {
    text: Rope,
    caret: TextPosition,
    anchor: TextPosition,
    scroll: Point,
    extent: Size,
    container: Rect,
    read_only: bool,
    clipboard: String,
    pub journal: Vec<Command>,
}

impl FakeSurface {
    pub fn new(text: &str) -> Self {
        Self {
            text: Rope::from_str(text),
            caret: TextPosition::default(),
            anchor: TextPosition::default(),
            scroll: Point::ZERO,
            extent: Size::new(500.0, 1000.0),
            container: Rect::new(0.0, 0.0, 320.0, 480.0),
            read_only: false,
            clipboard: String::new(),
            journal: Vec::new(),
        }
    }

    pub fn with_container(mut self, container: Rect) -> Self {
        self.container = container;
        self
    }

    pub fn with_extent(mut self, extent: Size) -> Self {
        self.extent = extent;
        self
    }

    pub fn with_scroll(mut self, x: f32, y: f32) -> Self {
        self.scroll = Point::new(x, y);
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    pub fn caret_moves(&self) -> usize {
        self.journal
            .iter()
            .filter(|c| matches!(c, Command::SetCaret(_)))
            .count()
    }

    pub fn scroll_count(&self) -> usize {
        self.journal
            .iter()
            .filter(|c| matches!(c, Command::ScrollBy(..) | Command::ScrollToLine(_)))
            .count()
    }

    pub fn executed(&self, command: EditCommand) -> bool {
        self.journal.contains(&Command::Exec(command))
    }

    fn line_len(&self, row: u32) -> u32 {
        let row = row as usize;
        if row >= self.text.len_lines() {
            return 0;
        }
        let line = self.text.line(row);
        let mut len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len -= 1;
        }
        len as u32
    }

    fn clamp_pos(&self, pos: TextPosition) -> TextPosition {
        let row = pos.row.min(self.last_line());
        TextPosition::new(row, pos.column.min(self.line_len(row)))
    }

    fn char_offset(&self, pos: TextPosition) -> usize {
        let pos = self.clamp_pos(pos);
        self.text.line_to_char(pos.row as usize) + pos.column as usize
    }
}

impl TextSurface for FakeSurface {
    fn caret(&self) -> TextPosition {
        self.caret
    }

    fn set_caret(&mut self, pos: TextPosition) {
        let pos = self.clamp_pos(pos);
        self.caret = pos;
        self.anchor = pos;
        self.journal.push(Command::SetCaret(pos));
    }

    fn selection(&self) -> SelectionRange {
        SelectionRange::new(self.anchor, self.caret).normalized()
    }

    fn set_selection_anchor(&mut self, pos: TextPosition) {
        let pos = self.clamp_pos(pos);
        self.anchor = pos;
        self.journal.push(Command::SetAnchor(pos));
    }

    fn extend_selection_to(&mut self, pos: TextPosition) {
        let pos = self.clamp_pos(pos);
        self.caret = pos;
        self.journal.push(Command::Extend(pos));
    }

    fn selected_text(&self) -> Option<String> {
        let sel = self.selection();
        if sel.is_empty() {
            return None;
        }
        let start = self.char_offset(sel.start);
        let end = self.char_offset(sel.end);
        if start == end {
            return None;
        }
        Some(self.text.slice(start..end).to_string())
    }

    fn line_text(&self, row: u32) -> String {
        if row as usize >= self.text.len_lines() {
            return String::new();
        }
        let line = self.text.line(row as usize).to_string();
        line.trim_end_matches('\n').to_string()
    }

    fn last_line(&self) -> u32 {
        (self.text.len_lines() as u32).saturating_sub(1)
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn scroll_extent(&self) -> Size {
        self.extent
    }

    fn scroll_by(&mut self, delta: Delta) {
        self.scroll.x = (self.scroll.x + delta.dx).clamp(0.0, self.extent.width);
        self.scroll.y = (self.scroll.y + delta.dy).clamp(0.0, self.extent.height);
        self.journal.push(Command::ScrollBy(delta.dx, delta.dy));
    }

    fn scroll_to_line(&mut self, row: u32) {
        self.scroll.y = (row as f32 * LINE_H).min(self.extent.height);
        self.journal.push(Command::ScrollToLine(row));
    }

    fn screen_to_text(&self, point: Point) -> TextPosition {
        let local_x = point.x - self.container.x + self.scroll.x;
        let local_y = point.y - self.container.y + self.scroll.y;
        let row = ((local_y / LINE_H).floor().max(0.0) as u32).min(self.last_line());
        let column = ((local_x / CHAR_W).round().max(0.0) as u32).min(self.line_len(row));
        TextPosition::new(row, column)
    }

    fn text_to_screen(&self, pos: TextPosition) -> Point {
        Point::new(
            self.container.x + pos.column as f32 * CHAR_W - self.scroll.x,
            self.container.y + pos.row as f32 * LINE_H - self.scroll.y,
        )
    }

    fn line_height(&self) -> f32 {
        LINE_H
    }

    fn container_rect(&self) -> Rect {
        self.container
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn is_row_visible(&self, row: u32) -> bool {
        let top = row as f32 * LINE_H - self.scroll.y;
        top >= 0.0 && top + LINE_H <= self.container.height
    }

    fn execute(&mut self, command: EditCommand) {
        self.journal.push(Command::Exec(command));
        match command {
            EditCommand::Copy => {
                if let Some(text) = self.selected_text() {
                    self.clipboard = text;
                }
            }
            EditCommand::Cut => {
                if let Some(text) = self.selected_text() {
                    let sel = self.selection();
                    let start = self.char_offset(sel.start);
                    let end = self.char_offset(sel.end);
                    self.clipboard = text;
                    self.text.remove(start..end);
                    self.caret = sel.start;
                    self.anchor = sel.start;
                }
            }
            EditCommand::Paste => {
                if !self.clipboard.is_empty() {
                    let offset = self.char_offset(self.caret);
                    let pasted = self.clipboard.clone();
                    self.text.insert(offset, &pasted);
                }
            }
            EditCommand::SelectAll => {
                self.anchor = TextPosition::new(0, 0);
                let last = self.last_line();
                self.caret = TextPosition::new(last, self.line_len(last));
            }
        }
    }
}
