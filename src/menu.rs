//! The floating contextual action menu.
//!
//! The item set derives from two inputs: whether the surface is read-only
//! and whether there is copyable selected text. Placement anchors the
//! menu below its trigger marker and corrects viewport overflow in a
//! bounded number of passes; the host renders the items and reports the
//! rendered size back through the controller.

use crate::geometry::{Point, Rect, Size};
use crate::marker::MarkerKind;
use crate::surface::EditCommand;
use bitflags::bitflags;

/// Gap kept between the menu and the container edges, in pixels.
const MARGIN: f32 = 10.0;

/// Overflow-correction refinement passes before settling for the
/// best-effort clamped position.
const MAX_PASSES: usize = 2;

bitflags! {
    /// The set of actions offered by the menu.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct MenuItems: u8 {
        const COPY = 0b0001;
        const CUT = 0b0010;
        const PASTE = 0b0100;
        const SELECT_ALL = 0b1000;
    }
}

/// One menu action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Copy,
    Cut,
    Paste,
    SelectAll,
}

impl MenuAction {
    /// The item flag corresponding to this action.
    #[must_use]
    pub fn item(&self) -> MenuItems {
        match self {
            Self::Copy => MenuItems::COPY,
            Self::Cut => MenuItems::CUT,
            Self::Paste => MenuItems::PASTE,
            Self::SelectAll => MenuItems::SELECT_ALL,
        }
    }

    /// The editing command this action executes.
    #[must_use]
    pub fn command(&self) -> EditCommand {
        match self {
            Self::Copy => EditCommand::Copy,
            Self::Cut => EditCommand::Cut,
            Self::Paste => EditCommand::Paste,
            Self::SelectAll => EditCommand::SelectAll,
        }
    }

    /// Stable name for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Cut => "cut",
            Self::Paste => "paste",
            Self::SelectAll => "selectall",
        }
    }
}

/// Derive the item set from the surface's read-only flag and whether
/// copyable text is selected.
#[must_use]
pub fn items_for(read_only: bool, has_text: bool) -> MenuItems {
    match (read_only, has_text) {
        (true, true) => MenuItems::COPY | MenuItems::SELECT_ALL,
        (true, false) => MenuItems::SELECT_ALL,
        (false, true) => {
            MenuItems::COPY | MenuItems::CUT | MenuItems::PASTE | MenuItems::SELECT_ALL
        }
        (false, false) => MenuItems::PASTE | MenuItems::SELECT_ALL,
    }
}

/// Place the menu relative to its trigger marker.
///
/// `trigger` and the returned origin are container-local; `container` is
/// the container's size. The natural position is the trigger's bottom-left;
/// overflow corrections shift it inside the margins, flipping above the
/// trigger when the bottom overflows. Refinement is bounded; if it fails
/// to converge the position is clamped best-effort.
#[must_use]
pub fn place(menu_size: Size, trigger: Rect, container: Size, line_height: f32) -> Point {
    let mut origin = Point::new(trigger.x, trigger.bottom());

    for _ in 0..MAX_PASSES {
        let mut next = origin;

        let right = next.x + menu_size.width;
        if right + MARGIN > container.width {
            next.x -= (right - container.width) + MARGIN;
        }
        if next.x - MARGIN < 0.0 {
            next.x = MARGIN;
        }

        let bottom = next.y + menu_size.height;
        if bottom > container.height {
            next.y = trigger.y - trigger.height - line_height - menu_size.height;
        }
        if next.y < 0.0 {
            next.y = 0.0;
        }

        if next == origin {
            break;
        }
        origin = next;
    }

    Point::new(
        origin.x.min((container.width - menu_size.width).max(0.0)).max(0.0),
        origin
            .y
            .min((container.height - menu_size.height).max(0.0))
            .max(0.0),
    )
}

/// The singleton context menu.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContextMenu {
    visible: bool,
    anchor: Option<MarkerKind>,
    items: MenuItems,
    origin: Point,
    size: Size,
    moved: bool,
}

impl ContextMenu {
    /// Create a hidden menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the host should render the menu.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The marker the menu is anchored to, while visible.
    #[must_use]
    pub fn anchor(&self) -> Option<MarkerKind> {
        self.anchor
    }

    /// Current item set.
    #[must_use]
    pub fn items(&self) -> MenuItems {
        self.items
    }

    /// Container-local top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Container-local rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.size.width, self.size.height)
    }

    /// Record the rendered size reported by the host.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Rendered size last reported by the host.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Show the menu.
    pub fn show(&mut self, anchor: MarkerKind, items: MenuItems, origin: Point) {
        self.visible = true;
        self.anchor = Some(anchor);
        self.items = items;
        self.origin = origin;
    }

    /// Hide the menu.
    pub fn hide(&mut self) {
        self.visible = false;
        self.anchor = None;
    }

    /// A touch sequence started on the menu.
    pub fn begin_touch(&mut self) {
        self.moved = false;
    }

    /// The menu touch sequence moved; its release must not activate.
    pub fn note_move(&mut self) {
        self.moved = true;
    }

    /// Whether the current menu touch sequence has moved.
    #[must_use]
    pub fn touch_moved(&self) -> bool {
        self.moved
    }
}
