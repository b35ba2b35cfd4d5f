//! `touchtext` - Touch gesture interpretation for text-editing surfaces
//!
//! Classifies a stream of raw multi-stage touch events into mutually
//! exclusive editing actions against an external text surface: moving the
//! caret, dragging a text selection with teardrop handles, panning the
//! viewport with momentum, or invoking a contextual action menu.
//!
//! The crate renders nothing and stores no text. Hosts implement
//! [`TextSurface`] over their editor, feed raw [`TouchEvent`]s and frame
//! ticks into a [`TouchController`], and render the marker/menu state the
//! controller exposes.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Intentional for pixel math
#![allow(clippy::module_name_repetitions)] // Allow TouchController etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::float_cmp)] // Exact comparisons are intentional for clamped deltas
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod config;
pub mod controller;
pub mod coords;
pub mod error;
pub mod event;
pub mod geometry;
pub mod marker;
pub mod menu;
pub mod scroll;
pub mod surface;
pub mod touch;
pub mod word;

// Re-export core types at crate root
pub use config::{TouchConfig, VIBRATION_MS};
pub use controller::{InteractionState, TouchController};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use geometry::{Delta, Point, Rect, SelectionRange, Size, TextPosition};
pub use marker::{Marker, MarkerDrag, MarkerKind, MarkerSet};
pub use menu::{ContextMenu, MenuAction, MenuItems};
pub use scroll::{ScrollMomentumEngine, ScrollPolicy};
pub use surface::{EditCommand, SurfaceEvent, TextSurface};
pub use touch::{AxisLock, GestureMode, GestureRouter, RouterAction, TouchEvent, TouchPhase};
