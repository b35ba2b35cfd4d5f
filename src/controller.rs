//! The touch controller facade.
//!
//! Owns the surface and every subcomponent: the gesture router classifies
//! raw touches, and the controller executes the resulting actions —
//! panning with momentum, caret and selection placement, marker drags,
//! and the contextual menu.
//!
//! Hosts drive it with three calls: [`on_touch`] for each raw touch
//! event, [`on_frame`] once per display frame (deadline timers and the
//! momentum animation run from here), and [`on_surface_event`] for
//! changes the controller did not itself initiate. [`attach`] must be
//! called first and unconditionally tears down any previous attachment,
//! so re-initialization never leaks state.
//!
//! [`on_touch`]: TouchController::on_touch
//! [`on_frame`]: TouchController::on_frame
//! [`on_surface_event`]: TouchController::on_surface_event
//! [`attach`]: TouchController::attach

use crate::config::{TouchConfig, VIBRATION_MS};
use crate::coords;
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_event, emit_log, names};
use crate::geometry::{Point, Size};
use crate::marker::{self, MarkerDrag, MarkerKind, MarkerSet};
use crate::menu::{self, ContextMenu, MenuAction};
use crate::scroll::{self, ScrollMomentumEngine, ScrollPolicy};
use crate::surface::{SurfaceEvent, TextSurface};
use crate::touch::{AxisLock, GestureRouter, RouterAction, TouchEvent, TouchPhase};
use std::time::{Duration, Instant};

/// Session-scoped flags remembering whether selection visuals should be
/// restored after a transient hide (scrolling hides markers to reduce
/// visual noise; these flags bring them back once the viewport settles).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// A selection's handles should be visible.
    pub selection_active: bool,
    /// The context menu should be visible.
    pub menu_active: bool,
}

/// The top-level touch-gesture controller.
pub struct TouchController<S: TextSurface> {
    surface: S,
    config: TouchConfig,
    router: GestureRouter,
    markers: MarkerSet,
    menu: ContextMenu,
    momentum: ScrollMomentumEngine,
    state: InteractionState,
    drag: Option<MarkerDrag>,
    menu_touch: bool,
    attached: bool,
    caret_hide_deadline: Option<Instant>,
    settle_deadline: Option<Instant>,
}

impl<S: TextSurface> TouchController<S> {
    /// Create a controller over a surface. Call [`attach`] before
    /// dispatching events.
    ///
    /// [`attach`]: Self::attach
    #[must_use]
    pub fn new(surface: S, config: TouchConfig) -> Self {
        Self {
            surface,
            config,
            router: GestureRouter::new(config.long_press_timeout, config.double_tap_window),
            markers: MarkerSet::default(),
            menu: ContextMenu::new(),
            momentum: ScrollMomentumEngine::new(),
            state: InteractionState::default(),
            drag: None,
            menu_touch: false,
            attached: false,
            caret_hide_deadline: None,
            settle_deadline: None,
        }
    }

    /// Attach the controller: validate configuration, tear down any
    /// previous attachment, and start accepting events.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the configuration is rejected.
    pub fn attach(&mut self) -> Result<()> {
        self.config.validate()?;
        self.teardown();
        self.attached = true;
        emit_log(LogLevel::Debug, "touch controller attached");
        Ok(())
    }

    /// Detach the controller: tear down all transient state and stop
    /// accepting events. Idempotent.
    pub fn detach(&mut self) {
        self.teardown();
        self.attached = false;
        emit_log(LogLevel::Debug, "touch controller detached");
    }

    fn teardown(&mut self) {
        self.router.abort();
        self.momentum.cancel();
        self.markers = MarkerSet::default();
        self.menu.hide();
        self.state = InteractionState::default();
        self.drag = None;
        self.menu_touch = false;
        self.caret_hide_deadline = None;
        self.settle_deadline = None;
    }

    /// Access the surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Access the surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Current marker set, for rendering.
    #[must_use]
    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Current menu state, for rendering.
    #[must_use]
    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &TouchConfig {
        &self.config
    }

    /// Current interaction flags, for hosts persisting them across
    /// attachments.
    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.state
    }

    /// Restore previously saved interaction flags.
    pub fn restore_interaction(&mut self, state: InteractionState) {
        self.state = state;
    }

    /// Check if a momentum animation is in flight.
    #[must_use]
    pub fn is_momentum_active(&self) -> bool {
        self.momentum.is_active()
    }

    /// Check if a gesture session or marker drag is live.
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.router.is_active() || self.drag.is_some()
    }

    /// Allow or disallow two-axis panning.
    pub fn set_diagonal_scrolling(&mut self, enabled: bool) {
        self.config.diagonal_scrolling = enabled;
    }

    /// Invert or restore the pan direction.
    pub fn set_reverse_scrolling(&mut self, enabled: bool) {
        self.config.reverse_scrolling = enabled;
    }

    /// Resize the teardrop handles; `0.0` disables markers and hides any
    /// currently visible.
    pub fn set_teardrop_size(&mut self, size: f32) {
        self.config.teardrop_size = size;
        if !self.config.markers_enabled() {
            self.markers = MarkerSet::default();
        }
    }

    /// Update the caret-marker lifetime.
    pub fn set_teardrop_timeout(&mut self, timeout: Duration) {
        self.config.teardrop_timeout = timeout;
    }

    /// Update the long-press window.
    pub fn set_long_press_timeout(&mut self, window: Duration) {
        self.config.long_press_timeout = window;
        self.router.set_long_press(window);
    }

    /// Update the double-tap window.
    pub fn set_double_tap_window(&mut self, window: Duration) {
        self.config.double_tap_window = window;
        self.router.set_double_tap(window);
    }

    /// Update the scroll settle debounce.
    pub fn set_scroll_settle_timeout(&mut self, timeout: Duration) {
        self.config.scroll_settle_timeout = timeout;
    }

    /// Enable or disable haptic feedback on selection.
    pub fn set_vibrate_on_tap(&mut self, enabled: bool) {
        self.config.vibrate_on_tap = enabled;
    }

    /// Record the menu's rendered size and reflow it if visible.
    pub fn measure_menu(&mut self, size: Size) {
        self.menu.set_size(size);
        if let Some(anchor) = self.menu.anchor() {
            self.place_menu(anchor);
        }
    }

    /// Dispatch one raw touch event.
    ///
    /// Touches landing on a visible marker begin a drag instead of a
    /// gesture session; touches landing on the visible menu are tracked
    /// only for tap-move suppression.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAttached`] if called before [`attach`](Self::attach).
    pub fn on_touch(&mut self, event: TouchEvent, now: Instant) -> Result<()> {
        if !self.attached {
            return Err(Error::NotAttached);
        }

        match event.phase {
            TouchPhase::Start => {
                let local = coords::screen_to_local(&self.surface, event.point);
                if self.menu.is_visible() && self.menu.rect().contains(local) {
                    self.menu_touch = true;
                    self.menu.begin_touch();
                    return Ok(());
                }
                if let Some(kind) = self.markers.hit_test(local, &self.config) {
                    self.begin_marker_drag(kind);
                    return Ok(());
                }
                let action = self.router.handle(event, now);
                self.run(action, now);
            }
            TouchPhase::Move => {
                if self.menu_touch {
                    self.menu.note_move();
                    return Ok(());
                }
                if self.drag.is_some() {
                    self.marker_drag_move(event.point, now);
                    return Ok(());
                }
                let action = self.router.handle(event, now);
                self.run(action, now);
            }
            TouchPhase::End => {
                if self.menu_touch {
                    self.menu_touch = false;
                    return Ok(());
                }
                if self.drag.is_some() {
                    self.end_marker_drag(now);
                    return Ok(());
                }
                let action = self.router.handle(event, now);
                self.run(action, now);
            }
        }
        Ok(())
    }

    /// Advance timers and the momentum animation. Call once per display
    /// frame.
    pub fn on_frame(&mut self, now: Instant) {
        if !self.attached {
            return;
        }

        let action = self.router.poll(now);
        self.run(action, now);

        if self.caret_hide_deadline.is_some_and(|d| now >= d) {
            self.caret_hide_deadline = None;
            self.clear_cursor_marker();
            self.hide_menu(true);
        }

        if self.settle_deadline.is_some_and(|d| now >= d) {
            self.settle_deadline = None;
            self.on_scroll_settled();
        }

        if self.momentum.is_active() {
            let applied = self.momentum.step(&mut self.surface);
            if !applied.is_zero() {
                self.note_scroll(now);
            }
        }
    }

    /// Handle a change notification the controller did not itself
    /// initiate.
    pub fn on_surface_event(&mut self, event: SurfaceEvent, now: Instant) {
        if !self.attached {
            return;
        }

        match event {
            SurfaceEvent::ContentChanged => {
                self.clear_cursor_marker();
                self.clear_selection_markers(true);
                self.hide_menu(true);
            }
            SurfaceEvent::FoldChanged => {
                if self.state.selection_active {
                    self.position_selection_markers();
                    self.hide_menu(true);
                    self.show_menu(MarkerKind::SelectionEnd);
                } else {
                    self.clear_cursor_marker();
                }
            }
            SurfaceEvent::Scrolled => self.note_scroll(now),
            SurfaceEvent::SessionChanged => {
                let has_text = self.surface.selected_text().is_some();
                self.state.selection_active = has_text;
                self.state.menu_active = has_text;
            }
            SurfaceEvent::CaretMoved => {
                if self.markers.caret.visible {
                    self.clear_cursor_marker();
                }
                if self.markers.start.visible || self.markers.end.visible {
                    self.clear_selection_markers(true);
                }
                if self.menu.is_visible() {
                    self.hide_menu(true);
                }
            }
            SurfaceEvent::SelectionChanged => {
                if self.markers.start.visible || self.markers.end.visible {
                    self.clear_selection_markers(true);
                }
                if self.menu.is_visible() {
                    self.hide_menu(true);
                }
            }
        }
    }

    /// Activate a menu item the host resolved from a tap on the menu.
    ///
    /// Ignored if the menu is hidden, if the menu touch sequence moved,
    /// or if the action is not in the current item set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAttached`] if called before [`attach`](Self::attach).
    pub fn menu_activate(&mut self, action: MenuAction, now: Instant) -> Result<()> {
        if !self.attached {
            return Err(Error::NotAttached);
        }
        if !self.menu.is_visible() || self.menu.touch_moved() {
            return Ok(());
        }
        if !self.menu.items().contains(action.item()) {
            return Ok(());
        }

        self.surface.execute(action.command());
        emit_event(names::MENU_ACTION, action.name());

        if action == MenuAction::SelectAll {
            let last = self.surface.last_line();
            self.surface.scroll_to_line(last);
            self.note_scroll(now);
            self.state.selection_active = true;
            self.state.menu_active = true;
        }
        Ok(())
    }

    fn run(&mut self, action: Option<RouterAction>, now: Instant) {
        let Some(action) = action else { return };
        match action {
            RouterAction::CancelMomentum => self.momentum.cancel(),
            RouterAction::Pan(delta, lock) => {
                let policy = self.policy(lock);
                let applied = scroll::apply_pan(&mut self.surface, delta, policy);
                if !applied.is_zero() {
                    self.note_scroll(now);
                }
            }
            RouterAction::TapCaret(point) => {
                self.move_caret_to(point);
                self.cursor_mode(now);
                emit_event(names::TAP, "");
            }
            RouterAction::SelectAt(point) => {
                self.move_caret_to(point);
                let caret = self.surface.caret();
                self.surface.select_word_at(caret);
                if self.surface.selected_text().is_some() {
                    self.selection_mode(Some(MarkerKind::SelectionEnd));
                    if self.config.vibrate_on_tap {
                        emit_event(names::HAPTIC, &VIBRATION_MS.to_string());
                    }
                }
                emit_event(names::SELECT, "");
            }
            RouterAction::BeginMomentum(delta, lock) => {
                self.momentum.begin(delta, self.policy(lock));
                emit_event(names::SCROLL, "");
            }
        }
    }

    fn policy(&self, lock: AxisLock) -> ScrollPolicy {
        ScrollPolicy::new(
            self.config.reverse_scrolling,
            self.config.diagonal_scrolling,
            lock,
        )
    }

    fn move_caret_to(&mut self, point: Point) {
        let pos = self.surface.screen_to_text(point);
        self.surface.set_caret(pos);
    }

    /// Show the caret marker at the caret, with its auto-hide armed.
    fn cursor_mode(&mut self, now: Instant) {
        if !self.config.markers_enabled() {
            return;
        }
        self.clear_selection_markers(true);
        let caret = self.surface.caret();
        let anchor = coords::marker_anchor(&self.surface, caret, 0.0);
        self.markers.caret.show_at(caret, anchor);
        self.caret_hide_deadline = Some(now + self.config.teardrop_timeout);
    }

    /// Show the selection handles, and the menu when a trigger is given.
    fn selection_mode(&mut self, trigger: Option<MarkerKind>) {
        if !self.config.markers_enabled() {
            return;
        }
        self.clear_cursor_marker();
        self.state.selection_active = true;
        self.position_selection_markers();
        if let Some(t) = trigger {
            self.show_menu(t);
        }
    }

    fn position_selection_markers(&mut self) {
        let sel = self.surface.selection();
        let start_anchor =
            coords::marker_anchor(&self.surface, sel.start, -self.config.teardrop_size);
        let end_anchor = coords::marker_anchor(&self.surface, sel.end, 0.0);
        self.markers.start.show_at(sel.start, start_anchor);
        self.markers.end.show_at(sel.end, end_anchor);
    }

    fn show_menu(&mut self, trigger: MarkerKind) {
        self.state.menu_active = true;
        let items = menu::items_for(
            self.surface.is_read_only(),
            self.surface.selected_text().is_some(),
        );
        let origin = self.menu_origin(trigger);
        self.menu.show(trigger, items, origin);
        emit_event(names::MENU_SHOW, "");
    }

    fn place_menu(&mut self, trigger: MarkerKind) {
        let items = self.menu.items();
        let origin = self.menu_origin(trigger);
        self.menu.show(trigger, items, origin);
    }

    fn menu_origin(&self, trigger: MarkerKind) -> Point {
        let trigger_rect = self.markers.rect(trigger, &self.config);
        let container = self.surface.container_rect();
        menu::place(
            self.menu.size(),
            trigger_rect,
            Size::new(container.width, container.height),
            self.surface.line_height(),
        )
    }

    fn hide_menu(&mut self, clear_active: bool) {
        if !self.menu.is_visible() {
            return;
        }
        self.menu.hide();
        if clear_active {
            self.state.menu_active = false;
        }
    }

    fn clear_cursor_marker(&mut self) {
        if self.markers.caret.immortal {
            return;
        }
        self.markers.caret.hide();
        self.caret_hide_deadline = None;
    }

    fn clear_selection_markers(&mut self, clear_active: bool) {
        if self.markers.selection_immortal() {
            return;
        }
        self.markers.start.hide();
        self.markers.end.hide();
        if clear_active {
            self.state.selection_active = false;
        }
    }

    /// The viewport moved: hide transient visuals, keep the interaction
    /// flags, and debounce the restore.
    fn note_scroll(&mut self, now: Instant) {
        self.clear_cursor_marker();
        self.clear_selection_markers(false);
        self.hide_menu(false);
        self.settle_deadline = Some(now + self.config.scroll_settle_timeout);
    }

    fn on_scroll_settled(&mut self) {
        if self.state.selection_active {
            self.selection_mode(None);
        }
        if self.state.menu_active {
            self.show_menu(MarkerKind::SelectionEnd);
        }
    }

    fn begin_marker_drag(&mut self, kind: MarkerKind) {
        self.markers.get_mut(kind).immortal = true;
        if kind == MarkerKind::Caret {
            self.caret_hide_deadline = None;
        }
        self.drag = Some(MarkerDrag { kind, moved: false });
    }

    fn marker_drag_move(&mut self, point: Point, now: Instant) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let kind = drag.kind;
        let first_move = !drag.moved;
        drag.moved = true;

        if first_move {
            self.hide_menu(true);
        }

        let pos = marker::drag_target(&self.surface, kind, point, self.config.teardrop_size);
        match kind {
            MarkerKind::Caret => self.surface.set_caret(pos),
            MarkerKind::SelectionStart => {
                self.surface.set_selection_anchor(pos);
                let end = self.surface.selection().end;
                let end_anchor = coords::marker_anchor(&self.surface, end, 0.0);
                self.markers.end.show_at(end, end_anchor);
            }
            MarkerKind::SelectionEnd => {
                self.surface.extend_selection_to(pos);
                let start = self.surface.selection().start;
                let start_anchor =
                    coords::marker_anchor(&self.surface, start, -self.config.teardrop_size);
                self.markers.start.show_at(start, start_anchor);
            }
        }

        if !self.surface.is_row_visible(pos.row) {
            self.surface.scroll_to_line(pos.row);
            self.note_scroll(now);
        }

        let marker_pos = coords::drag_marker_position(&self.surface, point);
        self.markers.get_mut(kind).show_at(pos, marker_pos);
    }

    fn end_marker_drag(&mut self, now: Instant) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.markers.get_mut(drag.kind).immortal = false;

        match drag.kind {
            MarkerKind::Caret => self.cursor_mode(now),
            MarkerKind::SelectionStart | MarkerKind::SelectionEnd => {
                self.selection_mode(Some(drag.kind));
            }
        }

        if !drag.moved {
            self.show_menu(drag.kind);
        }
    }
}
