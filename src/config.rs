//! Touch controller configuration.

use crate::error::{Error, Result};
use std::time::Duration;

/// Haptic pulse length requested on word selection, in milliseconds.
pub const VIBRATION_MS: u64 = 30;

/// Configuration for the touch controller.
///
/// Read once at [`attach`](crate::controller::TouchController::attach);
/// individual fields are live-updatable afterwards through the controller's
/// `set_*` methods.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchConfig {
    /// Allow simultaneous two-axis panning. When disabled, each gesture
    /// pans only along the axis of its dominant initial movement.
    pub diagonal_scrolling: bool,
    /// Invert the pan direction (viewport offset follows the finger).
    pub reverse_scrolling: bool,
    /// Visual/hit-test size of the teardrop drag handles, in pixels.
    /// `0.0` disables markers entirely.
    pub teardrop_size: f32,
    /// Caret marker lifetime before it auto-hides.
    pub teardrop_timeout: Duration,
    /// Hold time before a stationary touch becomes a word selection.
    pub long_press_timeout: Duration,
    /// Window within which a second tap counts as a double tap.
    pub double_tap_window: Duration,
    /// Quiet period after the last scroll before hidden markers reappear.
    pub scroll_settle_timeout: Duration,
    /// Request haptic feedback when a word selection is made.
    pub vibrate_on_tap: bool,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            diagonal_scrolling: false,
            reverse_scrolling: false,
            teardrop_size: 30.0,
            teardrop_timeout: Duration::from_secs(3),
            long_press_timeout: Duration::from_millis(500),
            double_tap_window: Duration::from_millis(300),
            scroll_settle_timeout: Duration::from_millis(100),
            vibrate_on_tap: true,
        }
    }
}

impl TouchConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `teardrop_size` is negative or
    /// not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.teardrop_size.is_finite() || self.teardrop_size < 0.0 {
            return Err(Error::InvalidConfig {
                field: "teardrop_size",
                value: self.teardrop_size,
            });
        }
        Ok(())
    }

    /// Check if teardrop markers are enabled.
    #[must_use]
    pub fn markers_enabled(&self) -> bool {
        self.teardrop_size > 0.0
    }

    /// Rendered width of the caret teardrop: the diagonal of the
    /// configured square size.
    #[must_use]
    pub fn teardrop_width(&self) -> f32 {
        (2.0 * self.teardrop_size * self.teardrop_size).sqrt()
    }
}
