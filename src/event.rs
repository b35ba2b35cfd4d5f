//! Event and log callback system.
//!
//! Hosts observe gesture classification and UI transitions through two
//! optional global callbacks: a structured event channel (named events with
//! a string payload) and a leveled log channel. Haptic feedback is delivered
//! over the event channel as [`names::HAPTIC`] so platforms that can vibrate
//! subscribe and others ignore it.

use std::sync::{Mutex, OnceLock};

/// Well-known event names emitted by the controller.
pub mod names {
    /// A plain tap moved the caret.
    pub const TAP: &str = "gesture.tap";
    /// A pan gesture ended and momentum began.
    pub const SCROLL: &str = "gesture.scroll";
    /// A long-press or double-tap selected a word.
    pub const SELECT: &str = "gesture.select";
    /// The context menu became visible.
    pub const MENU_SHOW: &str = "menu.show";
    /// A context menu action was executed.
    pub const MENU_ACTION: &str = "menu.action";
    /// Request for haptic feedback; payload is a millisecond duration.
    pub const HAPTIC: &str = "haptic.vibrate";
}

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type EventCallback = Box<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn event_callback() -> &'static Mutex<Option<EventCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<EventCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global event callback.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    let mut guard = event_callback().lock().expect("event callback lock");
    *guard = Some(Box::new(callback));
}

/// Emit an event to the registered callback.
pub fn emit_event(name: &str, data: &str) {
    if let Ok(guard) = event_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(name, data);
        }
    }
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_callback().lock().expect("log callback lock");
    *guard = Some(Box::new(callback));
}

/// Emit a log event.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_callback() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let called = Arc::new(AtomicBool::new(false));
        let called_clone = Arc::clone(&called);
        set_event_callback(move |name, _data| {
            if name == names::HAPTIC {
                called_clone.store(true, Ordering::SeqCst);
            }
        });
        emit_event(names::HAPTIC, "30");
        assert!(called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_log_callback() {
        set_log_callback(|level, msg| {
            assert_eq!(level, LogLevel::Debug);
            assert_eq!(msg, "momentum idle");
        });
        emit_log(LogLevel::Debug, "momentum idle");
    }
}
