#![deny(missing_docs)]
//! Shared logging utilities for the SCORMy workspace.
//!
//! This crate provides the `chat_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every line is
//! prefixed with the UI frame number of the calling thread, so engine
//! transitions can be matched against the frame that rendered them.

use std::cell::Cell;

#[doc(hidden)]
pub use log as __log;

thread_local! {
    /// Thread-local storage for the current UI frame number.
    static FRAME: Cell<u64> = const { Cell::new(0) };
}

/// Sets the UI frame number for the current thread.
/// The shell calls this once per rendered frame.
pub fn set_frame(frame: u64) {
    FRAME.with(|v| v.set(frame));
}

/// Retrieves the UI frame number for the current thread.
/// Returns 0 if no frame has been rendered yet (tests, startup).
pub fn current_frame() -> u64 {
    FRAME.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! chat_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!("[f{}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! chat_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!("[f{}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! chat_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!("[f{}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! chat_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!("[f{}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! chat_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!("[f{}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
