#![deny(missing_docs)]
//! Shared logging utilities for the shelf workspace.
//!
//! This crate provides the `shelf_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Callers must depend
//! on `log` themselves since the macros expand to `log::*` invocations.

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! shelf_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! shelf_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! shelf_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! shelf_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! shelf_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Environment variable read by [`level_from_env`] in the shelf binary.
pub const LOG_LEVEL_ENV: &str = "SHELF_LOG";

/// Parses a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
///
/// Unknown or empty names yield `None`.
pub fn parse_level(raw: &str) -> Option<log::LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" => Some(log::LevelFilter::Off),
        "error" => Some(log::LevelFilter::Error),
        "warn" | "warning" => Some(log::LevelFilter::Warn),
        "info" => Some(log::LevelFilter::Info),
        "debug" => Some(log::LevelFilter::Debug),
        "trace" => Some(log::LevelFilter::Trace),
        _ => None,
    }
}

/// Reads the level from `var`, falling back to `default` when the variable is
/// unset or does not name a level.
pub fn level_from_env(var: &str, default: log::LevelFilter) -> log::LevelFilter {
    std::env::var(var)
        .ok()
        .and_then(|raw| parse_level(&raw))
        .unwrap_or(default)
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized, so every
/// test may call it unconditionally.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Debug builds get the chatty level, release builds info.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
