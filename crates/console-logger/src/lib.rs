//! Console Logger
//!
//! `log` backend for the browser. Records go to `console.error`,
//! `console.warn`, `console.info` or `console.debug` depending on level,
//! so the devtools filter buttons keep working.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Logger that forwards records to the browser console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.level(), record.target(), record.args()));
        match console_method(record.level()) {
            ConsoleMethod::Error => web_sys::console::error_1(&line),
            ConsoleMethod::Warn => web_sys::console::warn_1(&line),
            ConsoleMethod::Info => web_sys::console::info_1(&line),
            ConsoleMethod::Debug => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger has already been installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

// ========================
// Formatting
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

fn console_method(level: Level) -> ConsoleMethod {
    match level {
        Level::Error => ConsoleMethod::Error,
        Level::Warn => ConsoleMethod::Warn,
        Level::Info => ConsoleMethod::Info,
        // Trace has no console counterpart
        Level::Debug | Level::Trace => ConsoleMethod::Debug,
    }
}

fn format_line(level: Level, target: &str, args: &std::fmt::Arguments<'_>) -> String {
    format!("{:<5} {}: {}", level, target, args)
}
