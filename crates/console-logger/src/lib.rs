//! Console Logger
//!
//! A `log` backend for browser applications.
//! - Writes every record to the browser console (stderr off wasm32)
//! - Keeps the most recent lines in a circular buffer for in-app inspection

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Number of lines kept in the circular buffer
pub const DEFAULT_CAPACITY: usize = 500;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("a global logger is already installed")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// Logger writing to the console and remembering recent lines
pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn remember(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
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
        let line = format_line(
            &self.app_name,
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args(),
        );
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Call once, at startup.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), LoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(app_name, level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent lines of the global logger (empty before `init_logger`)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::lines).unwrap_or_default()
}

/// Parse a level name ("warn", "DEBUG", ...), falling back to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

fn format_line(
    app_name: &str,
    time: impl fmt::Display,
    level: Level,
    target: &str,
    args: &fmt::Arguments,
) -> String {
    format!("{} {:<5} [{}] {}: {}", time, level, app_name, target, args)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_info(logger: &ConsoleLogger, n: usize) {
        logger.log(
            &Record::builder()
                .args(format_args!("line {}", n))
                .level(Level::Info)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_format_line() {
        let line = format_line("Eldendex", "12:00:00.000", Level::Warn, "list", &format_args!("boom"));
        assert_eq!(line, "12:00:00.000 WARN  [Eldendex] list: boom");
    }

    #[test]
    fn test_buffer_drops_oldest() {
        let logger = ConsoleLogger::new("test", LevelFilter::Trace, 3);
        for n in 0..5 {
            log_info(&logger, n);
        }
        let lines = logger.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("line 2"));
        assert!(lines[2].ends_with("line 4"));
    }

    #[test]
    fn test_level_filter() {
        let logger = ConsoleLogger::new("test", LevelFilter::Warn, 10);
        log_info(&logger, 1);
        assert!(logger.lines().is_empty());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("nonsense"), LevelFilter::Info);
    }
}
