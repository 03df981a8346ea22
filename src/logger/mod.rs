//! Structured logging for poolscope
//!
//! ```rust
//! use poolscope::logger::{ self, LogTag };
//!
//! logger::info(LogTag::System, "Loaded 120 pools");
//! logger::debug(LogTag::Pools, "sort=amount desc page=0"); // Only with --debug-pools
//! ```
//!
//! Call `logger::init_with` once at startup with a `LoggerConfig` built from
//! the `--debug-<tag>`, `--verbose`, `--quiet`, `--no-color` and `--no-time`
//! flags.

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{ get_logger_config, set_logger_config, LoggerConfig };
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize with an explicit configuration
pub fn init_with(config: LoggerConfig) {
    set_logger_config(config);
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (still shown with --quiet)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (hidden by --quiet)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level, only shown with --debug-<tag>
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level, only shown with --verbose
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
