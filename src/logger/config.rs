/// Logger configuration and debug-flag handling
use std::collections::HashSet;
use std::sync::RwLock;

use once_cell::sync::Lazy;

use super::levels::LogLevel;
use super::tags::LogTag;

#[derive(Debug, Clone, PartialEq)]
pub struct LoggerConfig {
    /// Messages above this level are dropped (Debug still needs a tag flag)
    pub min_level: LogLevel,
    /// Tags with debug output enabled, by debug key
    pub debug_tags: HashSet<String>,
    /// Prefix console lines with the local time
    pub show_time: bool,
    pub colored: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            show_time: true,
            colored: true,
        }
    }
}

impl LoggerConfig {
    /// Build from command-line style flags
    ///
    /// `--verbose` lowers the threshold to Verbose and `--quiet` raises it to
    /// Warning. `--debug-<tag>` enables debug output for one tag and lets
    /// Debug lines through the threshold. `--no-color` and `--no-time` strip
    /// the line decorations.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let mut config = LoggerConfig::default();
        for arg in args {
            let arg = arg.as_ref();
            if arg == "--verbose" {
                config.min_level = LogLevel::Verbose;
            } else if arg == "--quiet" {
                config.min_level = LogLevel::Warning;
            } else if arg == "--no-color" {
                config.colored = false;
            } else if arg == "--no-time" {
                config.show_time = false;
            } else if let Some(tag) = arg.strip_prefix("--debug-") {
                if !tag.is_empty() {
                    config.debug_tags.insert(tag.to_lowercase());
                }
            }
        }
        if !config.debug_tags.is_empty() && config.min_level < LogLevel::Debug {
            config.min_level = LogLevel::Debug;
        }
        config
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> = Lazy::new(||
    RwLock::new(LoggerConfig::default())
);

pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub fn set_logger_config(config: LoggerConfig) {
    match LOGGER_CONFIG.write() {
        Ok(mut current) => {
            *current = config;
        }
        Err(poisoned) => {
            *poisoned.into_inner() = config;
        }
    }
}

pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    let config = get_logger_config();
    config.debug_tags.contains("all") || config.debug_tags.contains(&tag.to_debug_key())
}
