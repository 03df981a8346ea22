use super::schemas::Config;
use crate::errors::{ PoolScopeError, Result };
/// Configuration utilities - loading and access helpers
///
/// - Loading configuration from disk
/// - Replacing the global configuration at runtime
/// - Thread-safe access helpers
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::RwLock;

/// Global configuration instance
///
/// Falls back to schema defaults when nothing has been loaded.
pub static CONFIG: OnceCell<RwLock<Config>> = OnceCell::new();

/// Read and parse a configuration file without touching the global instance
///
/// A missing file yields the default configuration.
pub fn read_config_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        PoolScopeError::configuration_error(
            format!("Failed to read config file '{}': {}", path.display(), e)
        )
    })?;

    toml::from_str::<Config>(&contents).map_err(|e| {
        PoolScopeError::configuration_error(
            format!("Failed to parse config file '{}': {}", path.display(), e)
        )
    })
}

/// Load configuration from a specific file path into the global CONFIG
///
/// Replaces any previously loaded configuration.
pub fn load_config_from_path(path: impl AsRef<Path>) -> Result<()> {
    let config = read_config_file(path)?;
    set_config(config)
}

/// Replace the global configuration
pub fn set_config(new_config: Config) -> Result<()> {
    let config_lock = CONFIG.get_or_init(|| RwLock::new(Config::default()));
    let mut config = config_lock
        .write()
        .map_err(|e| {
            PoolScopeError::configuration_error(
                format!("Failed to acquire config write lock: {}", e)
            )
        })?;
    *config = new_config;
    Ok(())
}

/// Execute a function with read access to the configuration
///
/// # Example
/// ```
/// use poolscope::config::with_config;
///
/// let page_size = with_config(|cfg| cfg.engine.page_size);
/// assert!(page_size > 0);
/// ```
pub fn with_config<F, R>(f: F) -> R where F: FnOnce(&Config) -> R {
    let config_lock = CONFIG.get_or_init(|| RwLock::new(Config::default()));
    match config_lock.read() {
        Ok(config) => f(&config),
        // Poisoned lock: the stored value is still a complete Config
        Err(poisoned) => f(&poisoned.into_inner()),
    }
}

/// Get a clone of the entire configuration
pub fn get_config_clone() -> Config {
    with_config(|cfg| cfg.clone())
}
