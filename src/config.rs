//! Configuration system
//!
//! Schemas are declared with `config_struct!` so every field carries its
//! default. Values are loaded from TOML and read through `with_config`.
#[macro_use]
pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{ Config, DisplayConfig, EngineConfig, SortDirections };
pub use utils::{ get_config_clone, load_config_from_path, read_config_file, set_config, with_config };
